//! healthlog — daily fitness metrics from health-tracking app log exports.
//!
//! The pipeline lives in `healthlog-core` and the export readers in
//! `healthlog-feeds`; this crate re-exports both and adds the plain-text and
//! JSON report rendering used by the `healthlog` binary.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► normalizer ──► Metric::run ──► report
//! ```

pub mod report;

use std::path::Path;

pub use healthlog_core::{
    aggregate, config, correction, error, extract, metrics, normalizer, types, AnalysisOptions,
    Error, Metric, MetricReport, RawRecord, Record,
};
pub use healthlog_feeds::{Columns, Feed, FeedError, FileFeed, StdinFeed};

use healthlog_core::aggregate::MalformedPolicy;
use healthlog_core::config::Config;

/// Input path that selects [`StdinFeed`].
pub const STDIN_PATH: &str = "-";

/// Command-line switches that override the loaded configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub skip_malformed: bool,
    pub no_correction: bool,
}

/// Analysis options from `config`, with `overrides` applied on top.
pub fn resolve_options(config: &Config, overrides: Overrides) -> AnalysisOptions {
    let mut options = config.analysis_options();
    if overrides.skip_malformed {
        options.on_malformed = MalformedPolicy::Skip;
    }
    if overrides.no_correction {
        options.correction = None;
    }
    options
}

/// Pick the feed for `input`: stdin for `-`, a file otherwise.
pub fn open_feed(input: &Path, columns: Columns) -> Box<dyn Feed> {
    if input.as_os_str() == STDIN_PATH {
        Box::new(StdinFeed::new(columns))
    } else {
        Box::new(FileFeed::new(input, columns))
    }
}

/// Normalise `raws` and run one metric over them.
pub fn analyze(
    raws: Vec<RawRecord>,
    metric: Metric,
    options: &AnalysisOptions,
) -> Result<MetricReport, Error> {
    let records = normalizer::normalize_all(raws)?;
    metric.run(&records, options)
}

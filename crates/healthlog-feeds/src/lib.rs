//! healthlog-feeds — log export sources for healthlog.
//!
//! Each feed reads a structured log export (one CSV row per log line) and
//! hands back [`healthlog_core::RawRecord`] values in file order. Only the
//! timestamp, content and event-template columns are kept.

pub mod csv_export;
pub mod file;
pub mod stdin;

pub use csv_export::Columns;
pub use file::FileFeed;
pub use stdin::StdinFeed;

use healthlog_core::RawRecord;

/// Errors raised while reading a log export.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to open {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {feed}")]
    Csv {
        feed: String,
        #[source]
        source: csv::Error,
    },

    #[error("{feed}: required column {column:?} not found (header: {header:?})")]
    MissingColumn {
        feed: String,
        column: String,
        header: Vec<String>,
    },
}

/// Trait implemented by each log export source.
pub trait Feed {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> String;

    /// Read every row of the export.
    fn load(&mut self) -> Result<Vec<RawRecord>, FeedError>;
}

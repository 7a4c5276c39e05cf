//! Reader for the structured CSV export shared by every feed.
//!
//! The export has a header row; the columns we need are located by name, so
//! extra columns (`LineId`, `Component`, `Pid`, `EventId`, …) and column order
//! do not matter.

use std::io::Read;

use healthlog_core::RawRecord;

use crate::FeedError;

/// Header names of the three columns a feed reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub time: String,
    pub content: String,
    pub template: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            time: "Time".to_string(),
            content: "Content".to_string(),
            template: "EventTemplate".to_string(),
        }
    }
}

impl From<&healthlog_core::config::InputConfig> for Columns {
    fn from(input: &healthlog_core::config::InputConfig) -> Self {
        Self {
            time: input.time_column.clone(),
            content: input.content_column.clone(),
            template: input.template_column.clone(),
        }
    }
}

/// Read every data row of an export from `reader`.
pub fn read_export<R: Read>(
    reader: R,
    columns: &Columns,
    feed: &str,
) -> Result<Vec<RawRecord>, FeedError> {
    let csv_err = |source: csv::Error| FeedError::Csv {
        feed: feed.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut header: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    if let Some(first) = header.first_mut() {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    let position = |name: &str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| FeedError::MissingColumn {
                feed: feed.to_string(),
                column: name.to_string(),
                header: header.clone(),
            })
    };
    let time_idx = position(&columns.time)?;
    let content_idx = position(&columns.content)?;
    let template_idx = position(&columns.template)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(csv_err)?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        records.push(RawRecord {
            line: i as u64 + 1,
            timestamp_text: field(time_idx),
            content: field(content_idx),
            event_template: field(template_idx),
        });
    }

    tracing::debug!(feed, rows = records.len(), "log export read");
    Ok(records)
}

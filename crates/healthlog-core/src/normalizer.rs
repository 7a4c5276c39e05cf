//! Normalizer — parses the timestamp text of each [`RawRecord`] into a
//! [`Record`] with a calendar date and a time of day.
//!
//! The export uses a single fixed format (`20171223-22:15:29:606`); any row
//! that does not match it aborts the whole run.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::types::{RawRecord, Record};

/// `YYYYMMDD-HH:MM:SS:mmm`. The trailing 3-digit field is a fraction of a
/// second.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S:%3f";

/// Parse a single timestamp string.
pub fn parse_timestamp(text: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT)
}

/// Normalise one raw row.
pub fn normalize(raw: RawRecord) -> Result<Record> {
    let timestamp = parse_timestamp(&raw.timestamp_text).map_err(|source| {
        Error::MalformedTimestamp {
            line: raw.line,
            text: raw.timestamp_text.clone(),
            source,
        }
    })?;

    Ok(Record {
        date: timestamp.date(),
        time_of_day: timestamp.time(),
        timestamp,
        raw,
    })
}

/// Normalise every row, stopping at the first malformed timestamp.
///
/// File order is kept as-is. Rows are expected to be chronological; a
/// regression is logged once but never corrected here.
pub fn normalize_all(raws: impl IntoIterator<Item = RawRecord>) -> Result<Vec<Record>> {
    let mut records: Vec<Record> = Vec::new();
    let mut regression_logged = false;

    for raw in raws {
        let record = normalize(raw)?;
        if let Some(prev) = records.last() {
            if record.timestamp < prev.timestamp && !regression_logged {
                tracing::warn!(
                    line = record.line(),
                    previous_line = prev.line(),
                    "timestamps are not in chronological order; daily values follow file order"
                );
                regression_logged = true;
            }
        }
        records.push(record);
    }

    tracing::debug!(records = records.len(), "normalised log export");
    Ok(records)
}

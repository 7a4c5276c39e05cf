//! Test builders — ergonomic constructors for raw and normalised records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{NaiveDate, NaiveTime};
use healthlog::{normalizer, RawRecord, Record};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("20171223-22:15:29:606")
///     .content("onStandStepChanged 3579")
///     .template("onStandStepChanged <*>")
///     .line(4)
///     .build();
/// ```
pub struct RecordBuilder {
    line: u64,
    timestamp_text: String,
    content: String,
    event_template: String,
}

impl RecordBuilder {
    pub fn new(timestamp_text: impl Into<String>) -> Self {
        Self {
            line: 1,
            timestamp_text: timestamp_text.into(),
            content: String::new(),
            event_template: String::new(),
        }
    }

    pub fn line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.event_template = template.into();
        self
    }

    pub fn raw(self) -> RawRecord {
        RawRecord::new(
            self.line,
            self.timestamp_text,
            self.content,
            self.event_template,
        )
    }

    pub fn build(self) -> Record {
        normalizer::normalize(self.raw()).expect("builder timestamps must be well formed")
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A `getTodayTotalDetailSteps` reading with `steps` in the second `##` field.
pub fn steps_content(steps: u64) -> String {
    format!("getTodayTotalDetailSteps = 1514038440000##{steps}##548365##8661##12361##27173954")
}

pub fn calories_content(calories: u64) -> String {
    format!("calculateCaloriesWithCache totalCalories={calories}")
}

pub fn altitude_content(altitude: u64) -> String {
    format!("calculateAltitudeWithCache totalAltitude={altitude}")
}

/// Turn `(timestamp, content, template)` rows into normalised records,
/// numbering lines from 1 in slice order.
pub fn records_from(rows: &[(&str, &str, &str)]) -> Vec<Record> {
    normalizer::normalize_all(raws_from(rows)).expect("fixture rows must normalise")
}

pub fn raws_from(rows: &[(&str, &str, &str)]) -> Vec<RawRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, (ts, content, template))| RawRecord::new(i as u64 + 1, *ts, *content, *template))
        .collect()
}

/// `2017-12-<day>`, the month every fixture lives in.
pub fn dec(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 12, day).expect("valid December date")
}

pub fn hms_milli(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(h, m, s, ms).expect("valid time")
}

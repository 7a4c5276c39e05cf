//! Core types for healthlog-core.
//!
//! This module defines the data structures shared across all pipeline
//! stages: the [`RawRecord`] read from a log export, the normalised
//! [`Record`], and the date-keyed summary shapes produced by the aggregator.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// One row of the structured log export, exactly as the feed read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based data row position in the source. Only used for diagnostics.
    pub line: u64,
    /// Timestamp text, e.g. `20171223-22:15:29:606`.
    pub timestamp_text: String,
    /// Free-text log content.
    pub content: String,
    /// Templatised form of the content (`onStandStepChanged <*>`, …).
    pub event_template: String,
}

impl RawRecord {
    pub fn new(
        line: u64,
        timestamp_text: impl Into<String>,
        content: impl Into<String>,
        event_template: impl Into<String>,
    ) -> Self {
        Self {
            line,
            timestamp_text: timestamp_text.into(),
            content: content.into(),
            event_template: event_template.into(),
        }
    }
}

/// A [`RawRecord`] with its timestamp parsed and split into date and time.
///
/// Built only by [`normalize`](crate::normalizer::normalize), so `date` and
/// `time_of_day` always agree with `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub raw: RawRecord,
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
}

impl Record {
    pub fn line(&self) -> u64 {
        self.raw.line
    }

    pub fn content(&self) -> &str {
        &self.raw.content
    }

    pub fn event_template(&self) -> &str {
        &self.raw.event_template
    }

    /// `hour * 60 + minute`, the bucket used for active-time counting.
    pub fn minute_of_day(&self) -> u32 {
        self.time_of_day.hour() * 60 + self.time_of_day.minute()
    }
}

// ---------------------------------------------------------------------------
// Daily summaries
// ---------------------------------------------------------------------------

/// The reduced value for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyValue<T> {
    pub date: NaiveDate,
    pub value: T,
}

/// Scalar-shaped summary: one value per date, ascending by date.
pub type DailySummary<T> = Vec<DailyValue<T>>;

/// A single reading inside a day's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint<T> {
    pub time: NaiveTime,
    pub value: T,
}

/// Every matching reading for one date, in record order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySeries<T> {
    pub date: NaiveDate,
    pub points: Vec<SeriesPoint<T>>,
}

impl<T> DaySeries<T> {
    pub fn times(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        self.points.iter().map(|p| p.time)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.points.iter().map(|p| &p.value)
    }
}

/// Series-shaped summary, ascending by date.
pub type DailySeries<T> = Vec<DaySeries<T>>;

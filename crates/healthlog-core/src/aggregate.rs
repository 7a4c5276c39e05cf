//! Daily aggregator — groups extracted values by calendar date and reduces
//! each day according to a metric's policy.
//!
//! Grouping goes through a `BTreeMap<NaiveDate, _>`, so every output is
//! ascending by date and only contains dates that had at least one
//! contributing record. Inside a date, record (file) order is kept; nothing
//! here re-sorts by time.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;
use crate::extract::{Extraction, Extractor};
use crate::types::{DailySeries, DailySummary, DailyValue, DaySeries, Record, SeriesPoint};

/// What to do with a row whose marker matched but whose payload did not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole query on the first malformed row.
    #[default]
    Abort,
    /// Log the row, drop it, and keep going.
    Skip,
}

/// Rows that matched a marker, paired with their extracted value.
#[derive(Debug, Clone)]
pub struct Matches<'a, T> {
    pub rows: Vec<(&'a Record, T)>,
    /// Malformed rows dropped under [`MalformedPolicy::Skip`].
    pub skipped: usize,
}

/// Run `extractor` over every record, dropping rows without the marker.
pub fn collect_matches<'a, T>(
    records: &'a [Record],
    extractor: Extractor<T>,
    policy: MalformedPolicy,
) -> Result<Matches<'a, T>> {
    let mut rows = Vec::new();
    let mut skipped = 0;

    for record in records {
        match extractor(record) {
            Ok(Extraction::Value(value)) => rows.push((record, value)),
            Ok(Extraction::NoMatch) => {}
            Err(err) => match policy {
                MalformedPolicy::Abort => return Err(err),
                MalformedPolicy::Skip => {
                    tracing::warn!(line = record.line(), error = %err, "skipping malformed row");
                    skipped += 1;
                }
            },
        }
    }

    Ok(Matches { rows, skipped })
}

/// Group values by date, preserving their relative order.
pub fn group_by_date<'a, T, I>(rows: I) -> BTreeMap<NaiveDate, Vec<(&'a Record, T)>>
where
    I: IntoIterator<Item = (&'a Record, T)>,
{
    let mut groups: BTreeMap<NaiveDate, Vec<(&'a Record, T)>> = BTreeMap::new();
    for (record, value) in rows {
        groups.entry(record.date).or_default().push((record, value));
    }
    groups
}

/// Scalar-last: the value of the last row (in file order) for each date.
pub fn last_per_day<'a, T, I>(rows: I) -> DailySummary<T>
where
    I: IntoIterator<Item = (&'a Record, T)>,
{
    let mut last: BTreeMap<NaiveDate, T> = BTreeMap::new();
    for (record, value) in rows {
        last.insert(record.date, value);
    }
    last.into_iter()
        .map(|(date, value)| DailyValue { date, value })
        .collect()
}

/// Series: every `(time_of_day, value)` pair for each date, in file order.
///
/// Times come from the same rows as the values, so both stay co-indexed.
pub fn series_per_day<'a, T, I>(rows: I) -> DailySeries<T>
where
    I: IntoIterator<Item = (&'a Record, T)>,
{
    group_by_date(rows)
        .into_iter()
        .map(|(date, rows)| DaySeries {
            date,
            points: rows
                .into_iter()
                .map(|(record, value)| SeriesPoint {
                    time: record.time_of_day,
                    value,
                })
                .collect(),
        })
        .collect()
}

/// Count: number of records per date that satisfy `predicate`.
pub fn count_per_day<F>(records: &[Record], predicate: F) -> DailySummary<u64>
where
    F: Fn(&Record) -> bool,
{
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records.iter().filter(|r| predicate(r)) {
        *counts.entry(record.date).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(date, value)| DailyValue { date, value })
        .collect()
}

/// Distinct-minute count: how many different minutes of the day had at
/// least one record, per date.
pub fn distinct_minutes_per_day(records: &[Record]) -> DailySummary<u64> {
    let mut minutes: BTreeMap<NaiveDate, BTreeSet<u32>> = BTreeMap::new();
    for record in records {
        minutes
            .entry(record.date)
            .or_default()
            .insert(record.minute_of_day());
    }
    minutes
        .into_iter()
        .map(|(date, set)| DailyValue {
            date,
            value: set.len() as u64,
        })
        .collect()
}

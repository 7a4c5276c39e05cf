//! Domain-specific assertion macros for healthlog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* daily summary invariant was violated.

// ---------------------------------------------------------------------------
// Summary assertions
// ---------------------------------------------------------------------------

/// Assert that a `DailySummary` holds exactly the given `(date, value)` pairs,
/// in order.
///
/// ```rust
/// assert_daily!(summary, [(dec(23), 2), (dec(24), 1)]);
/// ```
#[macro_export]
macro_rules! assert_daily {
    ($summary:expr, [$(($date:expr, $value:expr)),* $(,)?]) => {{
        let actual: Vec<_> = $summary.iter().map(|d| (d.date, d.value.clone())).collect();
        let expected = vec![$(($date, $value)),*];
        pretty_assertions::assert_eq!(actual, expected, "daily summary mismatch");
    }};
}

/// Assert that the values of one `DaySeries` are exactly `$values`.
#[macro_export]
macro_rules! assert_series_values {
    ($day:expr, [$($value:expr),* $(,)?]) => {{
        let day = &$day;
        let actual: Vec<_> = day.values().cloned().collect();
        let expected = vec![$($value),*];
        pretty_assertions::assert_eq!(actual, expected, "series values for {}", day.date);
    }};
}

// ---------------------------------------------------------------------------
// Invariant assertions
// ---------------------------------------------------------------------------

/// Assert that dates in a summary or series are strictly ascending.
#[macro_export]
macro_rules! assert_dates_ascending {
    ($items:expr) => {{
        let dates: Vec<chrono::NaiveDate> = $items.iter().map(|d| d.date).collect();
        for pair in dates.windows(2) {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_dates_ascending! failed: {} is not before {}\n  dates: {:?}",
                    pair[0], pair[1], dates
                );
            }
        }
    }};
}

/// Assert that every day of a series has as many times as values and no day
/// is empty.
#[macro_export]
macro_rules! assert_coindexed {
    ($series:expr) => {{
        for day in $series.iter() {
            let times = day.times().count();
            let values = day.values().count();
            if times != values || times == 0 {
                panic!(
                    "assert_coindexed! failed on {}: {} times, {} values",
                    day.date, times, values
                );
            }
        }
    }};
}

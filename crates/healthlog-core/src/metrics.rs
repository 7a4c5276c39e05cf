//! The five daily metric queries.
//!
//! Each query takes the normalised records and the [`AnalysisOptions`]
//! explicitly and recomputes its summary from scratch. Callers pick exactly
//! one, usually through [`Metric::run`].
//!
//! | Metric | Source | Shape |
//! |--------|--------|-------|
//! | [`daily_steps`] | `getTodayTotalDetailSteps` | last value per day + per-day series |
//! | [`workout_sessions`] | template `onStandStepChanged <*>` | count per day |
//! | [`calories_burnt`] | `calculateCaloriesWithCache` | last value per day, kcal |
//! | [`active_minutes`] | every record | distinct minutes per day |
//! | [`altitude_values`] | `calculateAltitudeWithCache` | per-day series |

use serde::Serialize;

use crate::aggregate::{
    collect_matches, count_per_day, distinct_minutes_per_day, last_per_day, series_per_day,
    MalformedPolicy,
};
use crate::correction::BoundaryCorrection;
use crate::error::Result;
use crate::extract::{extract_altitude, extract_calories, extract_steps, is_workout};
use crate::types::{DailySeries, DailySummary, DailyValue, Record};

/// Raw calorie readings are divided by this to report kcal.
pub const KCAL_DIVISOR: f64 = 1000.0;

/// Knobs shared by all queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub on_malformed: MalformedPolicy,
    /// Applied to the step-detail series only. `None` disables it.
    pub correction: Option<BoundaryCorrection>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            on_malformed: MalformedPolicy::Abort,
            correction: Some(BoundaryCorrection::default()),
        }
    }
}

/// Daily step totals together with the per-reading detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsReport {
    pub totals: DailySummary<u64>,
    pub detail: DailySeries<u64>,
}

/// A query result plus the number of malformed rows it dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<T> {
    pub data: T,
    pub skipped: usize,
}

impl<T> Report<T> {
    fn complete(data: T) -> Self {
        Self { data, skipped: 0 }
    }
}

/// Last step count per day, plus every reading per day with the boundary
/// correction applied to the detail series.
pub fn daily_steps(records: &[Record], options: &AnalysisOptions) -> Result<Report<StepsReport>> {
    let matches = collect_matches(records, extract_steps, options.on_malformed)?;

    let totals = last_per_day(matches.rows.iter().copied());
    let mut detail = series_per_day(matches.rows.iter().copied());
    if let Some(correction) = options.correction {
        correction.apply(&mut detail);
    }

    tracing::debug!(
        readings = matches.rows.len(),
        days = totals.len(),
        skipped = matches.skipped,
        "daily steps computed"
    );
    Ok(Report {
        data: StepsReport { totals, detail },
        skipped: matches.skipped,
    })
}

/// Number of workout-session events per day.
pub fn workout_sessions(records: &[Record]) -> Report<DailySummary<u64>> {
    let counts = count_per_day(records, is_workout);
    tracing::debug!(days = counts.len(), "workout sessions computed");
    Report::complete(counts)
}

/// Calories burnt at the end of each day, in kcal.
pub fn calories_burnt(
    records: &[Record],
    options: &AnalysisOptions,
) -> Result<Report<DailySummary<f64>>> {
    let matches = collect_matches(records, extract_calories, options.on_malformed)?;
    let kcal = last_per_day(matches.rows.iter().copied())
        .into_iter()
        .map(|day| DailyValue {
            date: day.date,
            value: day.value / KCAL_DIVISOR,
        })
        .collect::<Vec<_>>();

    tracing::debug!(days = kcal.len(), skipped = matches.skipped, "calories computed");
    Ok(Report {
        data: kcal,
        skipped: matches.skipped,
    })
}

/// Distinct minutes with any logged activity, per day.
pub fn active_minutes(records: &[Record]) -> Report<DailySummary<u64>> {
    let minutes = distinct_minutes_per_day(records);
    tracing::debug!(days = minutes.len(), "active minutes computed");
    Report::complete(minutes)
}

/// Every altitude reading per day, unscaled.
pub fn altitude_values(
    records: &[Record],
    options: &AnalysisOptions,
) -> Result<Report<DailySeries<f64>>> {
    let matches = collect_matches(records, extract_altitude, options.on_malformed)?;
    let series = series_per_day(matches.rows);
    tracing::debug!(days = series.len(), skipped = matches.skipped, "altitude computed");
    Ok(Report {
        data: series,
        skipped: matches.skipped,
    })
}

// ---------------------------------------------------------------------------
// Metric selection
// ---------------------------------------------------------------------------

/// One of the five queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Steps,
    Workouts,
    Calories,
    ActiveTime,
    Altitude,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Steps,
        Metric::Workouts,
        Metric::Calories,
        Metric::ActiveTime,
        Metric::Altitude,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Steps => "Daily Step Values",
            Metric::Workouts => "Workout Sessions",
            Metric::Calories => "Calories Burnt",
            Metric::ActiveTime => "Active Time",
            Metric::Altitude => "Altitude or Elevation",
        }
    }

    /// Unit label for the reported values.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Workouts => "sessions",
            Metric::Calories => "kcal",
            Metric::ActiveTime => "minutes",
            Metric::Altitude => "altitude",
        }
    }

    pub fn run(&self, records: &[Record], options: &AnalysisOptions) -> Result<MetricReport> {
        Ok(match self {
            Metric::Steps => MetricReport::Steps(daily_steps(records, options)?),
            Metric::Workouts => MetricReport::Workouts(workout_sessions(records)),
            Metric::Calories => MetricReport::Calories(calories_burnt(records, options)?),
            Metric::ActiveTime => MetricReport::ActiveTime(active_minutes(records)),
            Metric::Altitude => MetricReport::Altitude(altitude_values(records, options)?),
        })
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Steps => write!(f, "steps"),
            Metric::Workouts => write!(f, "workouts"),
            Metric::Calories => write!(f, "calories"),
            Metric::ActiveTime => write!(f, "active-time"),
            Metric::Altitude => write!(f, "altitude"),
        }
    }
}

/// Result of [`Metric::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "metric", rename_all = "kebab-case")]
pub enum MetricReport {
    Steps(Report<StepsReport>),
    Workouts(Report<DailySummary<u64>>),
    Calories(Report<DailySummary<f64>>),
    ActiveTime(Report<DailySummary<u64>>),
    Altitude(Report<DailySeries<f64>>),
}

impl MetricReport {
    pub fn metric(&self) -> Metric {
        match self {
            MetricReport::Steps(_) => Metric::Steps,
            MetricReport::Workouts(_) => Metric::Workouts,
            MetricReport::Calories(_) => Metric::Calories,
            MetricReport::ActiveTime(_) => Metric::ActiveTime,
            MetricReport::Altitude(_) => Metric::Altitude,
        }
    }

    pub fn skipped(&self) -> usize {
        match self {
            MetricReport::Steps(r) => r.skipped,
            MetricReport::Workouts(r) => r.skipped,
            MetricReport::Calories(r) => r.skipped,
            MetricReport::ActiveTime(r) => r.skipped,
            MetricReport::Altitude(r) => r.skipped,
        }
    }

    /// True when no date had a contributing record.
    pub fn is_empty(&self) -> bool {
        match self {
            MetricReport::Steps(r) => r.data.totals.is_empty(),
            MetricReport::Workouts(r) => r.data.is_empty(),
            MetricReport::Calories(r) => r.data.is_empty(),
            MetricReport::ActiveTime(r) => r.data.is_empty(),
            MetricReport::Altitude(r) => r.data.is_empty(),
        }
    }
}

//! healthlog-core — daily fitness metrics from health-app log exports.
//!
//! This crate holds the pipeline stages as public modules, plus the shared
//! types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! RawRecord ──► normalizer ──► extract ──► aggregate ──► metrics
//!                                              │
//!                                              └──► correction (step detail)
//! ```
//!
//! Everything is synchronous and recomputed from the raw rows on each query.

pub mod aggregate;
pub mod config;
pub mod correction;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod normalizer;
pub mod types;

pub use error::{Error, Result};
pub use metrics::{AnalysisOptions, Metric, MetricReport};
pub use types::{DailySeries, DailySummary, DailyValue, DaySeries, RawRecord, Record, SeriesPoint};

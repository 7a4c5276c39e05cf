//! Report rendering — turns a [`MetricReport`] into text for the terminal
//! or JSON for other tools.

use std::fmt::{self, Display, Write};

use anyhow::Context;
use healthlog_core::metrics::StepsReport;
use healthlog_core::{DailySeries, DailySummary, MetricReport};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

pub fn render(report: &MetricReport, format: Format, time_format: &str) -> anyhow::Result<String> {
    match format {
        Format::Table => render_table(report, time_format)
            .with_context(|| format!("cannot render series times with format {time_format:?}")),
        Format::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Plain-text rendering: a heading, one row per date, and for series
/// metrics one indented row per reading.
///
/// Fails if `time_format` cannot format a time of day (a date-only or
/// unknown specifier).
pub fn render_table(report: &MetricReport, time_format: &str) -> Result<String, fmt::Error> {
    let metric = report.metric();
    let mut out = String::new();
    writeln!(out, "{} ({})", metric.title(), metric.unit())?;

    if report.is_empty() {
        out.push_str("no data\n");
    } else {
        match report {
            MetricReport::Steps(r) => write_steps(&mut out, &r.data, time_format)?,
            MetricReport::Workouts(r) | MetricReport::ActiveTime(r) => {
                write_summary(&mut out, &r.data)?
            }
            MetricReport::Calories(r) => write_summary(&mut out, &r.data)?,
            MetricReport::Altitude(r) => write_series(&mut out, &r.data, time_format)?,
        }
    }

    if report.skipped() > 0 {
        writeln!(out, "skipped {} malformed row(s)", report.skipped())?;
    }
    Ok(out)
}

fn write_steps(out: &mut String, steps: &StepsReport, time_format: &str) -> fmt::Result {
    write_summary(out, &steps.totals)?;
    out.push_str("detail\n");
    write_series(out, &steps.detail, time_format)
}

fn write_summary<T: Display>(out: &mut String, summary: &DailySummary<T>) -> fmt::Result {
    for day in summary {
        writeln!(out, "{}  {}", day.date, day.value)?;
    }
    Ok(())
}

fn write_series<T: Display>(
    out: &mut String,
    series: &DailySeries<T>,
    time_format: &str,
) -> fmt::Result {
    for day in series {
        writeln!(out, "{}  {} reading(s)", day.date, day.points.len())?;
        for point in &day.points {
            writeln!(out, "  {}  {}", point.time.format(time_format), point.value)?;
        }
    }
    Ok(())
}

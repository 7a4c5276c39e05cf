//! Field extractors — pull one typed value out of a record's content.
//!
//! Every extractor follows the same shape: test the content for a marker
//! substring, and only on a hit split the payload and parse one component.
//! A missing marker is [`Extraction::NoMatch`]; a marker whose payload does
//! not parse is [`Error::MalformedPayload`].
//!
//! | Marker | Payload | Component |
//! |--------|---------|-----------|
//! | [`STEPS_MARKER`] | `ts##steps##…` after the first `=` | `##` index 1, integer |
//! | [`CALORIES_MARKER`] | `…=value` | last `=` component, float |
//! | [`ALTITUDE_MARKER`] | `…=value` | last `=` component, float |

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Record;

pub const STEPS_MARKER: &str = "getTodayTotalDetailSteps";
pub const CALORIES_MARKER: &str = "calculateCaloriesWithCache";
pub const ALTITUDE_MARKER: &str = "calculateAltitudeWithCache";

/// Event template that marks a workout session. Compared verbatim.
pub const WORKOUT_TEMPLATE: &str = "onStandStepChanged <*>";

const STEP_FIELD_DELIMITER: &str = "##";
const STEP_COUNT_INDEX: usize = 1;

/// Outcome of running an extractor on a record that parsed cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extraction<T> {
    /// The record does not carry this extractor's marker.
    NoMatch,
    Value(T),
}

/// A field extractor: pure, deterministic, independent of other rows.
pub type Extractor<T> = fn(&Record) -> Result<Extraction<T>>;

/// Cumulative step count from a `getTodayTotalDetailSteps` reading.
pub fn extract_steps(record: &Record) -> Result<Extraction<u64>> {
    let content = record.content();
    if !content.contains(STEPS_MARKER) {
        return Ok(Extraction::NoMatch);
    }

    let payload = content
        .split('=')
        .nth(1)
        .ok_or_else(|| missing(record, STEPS_MARKER, "no `=` after marker"))?;
    let component = payload
        .split(STEP_FIELD_DELIMITER)
        .nth(STEP_COUNT_INDEX)
        .ok_or_else(|| missing(record, STEPS_MARKER, "fewer than two `##` fields"))?;

    parse_component(record, STEPS_MARKER, component).map(Extraction::Value)
}

/// Raw calorie reading (calorie units, not kcal).
pub fn extract_calories(record: &Record) -> Result<Extraction<f64>> {
    extract_last_assignment(record, CALORIES_MARKER)
}

/// Altitude reading, unscaled.
pub fn extract_altitude(record: &Record) -> Result<Extraction<f64>> {
    extract_last_assignment(record, ALTITUDE_MARKER)
}

pub fn is_workout(record: &Record) -> bool {
    record.event_template() == WORKOUT_TEMPLATE
}

fn extract_last_assignment(record: &Record, marker: &'static str) -> Result<Extraction<f64>> {
    let content = record.content();
    if !content.contains(marker) {
        return Ok(Extraction::NoMatch);
    }
    // `rsplit` always yields at least one item.
    let component = content.rsplit('=').next().unwrap_or(content);
    parse_component(record, marker, component).map(Extraction::Value)
}

fn parse_component<T>(record: &Record, marker: &'static str, component: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    component
        .trim()
        .parse::<T>()
        .map_err(|e| Error::MalformedPayload {
            line: record.line(),
            marker,
            component: component.to_string(),
            reason: e.to_string(),
        })
}

fn missing(record: &Record, marker: &'static str, reason: &str) -> Error {
    Error::MalformedPayload {
        line: record.line(),
        marker,
        component: record.content().to_string(),
        reason: reason.to_string(),
    }
}

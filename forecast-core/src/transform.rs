//! Shaping of raw one-call payloads into the public forecast contract.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::model::{
    DailyForecast, ForecastResponse, RawForecast, TemperatureRange, WeatherDescriptor, Wind,
};

/// Calendar-date pattern used for every `date` field in the public contract.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Failures while shaping an upstream payload.
///
/// These surface to the caller as internal errors; the message text is
/// returned verbatim in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("upstream forecast contained an empty weather descriptor list")]
    EmptyWeatherDescriptors,
    #[error("upstream forecast contained no daily entries")]
    MissingDailyForecast,
    #[error("upstream forecast timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

/// Format a unix timestamp as a `YYYY-MM-DD` calendar date in the local
/// system timezone.
pub fn format_unix_date(ts: i64) -> Result<String, TransformError> {
    let utc = DateTime::from_timestamp(ts, 0).ok_or(TransformError::TimestampOutOfRange(ts))?;
    Ok(utc.with_timezone(&Local).format(DATE_FORMAT).to_string())
}

/// Uppercase the first letter of every whitespace-delimited word, leaving
/// all other characters untouched.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// The provider lists simultaneous descriptors from general to specific;
/// the last one is the most specific and the one the contract reports.
fn last_descriptor(list: &[WeatherDescriptor]) -> Result<&WeatherDescriptor, TransformError> {
    list.last().ok_or(TransformError::EmptyWeatherDescriptors)
}

/// Shape a raw one-call payload into the public forecast contract.
///
/// Pure: the input is borrowed immutably and never modified. Today's
/// precipitation probability comes from the first daily entry rather than
/// the current-conditions block, which does not carry one.
pub fn shape_forecast(raw: &RawForecast) -> Result<ForecastResponse, TransformError> {
    let current = last_descriptor(&raw.current.weather)?;
    let today = raw
        .daily
        .first()
        .ok_or(TransformError::MissingDailyForecast)?;

    let mut daily = Vec::with_capacity(raw.daily.len());
    for day in &raw.daily {
        let descriptor = last_descriptor(&day.weather)?;
        daily.push(DailyForecast {
            date: format_unix_date(day.dt)?,
            kind: title_case(&descriptor.main),
            description: title_case(&descriptor.description),
            temperature: TemperatureRange {
                low: day.temp.min,
                high: day.temp.max,
            },
        });
    }

    Ok(ForecastResponse {
        date: format_unix_date(raw.current.dt)?,
        kind: title_case(&current.main),
        description: title_case(&current.description),
        temperature: raw.current.temp,
        wind: Wind {
            speed: raw.current.wind_speed,
            bearing: raw.current.wind_deg,
        },
        precip_prob: today.pop,
        daily,
    })
}

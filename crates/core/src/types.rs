//! Weather records returned by providers.
//!
//! All records are plain values built fresh on every call. They serialize
//! with serde so the aggregator can hand them on as JSON; dates serialize in
//! ISO form (`2026-10-17`).

use chrono::NaiveDate;
use serde::Serialize;

/// Conditions right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    /// Absolute URL of the condition icon.
    pub image: String,
    /// Temperature in whole degrees Celsius.
    pub temperature: i32,
}

/// Daily temperature extremes, in the order the page lists them.
///
/// `min <= max` is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

/// Precipitation for one forecast slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Precipitation {
    /// Volume in millimetres; 0 when the page shows none.
    pub value: f64,
    /// Chance of rain in percent, when the source exposes one.
    pub probability: Option<u32>,
}

/// One column of the multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayForecast {
    pub image: String,
    /// Day-of-month as shown on the page.
    pub day: u32,
    /// Calendar date reconstructed from `day`.
    pub date: NaiveDate,
    pub temperature: TemperatureRange,
    pub precipitation: Precipitation,
}

/// One card of the hourly forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourForecast {
    /// Hour of day, 0–23.
    pub hour: u32,
    pub image: String,
    pub temperature: i32,
    pub precipitation: Precipitation,
}

//! Weather snapshot entity
//!
//! One fully-derived weather result: current conditions, the hourly and
//! daily series, and the classification used to pick imagery and copy.
//! This is what gets cached and what the glance panel renders.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Condition, Confidence, GeoLocation, TimeOfDay};

/// Current conditions at fetch time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in Celsius
    pub temperature: f32,
    /// Feels-like temperature in Celsius
    pub apparent_temperature: f32,
    /// Today's minimum in Celsius
    pub temperature_min: f32,
    /// Today's maximum in Celsius
    pub temperature_max: f32,
    /// Today's maximum rain probability (0-100)
    pub rain_probability: u8,
    /// Today's maximum UV index
    pub uv_index: f32,
    /// Wind speed in km/h
    pub wind_speed: f32,
    /// Whether the sun is up
    pub is_day: bool,
}

/// One hour of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Local clock time of the hour at the forecast location. Kept naive
    /// on purpose: the upstream reports times in the location's own
    /// timezone and a renderer wants the local reading, not an offset.
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Rain probability (0-100)
    pub rain_probability: u8,
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Forecast date
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub temperature_max: f32,
    /// Minimum temperature in Celsius
    pub temperature_min: f32,
    /// Maximum rain probability (0-100)
    pub rain_probability: u8,
}

/// A complete, renderable weather result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Where the forecast is for
    pub location: GeoLocation,
    /// Free-text place name when reverse geocoding succeeded
    pub place_name: Option<String>,
    /// Current conditions
    pub current: CurrentConditions,
    /// Hour-by-hour forecast
    pub hourly: Vec<HourlyEntry>,
    /// Day-by-day forecast
    pub daily: Vec<DailyEntry>,
    /// Derived coarse condition
    pub condition: Condition,
    /// Derived time-of-day bucket
    pub time_of_day: TimeOfDay,
    /// How much to trust this snapshot
    pub confidence: Confidence,
    /// When the snapshot was derived
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Derive the classification fields for a snapshot fetched now
    #[must_use]
    pub fn classify(current: &CurrentConditions, local_hour: u32) -> (Condition, TimeOfDay) {
        let condition = Condition::classify(
            current.apparent_temperature,
            current.rain_probability,
            current.wind_speed,
        );
        (condition, TimeOfDay::from_hour(local_hour))
    }

    /// The hardcoded snapshot served when there is no fresh and no cached
    /// data. Mild and deliberately unremarkable, tagged `Medium` so a
    /// consumer can tell it apart from live data.
    #[must_use]
    pub fn fallback_at(now: DateTime<Utc>) -> Self {
        let current = CurrentConditions {
            temperature: 21.0,
            apparent_temperature: 21.0,
            temperature_min: 14.0,
            temperature_max: 24.0,
            rain_probability: 10,
            uv_index: 4.0,
            wind_speed: 12.0,
            is_day: true,
        };
        let (condition, time_of_day) = Self::classify(&current, now.hour());
        Self {
            location: GeoLocation::sydney(),
            place_name: None,
            current,
            hourly: Vec::new(),
            daily: Vec::new(),
            condition,
            time_of_day,
            confidence: Confidence::Medium,
            fetched_at: now,
        }
    }

    /// The hardcoded fallback snapshot, stamped with the current time
    #[must_use]
    pub fn fallback() -> Self {
        Self::fallback_at(Utc::now())
    }

    /// Whether this snapshot is the hardcoded fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.confidence, Confidence::Medium)
    }
}

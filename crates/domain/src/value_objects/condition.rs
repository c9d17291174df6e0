//! Coarse weather condition used to pick imagery and copy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rain probability at or above this is a storm
const STORM_RAIN_THRESHOLD: u8 = 60;
/// Rain probability at or above this (below storm) is rain
const RAIN_THRESHOLD: u8 = 40;
/// Wind speed in km/h at or above this is windy
const WIND_THRESHOLD_KMH: f32 = 45.0;
/// Apparent temperature at or below this is cold
const COLD_THRESHOLD_C: f32 = 12.0;
/// Apparent temperature at or above this is heat
const HEAT_THRESHOLD_C: f32 = 32.0;

/// Coarse weather condition derived from forecast numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// High chance of rain, treat as stormy
    Storm,
    /// Moderate chance of rain
    Rain,
    /// Strong wind
    Wind,
    /// Cold day
    Cold,
    /// Hot day
    Heat,
    /// Nothing notable
    Clear,
}

impl Condition {
    /// All conditions, in classification priority order
    pub const ALL: [Self; 6] = [
        Self::Storm,
        Self::Rain,
        Self::Wind,
        Self::Cold,
        Self::Heat,
        Self::Clear,
    ];

    /// Classify a day from apparent temperature (Celsius), max rain
    /// probability (0-100) and wind speed (km/h).
    ///
    /// The first matching rule wins; the order encodes priority, not
    /// exclusivity. A cold stormy day is a storm day.
    #[must_use]
    pub fn classify(apparent_temperature: f32, rain_probability: u8, wind_speed: f32) -> Self {
        if rain_probability >= STORM_RAIN_THRESHOLD {
            Self::Storm
        } else if rain_probability >= RAIN_THRESHOLD {
            Self::Rain
        } else if wind_speed >= WIND_THRESHOLD_KMH {
            Self::Wind
        } else if apparent_temperature <= COLD_THRESHOLD_C {
            Self::Cold
        } else if apparent_temperature >= HEAT_THRESHOLD_C {
            Self::Heat
        } else {
            Self::Clear
        }
    }

    /// Stable identifier used in asset paths and the scene table
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Storm => "storm",
            Self::Rain => "rain",
            Self::Wind => "wind",
            Self::Cold => "cold",
            Self::Heat => "heat",
            Self::Clear => "clear",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Storm => "Stormy",
            Self::Rain => "Rainy",
            Self::Wind => "Windy",
            Self::Cold => "Cold",
            Self::Heat => "Hot",
            Self::Clear => "Clear",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

//! Validated coordinate pair
//!
//! Coordinates enter the system from query parameters and config files,
//! so the constructor range-checks both axes. The named city constants
//! back the fallback chain when nothing usable was supplied.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejection for a coordinate pair outside the valid ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Range-check and wrap a coordinate pair
    ///
    /// # Errors
    ///
    /// Rejects latitudes outside [-90, 90] and longitudes outside
    /// [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        let latitude_in_range = (-90.0..=90.0).contains(&latitude);
        let longitude_in_range = (-180.0..=180.0).contains(&longitude);
        if latitude_in_range && longitude_in_range {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinates)
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Sydney, served when no location is configured or supplied
    #[must_use]
    pub const fn sydney() -> Self {
        Self {
            latitude: -33.8688,
            longitude: 151.2093,
        }
    }

    /// Melbourne
    #[must_use]
    pub const fn melbourne() -> Self {
        Self {
            latitude: -37.8136,
            longitude: 144.9631,
        }
    }

    /// Brisbane
    #[must_use]
    pub const fn brisbane() -> Self {
        Self {
            latitude: -27.4698,
            longitude: 153.0251,
        }
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

//! Nominatim reverse geocoding integration
//!
//! Turns a coordinate pair into a short human-readable place name using
//! the [Nominatim](https://nominatim.openstreetmap.org) API. Strictly a
//! nicety: callers treat every failure as "no place name".

mod client;

pub use client::{GeocodingError, NominatimClient, NominatimConfig};

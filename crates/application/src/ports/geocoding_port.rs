//! Reverse geocoding port
//!
//! Turns a coordinate pair into a human-readable place name. Strictly
//! best-effort: implementations swallow their own failures and return
//! `None`, because a snapshot without a place name is still a snapshot.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

/// Port for reverse geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReverseGeocodePort: Send + Sync {
    /// Free-text place name for a location, e.g. "Newtown, New South Wales"
    async fn place_name(&self, location: &GeoLocation) -> Option<String>;
}

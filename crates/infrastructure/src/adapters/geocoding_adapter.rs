//! Reverse geocoding adapter
//!
//! Wraps the Nominatim client as a `ReverseGeocodePort`. Every failure
//! degrades to `None`: a snapshot without a place name is still a snapshot.

use application::ports::ReverseGeocodePort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_nominatim::NominatimClient;
use tracing::debug;

/// Adapter wrapping a Nominatim client as a `ReverseGeocodePort`
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimClient,
}

impl GeocodingAdapter {
    /// Create a new adapter around a Nominatim client
    #[must_use]
    pub const fn new(client: NominatimClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReverseGeocodePort for GeocodingAdapter {
    async fn place_name(&self, location: &GeoLocation) -> Option<String> {
        match self.client.reverse(location).await {
            Ok(place) => Some(place),
            Err(e) => {
                debug!(error = %e, "Reverse geocoding failed, omitting place name");
                None
            },
        }
    }
}

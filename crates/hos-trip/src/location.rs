//! Data returned by the geocoding and routing collaborators.

use serde::{Deserialize, Serialize};

use hos_core::GeoPoint;

/// A geocoded address: coordinates plus the provider's display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

impl Location {
    /// The bare coordinate pair, for attaching to duty events.
    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// One routed drive leg: distance, nominal duration, and path geometry.
///
/// `geometry` is carried opaquely (GeoJSON from the routing provider) for
/// map rendering; the engine only consumes distance and duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub geometry: serde_json::Value,
}

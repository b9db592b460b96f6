//! Collaborator interfaces: geocoding and routing.
//!
//! Both services are out-of-scope black boxes, specified only at their
//! interface.  Production implementations wrap HTTP providers (Nominatim,
//! OSRM); tests plug in fixtures.  Implementations must be `Send + Sync`
//! so an outer service layer can share them across request handlers.

use crate::{Location, RouteLeg, TripResult};

/// Resolves a free-text address to coordinates and a display name.
///
/// Fails with [`TripError::AddressNotFound`][crate::TripError] when the
/// provider returns no match, or [`TripError::Geocode`][crate::TripError]
/// when the provider itself errors.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &str) -> TripResult<Location>;
}

/// Resolves two coordinate pairs to a drivable route.
///
/// Returns distance in miles, nominal duration in hours, and opaque path
/// geometry for map rendering.
pub trait RouteSource: Send + Sync {
    fn route(&self, from: &Location, to: &Location) -> TripResult<RouteLeg>;
}

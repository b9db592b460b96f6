use hos_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripError {
    #[error("missing required field: {0}")]
    EmptyAddress(&'static str),

    #[error("current_cycle_used must be between 0 and {limit} (got {got})")]
    CycleOutOfRange { got: f64, limit: f64 },

    /// The geocoder resolved nothing for this address — user-facing.
    #[error("address not found: {0}")]
    AddressNotFound(String),

    /// The geocoding collaborator itself failed (network, quota, …).
    #[error("geocoding service failed: {0}")]
    Geocode(String),

    /// The routing collaborator failed or found no drivable route.
    #[error("routing service failed: {0}")]
    Routing(String),

    #[error(transparent)]
    Simulation(#[from] SimError),
}

pub type TripResult<T> = Result<T, TripError>;

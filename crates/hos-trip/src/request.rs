//! The inbound trip request and its validation.

use serde::{Deserialize, Serialize};

use hos_core::HosLimits;

use crate::{TripError, TripResult};

/// What the caller supplies: three free-text addresses and the cycle hours
/// already used.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already consumed against the 70-hour/8-day cycle.
    #[serde(default)]
    pub current_cycle_used: f64,
}

impl TripRequest {
    /// Field presence and range checks.  Runs before any collaborator call.
    pub fn validate(&self, limits: &HosLimits) -> TripResult<()> {
        if self.current_location.trim().is_empty() {
            return Err(TripError::EmptyAddress("current_location"));
        }
        if self.pickup_location.trim().is_empty() {
            return Err(TripError::EmptyAddress("pickup_location"));
        }
        if self.dropoff_location.trim().is_empty() {
            return Err(TripError::EmptyAddress("dropoff_location"));
        }
        if !self.current_cycle_used.is_finite()
            || self.current_cycle_used < 0.0
            || self.current_cycle_used > limits.cycle_limit_hours
        {
            return Err(TripError::CycleOutOfRange {
                got: self.current_cycle_used,
                limit: limits.cycle_limit_hours,
            });
        }
        Ok(())
    }
}

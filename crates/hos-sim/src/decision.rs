//! The rule decision function.
//!
//! One evaluation per simulation step, returning a tagged outcome instead of
//! scattering threshold checks through the drive loop.  Rest takes
//! precedence over break: a driver at both limits rests, and the rest also
//! clears the break counter.

use hos_core::HosLimits;

use crate::HosState;

/// What the rules demand before any further driving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleOutcome {
    /// A 10-hour rest is due (driving cap, window, or cycle exhausted).
    NeedsRest,
    /// A 30-minute break is due (8 cumulative driving hours since the last).
    NeedsBreak,
    /// Driving may continue for at most this many hours.
    CanDrive(f64),
}

/// Evaluate the FMCSA rules against the current counters.
pub fn evaluate(state: &HosState, limits: &HosLimits) -> RuleOutcome {
    if state.rest_due(limits) {
        RuleOutcome::NeedsRest
    } else if state.driving_since_break >= limits.break_after_driving_hours {
        RuleOutcome::NeedsBreak
    } else {
        RuleOutcome::CanDrive(state.available_driving_hours(limits))
    }
}

//! `hos-sim` — the Hours-of-Service simulation engine.
//!
//! # Two-phase step loop
//!
//! ```text
//! for each leg (pickup leg, dropoff leg):
//!   while miles remain:
//!     ① Evaluate — rule decision over the current counters:
//!                    NeedsRest     → 10 h rest; window counters reset
//!                    NeedsBreak    → 0.5 h break; break counter reset
//!                    CanDrive(h)   → proceed to ②
//!     ② Drive     — chunk = min(available, hours-to-finish, hours-to-fuel),
//!                    floored at the anti-stall minimum; emit Driving event;
//!                    emit Fuel event when 1000 mi accumulate
//!   then the leg's on-duty stop (rest first if it would overflow the window)
//! ```
//!
//! The engine owns a [`HosState`] (clock + counters) and a growing event
//! log; both are discarded after [`HosSimulator::run`] returns.  Rule
//! evaluation is a pure function in [`decision`], so each rule is unit
//! testable in isolation.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_core::{GeoPoint, HosLimits, shift_start};
//! use hos_sim::{HosSimulator, TripLegs};
//!
//! let mut sim = HosSimulator::new(HosLimits::default(), start, 0.0);
//! sim.run(&trip)?;
//! let events = sim.into_events();
//! ```

pub mod decision;
pub mod engine;
pub mod error;
pub mod report;
pub mod state;

#[cfg(test)]
mod tests;

pub use decision::{evaluate, RuleOutcome};
pub use engine::{simulate, HosSimulator, TripLegs};
pub use error::{SimError, SimResult};
pub use report::TripTotals;
pub use state::HosState;

//! `hos-core` — foundational types for the `hos_trip` planner.
//!
//! This crate is a dependency of every other `hos-*` crate.  It intentionally
//! has no `hos-*` dependencies and minimal external ones (only `chrono`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`duty`]   | `DutyKind`, `DutyStatus`, `DutyEvent`                   |
//! | [`geo`]    | `GeoPoint`                                              |
//! | [`limits`] | `HosLimits` — the FMCSA rule constants                  |
//! | [`time`]   | shift start, hour-of-day, float-hours ↔ `Duration`      |
//!
//! Failure modes live with the crates that can fail: `hos-sim` and
//! `hos-trip` carry their own `thiserror` enums, and the types here are
//! plain data with no fallible operations.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  Required by `hos-trip`. |

pub mod duty;
pub mod geo;
pub mod limits;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use duty::{DutyEvent, DutyKind, DutyStatus};
pub use geo::GeoPoint;
pub use limits::HosLimits;
pub use time::{hour_of_day, hours_to_duration, shift_start};

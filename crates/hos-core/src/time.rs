//! Wall-clock helpers for the simulated duty timeline.
//!
//! # Design
//!
//! The engine advances a `chrono::NaiveDateTime` — local wall time with no
//! timezone, which is how paper and electronic duty logs are kept (the log
//! grid is a plain 24-hour day in the driver's local time).  Durations stay
//! as float hours throughout the simulation; they are converted to `Duration`
//! only when the clock actually moves, and rounding to display precision
//! happens only at the log-compilation boundary.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Seconds-per-hour as f64, used by every float-hours conversion.
const SECS_PER_HOUR: f64 = 3_600.0;

/// The moment the simulated driver starts the shift: 08:00 on the day after
/// `now`.  Models "driver begins the next morning" regardless of when the
/// plan is requested.
pub fn shift_start(now: NaiveDateTime) -> NaiveDateTime {
    let tomorrow = now.date() + Duration::days(1);
    tomorrow.and_time(NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"))
}

/// Convert float hours to a `chrono::Duration` with nanosecond resolution.
///
/// Nanosecond granularity keeps sub-second drive chunks (the 0.001 h
/// anti-stall floor is 3.6 s) exact enough that re-deriving hours from the
/// resulting interval round-trips within f64 noise.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::nanoseconds((hours * SECS_PER_HOUR * 1e9).round() as i64)
}

/// Hour-of-day as a 0.0–24.0 fraction (e.g. 13:30 → 13.5).
///
/// Never returns 24.0 — midnight is 0.0.  The day-splitting logic in
/// `hos-log` applies the end-of-day 24.0 convention itself.
pub fn hour_of_day(dt: NaiveDateTime) -> f64 {
    let t = dt.time();
    t.num_seconds_from_midnight() as f64 / SECS_PER_HOUR
        + t.nanosecond() as f64 / (SECS_PER_HOUR * 1e9)
}

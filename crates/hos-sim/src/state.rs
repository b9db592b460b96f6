//! Mutable clock-and-counters state for one simulation run.
//!
//! # Counter model
//!
//! | Counter               | Grows on                    | Reset by          |
//! |-----------------------|-----------------------------|-------------------|
//! | `cycle_used`          | driving, on-duty, fuel,     | never             |
//! |                       | break (policy flag)         |                   |
//! | `driving_in_window`   | driving                     | 10 h rest         |
//! | `on_duty_in_window`   | driving, on-duty, fuel      | 10 h rest         |
//! | `driving_since_break` | driving                     | break or rest     |
//! | `miles_since_fuel`    | driving distance            | fuel stop         |
//!
//! `cycle_used` is seeded from caller input and only ever grows: the 8-day
//! rolling window is managed by the caller, not recomputed here.  A rest
//! therefore reopens the 14-hour window but never restores cycle hours.

use chrono::NaiveDateTime;

use hos_core::{hours_to_duration, DutyKind, HosLimits};

/// Clock and rule counters, owned by the engine for exactly one trip.
#[derive(Clone, Debug)]
pub struct HosState {
    /// Current simulated wall-clock time.
    pub clock: NaiveDateTime,
    /// Hours consumed against the 70-hour/8-day cycle.
    pub cycle_used: f64,
    /// Driving hours since the current 14-hour window opened.
    pub driving_in_window: f64,
    /// On-duty (incl. driving) hours since the window opened.
    pub on_duty_in_window: f64,
    /// Driving hours since the last 30-minute break (or window open).
    pub driving_since_break: f64,
    /// Miles driven since the last fuel stop.
    pub miles_since_fuel: f64,
    /// When the current 14-hour window opened.
    pub window_start: NaiveDateTime,
}

impl HosState {
    /// Fresh state at `start` with `initial_cycle_used` hours already burned.
    ///
    /// The caller (request layer) is responsible for clamping
    /// `initial_cycle_used` to `[0, cycle_limit_hours]`.
    pub fn new(start: NaiveDateTime, initial_cycle_used: f64) -> Self {
        Self {
            clock: start,
            cycle_used: initial_cycle_used,
            driving_in_window: 0.0,
            on_duty_in_window: 0.0,
            driving_since_break: 0.0,
            miles_since_fuel: 0.0,
            window_start: start,
        }
    }

    /// Hours since the current window opened.
    pub fn window_elapsed_hours(&self) -> f64 {
        (self.clock - self.window_start).num_nanoseconds().unwrap_or(i64::MAX) as f64 / 3.6e12
    }

    /// Remaining cycle hours, clamped at zero.
    #[inline]
    pub fn cycle_remaining(&self, limits: &HosLimits) -> f64 {
        (limits.cycle_limit_hours - self.cycle_used).max(0.0)
    }

    /// `true` when a 10-hour rest is due: the driving cap, the window, or
    /// the cycle is exhausted.
    pub fn rest_due(&self, limits: &HosLimits) -> bool {
        self.driving_in_window >= limits.max_driving_hours
            || self.window_elapsed_hours() >= limits.max_window_hours
            || self.cycle_used >= limits.cycle_limit_hours
    }

    /// Driving hours available right now: the minimum of the remaining
    /// window, the remaining 11-hour driving allowance, the hours left
    /// before a break is forced, and the remaining cycle hours.
    pub fn available_driving_hours(&self, limits: &HosLimits) -> f64 {
        let remaining_window = (limits.max_window_hours - self.window_elapsed_hours()).max(0.0);
        let remaining_driving = (limits.max_driving_hours - self.driving_in_window).max(0.0);
        let remaining_break =
            (limits.break_after_driving_hours - self.driving_since_break).max(0.0);
        let remaining_cycle = self.cycle_remaining(limits);

        remaining_window
            .min(remaining_driving)
            .min(remaining_break)
            .min(remaining_cycle)
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Advance the clock and counters for one appended event.
    ///
    /// `miles` is nonzero only for driving.  Rest events advance the clock
    /// but consume no counters; the window reset is a separate, explicit
    /// step ([`HosState::reopen_window`]) so the two halves are testable
    /// independently.
    pub fn apply(&mut self, kind: DutyKind, duration_hours: f64, miles: f64, limits: &HosLimits) {
        self.clock += hours_to_duration(duration_hours);

        match kind {
            DutyKind::Driving => {
                self.cycle_used += duration_hours;
                self.driving_in_window += duration_hours;
                self.driving_since_break += duration_hours;
                self.on_duty_in_window += duration_hours;
                self.miles_since_fuel += miles;
            }
            DutyKind::OnDuty | DutyKind::Fuel => {
                self.cycle_used += duration_hours;
                self.on_duty_in_window += duration_hours;
            }
            DutyKind::Break => {
                // Policy flag, see HosLimits: FMCSA classifies the break as
                // off-duty, but the validated behaviour counts it.
                if limits.break_counts_toward_cycle {
                    self.cycle_used += duration_hours;
                }
                self.driving_since_break = 0.0;
            }
            DutyKind::Rest => {}
        }
    }

    /// Close out a rest: zero the window counters and reopen the 14-hour
    /// window at the current clock.  `cycle_used` is deliberately untouched.
    pub fn reopen_window(&mut self) {
        self.driving_in_window = 0.0;
        self.driving_since_break = 0.0;
        self.on_duty_in_window = 0.0;
        self.window_start = self.clock;
    }
}

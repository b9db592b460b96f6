//! Derived aggregates over a finished event list.
//!
//! Plain reductions, not a separate engine component: the trip-plan layer
//! attaches these next to the events and daily logs.  Full float precision
//! is kept here; display rounding belongs to the caller.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use hos_core::{DutyEvent, DutyKind};

/// Totals reduced from one simulated timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripTotals {
    /// Sum of Driving event durations.
    pub driving_hours: f64,
    /// Sum of Rest and Break durations.
    pub rest_hours: f64,
    /// Distinct calendar dates touched by any event's start or end.
    pub days: usize,
}

impl TripTotals {
    /// Reduce the event list.
    pub fn from_events(events: &[DutyEvent]) -> Self {
        let mut driving_hours = 0.0;
        let mut rest_hours = 0.0;
        let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();

        for e in events {
            match e.kind {
                DutyKind::Driving => driving_hours += e.duration_hours,
                DutyKind::Rest | DutyKind::Break => rest_hours += e.duration_hours,
                _ => {}
            }
            dates.insert(e.start.date());
            dates.insert(e.end.date());
        }

        Self {
            driving_hours,
            rest_hours,
            days: dates.len(),
        }
    }
}

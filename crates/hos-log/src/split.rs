//! Interval splitting: one duty event → per-calendar-day fragments.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use hos_core::{hour_of_day, DutyEvent, DutyStatus};

/// One event's share of a single calendar day.
///
/// `start_hour`/`end_hour` are hour-of-day fractions in `[0.0, 24.0]`;
/// a fragment that runs to midnight closes at exactly `24.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct DayFragment {
    pub date: NaiveDate,
    pub start_hour: f64,
    pub end_hour: f64,
    pub status: DutyStatus,
    pub label: String,
}

/// Split `event` at every midnight boundary it crosses.
///
/// An event ending exactly at midnight closes its last fragment at hour
/// 24.0 instead of opening a zero-length fragment on the next day.
///
/// # Panics
///
/// Panics if a fragment would come out with `end_hour <= start_hour` —
/// a malformed split is a compiler defect, not recoverable data.
pub fn split_event(event: &DutyEvent) -> Vec<DayFragment> {
    let mut fragments = Vec::new();
    let mut current = event.start;

    while current < event.end {
        let next_midnight = midnight_after(current);
        let fragment_end = event.end.min(next_midnight);

        let start_hour = hour_of_day(current);
        // End-of-day convention: a fragment reaching midnight reads 24.0.
        let end_hour = if fragment_end == next_midnight && fragment_end.date() != current.date() {
            24.0
        } else {
            hour_of_day(fragment_end)
        };

        assert!(
            end_hour > start_hour,
            "malformed day split: {} .. {} on {}",
            start_hour,
            end_hour,
            current.date()
        );

        fragments.push(DayFragment {
            date: current.date(),
            start_hour,
            end_hour,
            status: event.status(),
            label: event.label.clone(),
        });

        current = fragment_end;
    }

    fragments
}

/// First midnight strictly after `t`.
fn midnight_after(t: NaiveDateTime) -> NaiveDateTime {
    (t.date() + Duration::days(1)).and_hms_opt(0, 0, 0).expect("midnight is a valid time")
}

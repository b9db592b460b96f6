//! Grid assembly: fragments → gapless per-day logs with duty totals.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use hos_core::{DutyEvent, DutyStatus};

use crate::split::{split_event, DayFragment};

/// Label used on filler segments for time not covered by any event.
const OFF_DUTY_LABEL: &str = "Off Duty";

// ── LogSegment ────────────────────────────────────────────────────────────────

/// One horizontal run on the 24-hour ELD grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogSegment {
    pub start_hour: f64,
    pub end_hour: f64,
    pub status: DutyStatus,
    pub label: String,
}

// ── DutyTotals ────────────────────────────────────────────────────────────────

/// Hours per duty status for one date, rounded to 2 decimals.
///
/// The four fields sum to 24.00 (within rounding) for every compiled date.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyTotals {
    pub off_duty: f64,
    pub sleeper: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl DutyTotals {
    fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.off_duty += hours,
            DutyStatus::Sleeper => self.sleeper += hours,
            DutyStatus::Driving => self.driving += hours,
            DutyStatus::OnDuty => self.on_duty += hours,
        }
    }

    /// Display rounding happens here and nowhere earlier: full float
    /// precision is carried through splitting and accumulation.
    fn rounded(self) -> Self {
        Self {
            off_duty: round2(self.off_duty),
            sleeper: round2(self.sleeper),
            driving: round2(self.driving),
            on_duty: round2(self.on_duty),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ── DailyLog ──────────────────────────────────────────────────────────────────

/// One calendar day of the compiled log: a contiguous, gapless segment list
/// covering `[0.0, 24.0]` plus per-status totals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyLog {
    pub date: NaiveDate,
    pub segments: Vec<LogSegment>,
    pub totals: DutyTotals,
}

// ── Compiler ──────────────────────────────────────────────────────────────────

/// Compile an event timeline into one [`DailyLog`] per calendar date.
///
/// Pure function of `events`: dates come out ascending, every day is
/// gap-filled with OFF-duty segments, and totals sum to 24.00 per date.
pub fn compile(events: &[DutyEvent]) -> Vec<DailyLog> {
    // BTreeMap keeps dates ascending for free.
    let mut by_date: BTreeMap<NaiveDate, Vec<DayFragment>> = BTreeMap::new();
    for event in events {
        for fragment in split_event(event) {
            by_date.entry(fragment.date).or_default().push(fragment);
        }
    }

    by_date
        .into_iter()
        .map(|(date, mut fragments)| {
            fragments.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));
            fill_day(date, fragments)
        })
        .collect()
}

/// Walk one day's sorted fragments, filling every uncovered interval with
/// an OFF-duty segment and accumulating totals.
fn fill_day(date: NaiveDate, fragments: Vec<DayFragment>) -> DailyLog {
    let mut segments = Vec::with_capacity(fragments.len() * 2);
    let mut totals = DutyTotals::default();
    let mut cursor = 0.0;

    for fragment in fragments {
        if fragment.start_hour > cursor {
            push_filler(&mut segments, &mut totals, cursor, fragment.start_hour);
        }

        totals.add(fragment.status, fragment.end_hour - fragment.start_hour);
        cursor = fragment.end_hour;
        segments.push(LogSegment {
            start_hour: fragment.start_hour,
            end_hour: fragment.end_hour,
            status: fragment.status,
            label: fragment.label,
        });
    }

    if cursor < 24.0 {
        push_filler(&mut segments, &mut totals, cursor, 24.0);
    }

    DailyLog {
        date,
        segments,
        totals: totals.rounded(),
    }
}

fn push_filler(segments: &mut Vec<LogSegment>, totals: &mut DutyTotals, from: f64, to: f64) {
    totals.add(DutyStatus::OffDuty, to - from);
    segments.push(LogSegment {
        start_hour: from,
        end_hour: to,
        status: DutyStatus::OffDuty,
        label: OFF_DUTY_LABEL.to_string(),
    });
}

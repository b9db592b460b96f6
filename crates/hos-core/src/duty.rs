//! The duty event model: what the engine emits and the log compiler consumes.
//!
//! # Invariants
//!
//! An emitted event list is strictly time-ordered and contiguous: each
//! event's `start` equals the previous event's `end`, and the first event
//! starts at the simulation's initial clock value.  Events are immutable
//! once appended — the compiler reads them, never mutates them.

use chrono::NaiveDateTime;

use crate::GeoPoint;

// ── DutyKind ──────────────────────────────────────────────────────────────────

/// What the driver is doing during one event.
///
/// Pickup and dropoff are `OnDuty` events distinguished only by their label
/// and attached coordinates — the rule logic treats all on-duty time alike.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DutyKind {
    Driving,
    OnDuty,
    Break,
    Rest,
    Fuel,
}

impl DutyKind {
    /// Map to the four-line ELD grid status.
    ///
    /// Fuel stops are on-duty time; the 30-minute break is off-duty; the
    /// 10-hour rest is logged as sleeper-berth.
    pub fn status(self) -> DutyStatus {
        match self {
            DutyKind::Driving => DutyStatus::Driving,
            DutyKind::OnDuty | DutyKind::Fuel => DutyStatus::OnDuty,
            DutyKind::Break => DutyStatus::OffDuty,
            DutyKind::Rest => DutyStatus::Sleeper,
        }
    }
}

impl std::fmt::Display for DutyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DutyKind::Driving => "driving",
            DutyKind::OnDuty => "on_duty",
            DutyKind::Break => "break",
            DutyKind::Rest => "rest",
            DutyKind::Fuel => "fuel",
        };
        f.write_str(s)
    }
}

// ── DutyStatus ────────────────────────────────────────────────────────────────

/// One of the four duty-status lines on an ELD log grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DutyStatus {
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Driving,
    #[cfg_attr(feature = "serde", serde(rename = "ON"))]
    OnDuty,
    #[cfg_attr(feature = "serde", serde(rename = "OFF"))]
    OffDuty,
    #[cfg_attr(feature = "serde", serde(rename = "SB"))]
    Sleeper,
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DutyStatus::Driving => "D",
            DutyStatus::OnDuty => "ON",
            DutyStatus::OffDuty => "OFF",
            DutyStatus::Sleeper => "SB",
        };
        f.write_str(s)
    }
}

// ── DutyEvent ─────────────────────────────────────────────────────────────────

/// One entry in the simulated duty timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyEvent {
    pub kind: DutyKind,

    /// Wall-clock start.  Equals the previous event's `end`.
    pub start: NaiveDateTime,

    /// Wall-clock end (`start` + duration).
    pub end: NaiveDateTime,

    /// Duration in float hours.  Derived from `end - start` at construction;
    /// kept explicit so consumers never re-derive it.
    pub duration_hours: f64,

    /// Human-readable description ("Driving to Pickup", "30-min break", …).
    /// Display only — never consulted by rule logic.
    pub label: String,

    /// Distance covered.  Nonzero only for `Driving` events.
    pub miles: f64,

    /// Stop coordinates.  Present only on the pickup/dropoff `OnDuty` events.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub coord: Option<GeoPoint>,
}

impl DutyEvent {
    /// Build an event starting at `start` and lasting `duration_hours`.
    pub fn new(
        kind: DutyKind,
        start: NaiveDateTime,
        duration_hours: f64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end: start + crate::time::hours_to_duration(duration_hours),
            duration_hours,
            label: label.into(),
            miles: 0.0,
            coord: None,
        }
    }

    /// Attach driven distance (Driving events only).
    pub fn with_miles(mut self, miles: f64) -> Self {
        self.miles = miles;
        self
    }

    /// Attach stop coordinates (pickup/dropoff events only).
    pub fn with_coord(mut self, coord: GeoPoint) -> Self {
        self.coord = Some(coord);
        self
    }

    /// The grid status this event maps to.
    #[inline]
    pub fn status(&self) -> DutyStatus {
        self.kind.status()
    }
}

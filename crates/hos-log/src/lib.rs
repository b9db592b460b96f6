//! `hos-log` — compiles a duty event timeline into per-day ELD log grids.
//!
//! # Pipeline
//!
//! ```text
//! events ── split ──► (date, start_hour, end_hour, status) fragments
//!        ── group ──► fragments per calendar date, sorted by start hour
//!        ── fill  ──► OFF-duty fillers for every uncovered interval
//!        ── total ──► per-status hours, rounded to 2 decimals, Σ = 24.00
//! ```
//!
//! Splitting and gap filling are separate steps ([`split`] and [`grid`]) so
//! each is independently testable.  The compiler is a pure function of the
//! event list: no engine state is referenced, and compiling the same list
//! twice yields identical output.
//!
//! There is no error type here: the only failure mode is a malformed day
//! split (a fragment ending at or before its start), which is a compiler
//! defect and panics rather than propagating.

pub mod grid;
pub mod split;


pub use grid::{compile, DailyLog, DutyTotals, LogSegment};
pub use split::{split_event, DayFragment};

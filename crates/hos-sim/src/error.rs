use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The 70-hour cycle is exhausted and a rest cannot restore it (rests
    /// never return cycle hours).  Reachable for valid input — a caller
    /// supplying `initial_cycle_used` near 70 with a long remaining leg —
    /// so it is surfaced as an explicit error rather than looped on.
    #[error(
        "70-hour cycle exhausted with {miles_remaining:.1} mi left to drive \
         (cycle used: {cycle_used:.1} h)"
    )]
    CycleExhausted {
        cycle_used: f64,
        miles_remaining: f64,
    },

    /// No driving hours available even after a forced rest, with cycle
    /// hours remaining.  Signals a counter-reset defect — never reachable
    /// when `reopen_window` runs after every rest.
    #[error(
        "no driving hours available after forced rest \
         (window elapsed: {window_elapsed:.3} h, driving in window: {driving_in_window:.3} h)"
    )]
    Stall {
        window_elapsed: f64,
        driving_in_window: f64,
    },

    /// The minimum-progress floor fired repeatedly on one leg.  The floor
    /// exists only to absorb floating-point edge cases; repeated hits mean
    /// the chunking arithmetic is not converging.
    #[error("minimum-progress floor fired {hits} times on '{leg}'; chunking does not converge")]
    NoProgress { leg: String, hits: u32 },
}

pub type SimResult<T> = Result<T, SimError>;

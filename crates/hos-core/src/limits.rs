//! FMCSA Hours-of-Service rule constants.
//!
//! All limits live on one struct rather than as free constants so that the
//! engine and its tests can be parameterised (shorter windows make scenario
//! tests cheap to construct) and so the one genuinely debatable policy —
//! whether the 30-minute break consumes cycle time — is an explicit flag
//! instead of a buried branch.

/// The rule set the simulation engine enforces.
///
/// `HosLimits::default()` is the property-carrying interstate rule set:
/// 11-hour driving cap, 14-hour duty window, 10-hour rest, 30-minute break
/// after 8 cumulative driving hours, 70-hour/8-day cycle.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HosLimits {
    /// Maximum driving hours within one duty window (11 h).
    pub max_driving_hours: f64,
    /// Maximum length of the duty window itself (14 h).
    pub max_window_hours: f64,
    /// Mandatory off-duty rest that closes a window (10 h).
    pub rest_hours: f64,
    /// Cumulative driving after which a break is forced (8 h).
    pub break_after_driving_hours: f64,
    /// Length of the forced break (0.5 h).
    pub break_duration_hours: f64,
    /// Rolling 70-hour/8-day on-duty cycle limit.
    pub cycle_limit_hours: f64,
    /// Distance between fuel stops (1000 mi).
    pub fuel_interval_miles: f64,
    /// Length of a fuel stop (0.5 h, on-duty).
    pub fuel_stop_hours: f64,
    /// On-duty time at the pickup stop (1 h).
    pub pickup_hours: f64,
    /// On-duty time at the dropoff stop (1 h).
    pub dropoff_hours: f64,
    /// Hard cap on effective driving speed (65 mph).
    pub speed_cap_mph: f64,
    /// Assumed speed when a leg's nominal duration is zero or missing.
    pub fallback_speed_mph: f64,
    /// Numerical floor on one driving chunk.  Pure anti-stall safeguard
    /// against floating-point edge cases — not a regulation.
    pub min_drive_chunk_hours: f64,
    /// Whether the 30-minute break consumes cycle hours.
    ///
    /// FMCSA classifies the break as off-duty, which argues for `false`;
    /// the behaviour this engine was validated against counts it.  Kept as
    /// a flag so conformance can be toggled without code changes.
    pub break_counts_toward_cycle: bool,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_hours:         11.0,
            max_window_hours:          14.0,
            rest_hours:                10.0,
            break_after_driving_hours: 8.0,
            break_duration_hours:      0.5,
            cycle_limit_hours:         70.0,
            fuel_interval_miles:       1000.0,
            fuel_stop_hours:           0.5,
            pickup_hours:              1.0,
            dropoff_hours:             1.0,
            speed_cap_mph:             65.0,
            fallback_speed_mph:        60.0,
            min_drive_chunk_hours:     0.001,
            break_counts_toward_cycle: true,
        }
    }
}

impl HosLimits {
    /// Effective speed for a leg: distance over nominal duration, capped at
    /// `speed_cap_mph`.  Zero or negative durations fall back to
    /// `fallback_speed_mph`.
    pub fn effective_speed(&self, leg_miles: f64, leg_hours: f64) -> f64 {
        let nominal = if leg_hours > 0.0 {
            leg_miles / leg_hours
        } else {
            self.fallback_speed_mph
        };
        nominal.min(self.speed_cap_mph)
    }
}

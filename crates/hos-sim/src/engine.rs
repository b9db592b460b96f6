//! The `HosSimulator` and its chunked drive loop.

use chrono::NaiveDateTime;

use hos_core::{DutyEvent, DutyKind, GeoPoint, HosLimits};

use crate::{evaluate, HosState, RuleOutcome, SimError, SimResult};

/// How many times the anti-stall floor may fire on one leg before the
/// engine gives up.  An ordinary leg never needs it at all.
const MAX_FLOOR_HITS: u32 = 8;

// ── TripLegs ──────────────────────────────────────────────────────────────────

/// Engine input: two routed drive legs plus the stop coordinates.
///
/// Distances and nominal durations come from the routing collaborator;
/// coordinates pass through unmodified onto the pickup/dropoff events.
#[derive(Clone, Debug)]
pub struct TripLegs {
    /// Current position → pickup.
    pub leg1_miles: f64,
    pub leg1_hours: f64,
    /// Pickup → dropoff.
    pub leg2_miles: f64,
    pub leg2_hours: f64,
    pub pickup: GeoPoint,
    pub dropoff: GeoPoint,
}

impl TripLegs {
    /// Total routed distance over both legs.
    #[inline]
    pub fn total_miles(&self) -> f64 {
        self.leg1_miles + self.leg2_miles
    }
}

// ── HosSimulator ──────────────────────────────────────────────────────────────

/// The simulation engine: one instance per trip, discarded after the run.
///
/// Owns the [`HosState`] (clock + counters) and the growing event log.
/// [`HosSimulator::run`] executes the full schedule — leg 1, pickup stop,
/// leg 2, dropoff stop — and leaves the ordered event list in
/// [`HosSimulator::events`].
pub struct HosSimulator {
    pub limits: HosLimits,
    pub state: HosState,
    events: Vec<DutyEvent>,
}

impl HosSimulator {
    /// Engine starting at `start` with `initial_cycle_used` hours already
    /// burned against the cycle.
    pub fn new(limits: HosLimits, start: NaiveDateTime, initial_cycle_used: f64) -> Self {
        Self {
            limits,
            state: HosState::new(start, initial_cycle_used),
            events: Vec::new(),
        }
    }

    /// Run the full schedule: drive leg 1 → pickup → drive leg 2 → dropoff.
    pub fn run(&mut self, trip: &TripLegs) -> SimResult<()> {
        self.drive_leg(trip.leg1_miles, trip.leg1_hours, "Driving to Pickup")?;
        self.on_duty_stop(self.limits.pickup_hours, "Pickup", trip.pickup);
        self.drive_leg(trip.leg2_miles, trip.leg2_hours, "Driving to Dropoff")?;
        self.on_duty_stop(self.limits.dropoff_hours, "Dropoff", trip.dropoff);
        Ok(())
    }

    /// Read-only view of the events emitted so far.  Valid after a failed
    /// run too — `CycleExhausted` leaves the partial timeline in place.
    pub fn events(&self) -> &[DutyEvent] {
        &self.events
    }

    /// Consume the engine and take the event list.
    pub fn into_events(self) -> Vec<DutyEvent> {
        self.events
    }

    // ── Drive loop ────────────────────────────────────────────────────────

    /// Drive one routed leg, chunk by chunk, inserting rests, breaks, and
    /// fuel stops as the rules demand.
    fn drive_leg(&mut self, miles: f64, nominal_hours: f64, label: &str) -> SimResult<()> {
        let speed = self.limits.effective_speed(miles, nominal_hours);
        let mut miles_remaining = miles;
        let mut floor_hits = 0u32;

        while miles_remaining > 0.0 {
            let available = match evaluate(&self.state, &self.limits) {
                RuleOutcome::NeedsRest => {
                    self.take_rest();
                    // A rest reopens the window but never restores cycle
                    // hours; if the cycle triggered it, no amount of rest
                    // will let the leg finish.
                    if self.state.cycle_remaining(&self.limits) <= 0.0 {
                        return Err(SimError::CycleExhausted {
                            cycle_used: self.state.cycle_used,
                            miles_remaining,
                        });
                    }
                    continue;
                }
                RuleOutcome::NeedsBreak => {
                    self.take_break();
                    continue;
                }
                RuleOutcome::CanDrive(hours) => hours,
            };

            // Unreachable when the rest/break arms above ran: every
            // remainder is strictly positive once neither is due.  Kept as
            // a loud guard against future counter-reset defects.
            let available = if available > 0.0 {
                available
            } else {
                self.take_rest();
                if self.state.cycle_remaining(&self.limits) <= 0.0 {
                    return Err(SimError::CycleExhausted {
                        cycle_used: self.state.cycle_used,
                        miles_remaining,
                    });
                }
                let retry = self.state.available_driving_hours(&self.limits);
                if retry <= 0.0 {
                    return Err(SimError::Stall {
                        window_elapsed: self.state.window_elapsed_hours(),
                        driving_in_window: self.state.driving_in_window,
                    });
                }
                retry
            };

            // Chunk: bounded by the rules, the leg itself, and the next
            // fuel threshold.
            let hours_to_finish = miles_remaining / speed;
            let miles_to_fuel =
                (self.limits.fuel_interval_miles - self.state.miles_since_fuel).max(0.0);
            let hours_to_fuel = miles_to_fuel / speed;

            let mut chunk_hours = available.min(hours_to_finish).min(hours_to_fuel);

            // Anti-stall floor: numerical-progress safeguard only.
            if chunk_hours <= self.limits.min_drive_chunk_hours {
                chunk_hours = self.limits.min_drive_chunk_hours;
                floor_hits += 1;
                if floor_hits > MAX_FLOOR_HITS {
                    return Err(SimError::NoProgress {
                        leg: label.to_string(),
                        hits: floor_hits,
                    });
                }
            }

            let mut chunk_miles = chunk_hours * speed;
            if chunk_miles > miles_remaining {
                chunk_miles = miles_remaining;
                chunk_hours = chunk_miles / speed;
            }

            self.push(
                DutyEvent::new(DutyKind::Driving, self.state.clock, chunk_hours, label)
                    .with_miles(chunk_miles),
            );
            miles_remaining -= chunk_miles;

            if self.state.miles_since_fuel >= self.limits.fuel_interval_miles {
                self.take_fuel_stop();
            }
        }

        Ok(())
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// On-duty stop (pickup/dropoff).  If the stop would push the window
    /// past 14 hours, a rest comes first; the stop itself consumes on-duty
    /// and cycle hours but no driving counters.
    fn on_duty_stop(&mut self, hours: f64, label: &str, coord: GeoPoint) {
        if self.state.window_elapsed_hours() + hours > self.limits.max_window_hours {
            self.take_rest();
        }
        self.push(
            DutyEvent::new(DutyKind::OnDuty, self.state.clock, hours, label).with_coord(coord),
        );
    }

    /// 10-hour rest: closes the current window and reopens a fresh one.
    fn take_rest(&mut self) {
        let rest = DutyEvent::new(
            DutyKind::Rest,
            self.state.clock,
            self.limits.rest_hours,
            "Off-duty rest (10 hr)",
        );
        self.push(rest);
        self.state.reopen_window();
    }

    /// 30-minute break after 8 cumulative driving hours.
    fn take_break(&mut self) {
        let brk = DutyEvent::new(
            DutyKind::Break,
            self.state.clock,
            self.limits.break_duration_hours,
            "30-min break",
        );
        self.push(brk);
    }

    /// Fuel stop each 1000 miles; on-duty, resets the distance counter.
    fn take_fuel_stop(&mut self) {
        let fuel = DutyEvent::new(
            DutyKind::Fuel,
            self.state.clock,
            self.limits.fuel_stop_hours,
            "Fuel Stop",
        );
        self.push(fuel);
        self.state.miles_since_fuel = 0.0;
    }

    /// Append an event and advance clock + counters.  The single funnel
    /// keeps the timeline contiguous by construction.
    fn push(&mut self, event: DutyEvent) {
        debug_assert!(
            self.events
                .last()
                .is_none_or(|prev| prev.end == event.start),
            "event timeline must be contiguous"
        );
        self.state
            .apply(event.kind, event.duration_hours, event.miles, &self.limits);
        self.events.push(event);
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// One-shot simulation: build an engine, run the trip, return the events.
pub fn simulate(
    limits: HosLimits,
    start: NaiveDateTime,
    initial_cycle_used: f64,
    trip: &TripLegs,
) -> SimResult<Vec<DutyEvent>> {
    let mut sim = HosSimulator::new(limits, start, initial_cycle_used);
    sim.run(trip)?;
    Ok(sim.into_events())
}

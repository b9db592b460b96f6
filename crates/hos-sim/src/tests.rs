//! Unit tests for the simulation engine.

use chrono::{NaiveDate, NaiveDateTime};

use hos_core::{DutyKind, GeoPoint, HosLimits};

use crate::{evaluate, simulate, HosSimulator, HosState, RuleOutcome, SimError, TripLegs};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 4)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn pickup() -> GeoPoint {
    GeoPoint::new(41.8781, -87.6298) // Chicago
}

fn dropoff() -> GeoPoint {
    GeoPoint::new(39.7392, -104.9903) // Denver
}

/// Trip with one real leg (driven at 65 mph nominal) and a zero second leg.
fn single_leg(miles: f64) -> TripLegs {
    TripLegs {
        leg1_miles: miles,
        leg1_hours: miles / 65.0,
        leg2_miles: 0.0,
        leg2_hours: 0.0,
        pickup: pickup(),
        dropoff: dropoff(),
    }
}

fn count_kind(events: &[hos_core::DutyEvent], kind: DutyKind) -> usize {
    events.iter().filter(|e| e.kind == kind).count()
}

// ── Decision function ─────────────────────────────────────────────────────────

#[cfg(test)]
mod decision {
    use super::*;

    #[test]
    fn fresh_state_can_drive_eight_hours() {
        let limits = HosLimits::default();
        let state = HosState::new(start(), 0.0);
        // First binding constraint is the 8-hour break rule.
        assert_eq!(evaluate(&state, &limits), RuleOutcome::CanDrive(8.0));
    }

    #[test]
    fn rest_takes_precedence_over_break() {
        let limits = HosLimits::default();
        let mut state = HosState::new(start(), 0.0);
        state.driving_in_window = 11.0;
        state.driving_since_break = 8.0;
        assert_eq!(evaluate(&state, &limits), RuleOutcome::NeedsRest);
    }

    #[test]
    fn break_due_at_eight_hours() {
        let limits = HosLimits::default();
        let mut state = HosState::new(start(), 0.0);
        state.driving_since_break = 8.0;
        state.driving_in_window = 8.0;
        assert_eq!(evaluate(&state, &limits), RuleOutcome::NeedsBreak);
    }

    #[test]
    fn cycle_exhaustion_demands_rest() {
        let limits = HosLimits::default();
        let state = HosState::new(start(), 70.0);
        assert_eq!(evaluate(&state, &limits), RuleOutcome::NeedsRest);
    }

    #[test]
    fn cycle_is_the_binding_constraint_near_seventy() {
        let limits = HosLimits::default();
        let state = HosState::new(start(), 67.0);
        assert_eq!(evaluate(&state, &limits), RuleOutcome::CanDrive(3.0));
    }
}

// ── State transitions ─────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn driving_updates_all_counters() {
        let limits = HosLimits::default();
        let mut s = HosState::new(start(), 0.0);
        s.apply(DutyKind::Driving, 4.0, 260.0, &limits);
        assert_eq!(s.cycle_used, 4.0);
        assert_eq!(s.driving_in_window, 4.0);
        assert_eq!(s.driving_since_break, 4.0);
        assert_eq!(s.on_duty_in_window, 4.0);
        assert_eq!(s.miles_since_fuel, 260.0);
        assert!((s.window_elapsed_hours() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn on_duty_consumes_no_driving_counters() {
        let limits = HosLimits::default();
        let mut s = HosState::new(start(), 0.0);
        s.apply(DutyKind::OnDuty, 1.0, 0.0, &limits);
        assert_eq!(s.cycle_used, 1.0);
        assert_eq!(s.on_duty_in_window, 1.0);
        assert_eq!(s.driving_in_window, 0.0);
        assert_eq!(s.driving_since_break, 0.0);
    }

    #[test]
    fn break_resets_its_counter_and_obeys_the_policy_flag() {
        let mut counting = HosLimits::default();
        counting.break_counts_toward_cycle = true;
        let mut s = HosState::new(start(), 0.0);
        s.driving_since_break = 8.0;
        s.apply(DutyKind::Break, 0.5, 0.0, &counting);
        assert_eq!(s.driving_since_break, 0.0);
        assert_eq!(s.cycle_used, 0.5);

        let mut off_duty = HosLimits::default();
        off_duty.break_counts_toward_cycle = false;
        let mut s = HosState::new(start(), 0.0);
        s.driving_since_break = 8.0;
        s.apply(DutyKind::Break, 0.5, 0.0, &off_duty);
        assert_eq!(s.driving_since_break, 0.0);
        assert_eq!(s.cycle_used, 0.0);
    }

    #[test]
    fn rest_advances_clock_only() {
        let limits = HosLimits::default();
        let mut s = HosState::new(start(), 42.0);
        s.apply(DutyKind::Rest, 10.0, 0.0, &limits);
        assert_eq!(s.cycle_used, 42.0);
        // Window not reopened until reopen_window runs.
        assert!((s.window_elapsed_hours() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn reopen_window_preserves_cycle_and_fuel() {
        let limits = HosLimits::default();
        let mut s = HosState::new(start(), 0.0);
        s.apply(DutyKind::Driving, 11.0, 715.0, &limits);
        s.apply(DutyKind::Rest, 10.0, 0.0, &limits);
        s.reopen_window();
        assert_eq!(s.driving_in_window, 0.0);
        assert_eq!(s.driving_since_break, 0.0);
        assert_eq!(s.on_duty_in_window, 0.0);
        assert_eq!(s.window_elapsed_hours(), 0.0);
        // Deliberately untouched: cycle hours and distance since fuel.
        assert_eq!(s.cycle_used, 11.0);
        assert_eq!(s.miles_since_fuel, 715.0);
    }
}

// ── Full schedule scenarios ───────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn zero_mile_trip_emits_only_the_two_stops() {
        let trip = TripLegs {
            leg1_miles: 0.0,
            leg1_hours: 0.0,
            leg2_miles: 0.0,
            leg2_hours: 0.0,
            pickup: pickup(),
            dropoff: dropoff(),
        };
        let events = simulate(HosLimits::default(), start(), 0.0, &trip).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, DutyKind::OnDuty);
        assert_eq!(events[0].label, "Pickup");
        assert_eq!(events[0].duration_hours, 1.0);
        assert_eq!(events[0].coord, Some(pickup()));
        assert_eq!(events[1].label, "Dropoff");
        assert_eq!(events[1].coord, Some(dropoff()));
        assert_eq!(count_kind(&events, DutyKind::Driving), 0);
        assert_eq!(count_kind(&events, DutyKind::Rest), 0);
    }

    #[test]
    fn short_leg_is_one_uninterrupted_driving_event() {
        // 400 mi at 65 mph ≈ 6.15 h: under every limit.
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(400.0)).unwrap();

        assert_eq!(count_kind(&events, DutyKind::Driving), 1);
        assert_eq!(count_kind(&events, DutyKind::Break), 0);
        assert_eq!(count_kind(&events, DutyKind::Fuel), 0);
        assert_eq!(count_kind(&events, DutyKind::Rest), 0);

        let drive = events.iter().find(|e| e.kind == DutyKind::Driving).unwrap();
        assert!((drive.miles - 400.0).abs() < 1e-9);
        assert!((drive.duration_hours - 400.0 / 65.0).abs() < 1e-9);
    }

    #[test]
    fn long_leg_gets_a_mid_leg_rest_and_window_reset() {
        // 800 mi at 65 mph ≈ 12.3 driving hours: exceeds the 11-hour cap.
        let mut sim = HosSimulator::new(HosLimits::default(), start(), 0.0);
        sim.run(&single_leg(800.0)).unwrap();

        let events = sim.events();
        assert_eq!(count_kind(events, DutyKind::Rest), 1);
        assert_eq!(count_kind(events, DutyKind::Break), 1);

        // Post-rest window only holds the final 85-mile chunk.
        let after_rest_driving: f64 = events
            .iter()
            .skip_while(|e| e.kind != DutyKind::Rest)
            .filter(|e| e.kind == DutyKind::Driving)
            .map(|e| e.duration_hours)
            .sum();
        assert!((after_rest_driving - 85.0 / 65.0).abs() < 1e-9);
        assert!((sim.state.driving_in_window - 85.0 / 65.0).abs() < 1e-9);

        let total_miles: f64 = events.iter().map(|e| e.miles).sum();
        assert!((total_miles - 800.0).abs() < 1e-9);
    }

    #[test]
    fn fuel_fires_at_cumulative_mileage_across_a_rest() {
        // 1200 mi forces a rest at 715 mi (11 driving hours); the fuel stop
        // must still land at 1000 cumulative miles.
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(1200.0)).unwrap();

        assert_eq!(count_kind(&events, DutyKind::Fuel), 1);
        assert_eq!(count_kind(&events, DutyKind::Rest), 1);

        let miles_before_fuel: f64 = events
            .iter()
            .take_while(|e| e.kind != DutyKind::Fuel)
            .map(|e| e.miles)
            .sum();
        assert!(
            (miles_before_fuel - 1000.0).abs() < 1e-6,
            "fuel at {miles_before_fuel} mi"
        );

        // The rest interrupts the interval but does not reset it.
        let rest_idx = events.iter().position(|e| e.kind == DutyKind::Rest).unwrap();
        let fuel_idx = events.iter().position(|e| e.kind == DutyKind::Fuel).unwrap();
        assert!(rest_idx < fuel_idx);
    }

    #[test]
    fn exhausted_cycle_rests_once_then_errors() {
        // 65 cycle hours used; 400 mi needs ~6.15 driving hours.  The first
        // 5-hour chunk lands the cycle on 70; the forced rest cannot restore
        // it, so the engine stops with an explicit signal.
        let mut sim = HosSimulator::new(HosLimits::default(), start(), 65.0);
        let err = sim.run(&single_leg(400.0)).unwrap_err();

        match err {
            SimError::CycleExhausted {
                cycle_used,
                miles_remaining,
            } => {
                assert_eq!(cycle_used, 70.0);
                assert!((miles_remaining - 75.0).abs() < 1e-9);
            }
            other => panic!("expected CycleExhausted, got {other:?}"),
        }

        // The rest was emitted, and the rest did not return cycle hours.
        assert_eq!(sim.events().last().unwrap().kind, DutyKind::Rest);
        assert_eq!(sim.state.cycle_used, 70.0);
    }

    #[test]
    fn stop_that_would_overflow_the_window_rests_first() {
        // Shrunken window makes the case easy to construct: 1.5 h of
        // driving plus a 1-hour pickup cannot fit a 2-hour window.
        let limits = HosLimits {
            max_window_hours: 2.0,
            ..HosLimits::default()
        };
        let trip = TripLegs {
            leg1_miles: 97.5,
            leg1_hours: 1.5,
            leg2_miles: 0.0,
            leg2_hours: 0.0,
            pickup: pickup(),
            dropoff: dropoff(),
        };
        let events = simulate(limits, start(), 0.0, &trip).unwrap();

        let kinds: Vec<DutyKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DutyKind::Driving,
                DutyKind::Rest,
                DutyKind::OnDuty, // pickup, in the fresh window
                DutyKind::OnDuty, // dropoff fits: 1 + 1 = 2.0, not past 2.0
            ]
        );
    }

    #[test]
    fn leg_of_exactly_one_fuel_interval_ends_with_a_fuel_stop() {
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(1000.0)).unwrap();
        assert_eq!(count_kind(&events, DutyKind::Fuel), 1);
        let total_miles: f64 = events.iter().map(|e| e.miles).sum();
        assert!((total_miles - 1000.0).abs() < 1e-9);
    }
}

// ── Invariant properties ──────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    /// Walk an event list re-deriving the window counters, asserting the
    /// 11-hour and 14-hour limits held at every append.
    fn assert_window_limits(events: &[hos_core::DutyEvent]) {
        let limits = HosLimits::default();
        let mut driving_in_window = 0.0;
        let mut window_start = events[0].start;

        for e in events {
            if e.kind == DutyKind::Driving {
                let elapsed_before =
                    (e.start - window_start).num_nanoseconds().unwrap() as f64 / 3.6e12;
                assert!(
                    driving_in_window + e.duration_hours <= limits.max_driving_hours + 1e-9,
                    "driving cap breached at {}",
                    e.start
                );
                assert!(
                    elapsed_before < limits.max_window_hours,
                    "window open past 14 h at {}",
                    e.start
                );
                driving_in_window += e.duration_hours;
            }
            if e.kind == DutyKind::Rest {
                driving_in_window = 0.0;
                window_start = e.end;
            }
        }
    }

    #[test]
    fn timeline_is_contiguous_and_ordered() {
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(2300.0)).unwrap();
        assert_eq!(events[0].start, start());
        for pair in events.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
    }

    #[test]
    fn driving_and_window_caps_hold_on_a_multi_day_trip() {
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(2300.0)).unwrap();
        assert_window_limits(&events);
    }

    #[test]
    fn break_always_precedes_further_driving_after_eight_hours() {
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(800.0)).unwrap();
        let mut since_break = 0.0;
        for e in &events {
            match e.kind {
                DutyKind::Driving => {
                    assert!(since_break < 8.0, "driving with {since_break} h unbroken");
                    since_break += e.duration_hours;
                }
                DutyKind::Break | DutyKind::Rest => since_break = 0.0,
                _ => {}
            }
        }
    }

    #[test]
    fn totals_reduce_correctly() {
        let events = simulate(HosLimits::default(), start(), 0.0, &single_leg(800.0)).unwrap();
        let totals = crate::TripTotals::from_events(&events);
        assert!((totals.driving_hours - 800.0 / 65.0).abs() < 1e-9);
        // One 10-hour rest and one 0.5-hour break.
        assert!((totals.rest_hours - 10.5).abs() < 1e-9);
        // 08:00 start + ~23 h of events spans two calendar dates.
        assert_eq!(totals.days, 2);
    }
}

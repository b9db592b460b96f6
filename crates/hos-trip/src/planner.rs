//! End-to-end trip planning: collaborators → engine → compiler → contract.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hos_core::{shift_start, DutyEvent, HosLimits};
use hos_log::DailyLog;
use hos_sim::{HosSimulator, TripLegs, TripTotals};

use crate::{Geocoder, Location, RouteLeg, RouteSource, TripRequest, TripResult};

// ── Contract types ────────────────────────────────────────────────────────────

/// The three geocoded stops, echoed back for map rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripLocations {
    pub current: Location,
    pub pickup: Location,
    pub dropoff: Location,
}

/// The two routed legs, echoed back with their geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRoutes {
    pub leg1: RouteLeg,
    pub leg2: RouteLeg,
}

/// The complete planning result: everything the HTTP-facing caller needs.
/// JSON encoding, status codes, and error formatting belong to that caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub locations: TripLocations,
    pub routes: TripRoutes,
    pub total_distance_miles: f64,
    pub total_driving_hours: f64,
    pub total_rest_hours: f64,
    pub total_days: usize,
    pub events: Vec<DutyEvent>,
    pub daily_logs: Vec<DailyLog>,
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Plan a trip end to end.
///
/// Validates the request, resolves the three stops and two legs through the
/// collaborators, runs the HOS simulation from 08:00 on the day after
/// `now`, and compiles the daily logs and aggregates.
///
/// Collaborator calls are sequential; the engine is only invoked once both
/// legs are resolved (it has a hard dependency on their distances and
/// durations).
pub fn plan_trip<G: Geocoder, R: RouteSource>(
    geocoder: &G,
    routes: &R,
    request: &TripRequest,
    now: NaiveDateTime,
) -> TripResult<TripPlan> {
    let limits = HosLimits::default();
    request.validate(&limits)?;

    let current = geocoder.geocode(&request.current_location)?;
    let pickup = geocoder.geocode(&request.pickup_location)?;
    let dropoff = geocoder.geocode(&request.dropoff_location)?;
    debug!(%current.display_name, %pickup.display_name, %dropoff.display_name, "stops geocoded");

    let leg1 = routes.route(&current, &pickup)?;
    let leg2 = routes.route(&pickup, &dropoff)?;
    debug!(
        leg1_miles = leg1.distance_miles,
        leg2_miles = leg2.distance_miles,
        "legs routed"
    );

    let trip = TripLegs {
        leg1_miles: leg1.distance_miles,
        leg1_hours: leg1.duration_hours,
        leg2_miles: leg2.distance_miles,
        leg2_hours: leg2.duration_hours,
        pickup: pickup.point(),
        dropoff: dropoff.point(),
    };

    let mut sim = HosSimulator::new(limits, shift_start(now), request.current_cycle_used);
    sim.run(&trip)?;
    let events = sim.into_events();

    let daily_logs = hos_log::compile(&events);
    let totals = TripTotals::from_events(&events);
    info!(
        events = events.len(),
        days = totals.days,
        driving_hours = totals.driving_hours,
        "trip planned"
    );

    Ok(TripPlan {
        locations: TripLocations {
            current,
            pickup,
            dropoff,
        },
        routes: TripRoutes { leg1, leg2 },
        total_distance_miles: trip.total_miles(),
        total_driving_hours: round2(totals.driving_hours),
        total_rest_hours: round2(totals.rest_hours),
        total_days: totals.days,
        events,
        daily_logs,
    })
}

/// Display rounding for the aggregate fields of the contract.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

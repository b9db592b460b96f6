//! plan_trip — smallest end-to-end demo of the hos_trip planner.
//!
//! Plans a Chicago → Des Moines → Denver load with fixture collaborators in
//! place of the live geocoding/routing providers, then prints the duty
//! timeline, the per-day log grids, and the full JSON contract.  Swap the
//! stubs for Nominatim/OSRM-backed implementations to plan real trips.

use anyhow::Result;

use hos_trip::{plan_trip, Geocoder, Location, RouteLeg, RouteSource, TripError, TripRequest};

// ── Fixture collaborators ─────────────────────────────────────────────────────

/// Three-city gazetteer standing in for the live geocoding provider.
struct FixtureGeocoder;

const CITIES: &[(&str, f64, f64)] = &[
    ("Chicago, IL", 41.8781, -87.6298),
    ("Des Moines, IA", 41.5868, -93.6250),
    ("Denver, CO", 39.7392, -104.9903),
];

impl Geocoder for FixtureGeocoder {
    fn geocode(&self, address: &str) -> Result<Location, TripError> {
        CITIES
            .iter()
            .find(|(name, _, _)| *name == address)
            .map(|&(name, lat, lon)| Location {
                lat,
                lon,
                display_name: name.to_string(),
            })
            .ok_or_else(|| TripError::AddressNotFound(address.to_string()))
    }
}

/// Straight-line-ish leg distances at interstate speeds.
struct FixtureRoutes;

impl RouteSource for FixtureRoutes {
    fn route(&self, from: &Location, to: &Location) -> Result<RouteLeg, TripError> {
        let miles = match (from.display_name.as_str(), to.display_name.as_str()) {
            ("Chicago, IL", "Des Moines, IA") => 333.0,
            ("Des Moines, IA", "Denver, CO") => 669.0,
            _ => return Err(TripError::Routing(format!("no fixture route from {}", from.display_name))),
        };
        Ok(RouteLeg {
            distance_miles: miles,
            duration_hours: miles / 62.0,
            geometry: serde_json::json!({
                "type": "LineString",
                "coordinates": [[from.lon, from.lat], [to.lon, to.lat]],
            }),
        })
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let request = TripRequest {
        current_location: "Chicago, IL".to_string(),
        pickup_location: "Des Moines, IA".to_string(),
        dropoff_location: "Denver, CO".to_string(),
        current_cycle_used: 12.5,
    };

    println!("=== plan_trip — FMCSA HOS trip planner ===");
    println!(
        "{} → {} → {}  (cycle used: {} h)",
        request.current_location,
        request.pickup_location,
        request.dropoff_location,
        request.current_cycle_used
    );
    println!();

    let now = chrono::Local::now().naive_local();
    let plan = plan_trip(&FixtureGeocoder, &FixtureRoutes, &request, now)?;

    // Duty timeline.
    println!(
        "{:<10} {:<22} {:<22} {:>8} {:>8}",
        "Kind", "Start", "End", "Hours", "Miles"
    );
    println!("{}", "-".repeat(74));
    for e in &plan.events {
        println!(
            "{:<10} {:<22} {:<22} {:>8.2} {:>8.1}",
            e.kind.to_string(),
            e.start.to_string(),
            e.end.to_string(),
            e.duration_hours,
            e.miles,
        );
    }
    println!();

    // Per-day totals.
    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8}",
        "Date", "OFF", "SB", "D", "ON"
    );
    println!("{}", "-".repeat(48));
    for log in &plan.daily_logs {
        println!(
            "{:<12} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            log.date.to_string(),
            log.totals.off_duty,
            log.totals.sleeper,
            log.totals.driving,
            log.totals.on_duty,
        );
    }
    println!();

    println!(
        "Totals: {:.0} mi, {:.2} h driving, {:.2} h rest, {} day(s)",
        plan.total_distance_miles, plan.total_driving_hours, plan.total_rest_hours, plan.total_days
    );
    println!();
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}

//! `hos-trip` — trip-planning orchestration for the hos_trip planner.
//!
//! Wires the external collaborators (geocoding, routing — specified here at
//! their interfaces only) to the simulation engine and log compiler, and
//! assembles the complete [`TripPlan`] contract:
//!
//! ```text
//! TripRequest ── validate ──► Geocoder ×3 ──► RouteSource ×2
//!             ── HosSimulator::run ──► events
//!             ── hos_log::compile ──► daily logs
//!             ── TripTotals       ──► aggregates
//!             ──────────────────────► TripPlan (serde-ready)
//! ```
//!
//! HTTP framing, status codes, and wire transport are an outer layer's
//! concern; this crate stops at the serializable `TripPlan`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_trip::{plan_trip, TripRequest};
//!
//! let plan = plan_trip(&nominatim, &osrm, &request, chrono::Local::now().naive_local())?;
//! let json = serde_json::to_string(&plan)?;
//! ```

pub mod error;
pub mod location;
pub mod planner;
pub mod request;
pub mod source;


pub use error::{TripError, TripResult};
pub use location::{Location, RouteLeg};
pub use planner::{plan_trip, TripPlan, TripLocations, TripRoutes};
pub use request::TripRequest;
pub use source::{Geocoder, RouteSource};

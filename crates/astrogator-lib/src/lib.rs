//! Astrogator library entry points.
//!
//! This crate plans jump routes across hex-grid sector maps: minimum-jump
//! pathfinding bounded by a ship's drive rating, travel-zone avoidance,
//! refuel-aware planning, and reachability sweeps. Consumers provide sector
//! data through the [`SectorSource`] trait and should only depend on the
//! functions exported here instead of reimplementing behavior.

pub mod error;
pub mod hex;
pub mod path;
pub mod routing;
pub mod sector;

pub use error::{Error, Result};
pub use hex::HexCoord;
pub use path::{systems_in_range, RouteOptions};
pub use routing::fuel::{find_route_with_fuel, FuelRoute, FuelStop, RefuelInfo};
pub use routing::{
    find_alternative_routes, find_route, reachable_systems, ReachabilityMap, ReachableSystem,
    Route, DEFAULT_ALTERNATIVE_ROUTES,
};
pub use sector::{InMemorySectorSource, SectorSource, Starport, System, TravelZone};

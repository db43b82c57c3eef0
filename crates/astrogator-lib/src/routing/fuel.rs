//! Refuel-aware route planning.
//!
//! Jump drives burn their fuel load on every jump, so a ship that cannot
//! refuel at each stop is relying on whatever it carries. The planner here
//! first tries a route whose stops all offer fuel; when no such route exists
//! it falls back to the unconstrained route and flags the result.

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::hex::HexCoord;
use crate::path::RouteOptions;
use crate::sector::{SectorSource, Starport, System};

use super::{find_route, Route};

const FUEL_WARNING: &str = "wilderness refueling or drop tanks may be required";

/// Fuel availability at a single system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefuelInfo {
    pub has_gas_giant: bool,
    pub starport: Starport,
    /// Whether any refueling is possible, from port or gas giant.
    pub can_refuel: bool,
}

impl RefuelInfo {
    pub fn for_system(system: &System) -> Self {
        Self {
            has_gas_giant: system.has_gas_giant(),
            starport: system.starport,
            can_refuel: system.has_gas_giant() || system.starport.provides_fuel(),
        }
    }
}

/// One stop along a fuel-planned route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelStop {
    pub hex: HexCoord,
    pub name: String,
    /// Parsecs jumped to arrive here, zero for the origin.
    pub jump_from_previous: u32,
    pub refuel: RefuelInfo,
}

/// A route annotated with per-stop fuel availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelRoute {
    pub route: Route,
    pub stops: Vec<FuelStop>,
    /// Set when the route could not guarantee fuel at every stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Plan a route a ship can actually keep fueled along.
///
/// The first attempt requires fuel at every intermediate stop. If that leaves
/// no route, the search reruns with the caller's own options and the result
/// carries a warning instead, since the ship will have to skim a gas giant or
/// carry drop tanks to manage the dry legs. Errors other than a missing route
/// are returned as-is.
pub fn find_route_with_fuel(
    source: &dyn SectorSource,
    start: &str,
    goal: &str,
    options: &RouteOptions,
) -> Result<FuelRoute> {
    let strict = RouteOptions {
        require_refuel_at_each_stop: true,
        ..options.clone()
    };

    let (route, warning) = match find_route(source, start, goal, &strict) {
        Ok(route) => (route, None),
        Err(Error::NoRoute { .. }) => {
            warn!(
                sector = %options.sector,
                start,
                goal,
                "no route with guaranteed fuel stops; retrying without the refuel constraint"
            );
            let route = find_route(source, start, goal, options)?;
            (route, Some(FUEL_WARNING.to_string()))
        }
        Err(error) => return Err(error),
    };

    let systems = super::sector_snapshot(source, &options.sector)?;
    let mut stops = Vec::with_capacity(route.path.len());
    let mut previous: Option<HexCoord> = None;
    for &hex in &route.path {
        let system = super::resolve_system(systems, hex, &options.sector)?;
        stops.push(FuelStop {
            hex,
            name: system.name.clone(),
            jump_from_previous: previous.map_or(0, |prev| prev.distance_to(&hex)),
            refuel: RefuelInfo::for_system(system),
        });
        previous = Some(hex);
    }

    Ok(FuelRoute {
        route,
        stops,
        warning,
    })
}

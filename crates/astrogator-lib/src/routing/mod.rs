//! Jump route planning over sector maps.
//!
//! This module provides:
//! - [`Route`] - Planned jump route result
//! - [`find_route`] - Main entry point for computing a minimum-jump route
//! - [`find_alternative_routes`] - Routes at descending drive ratings
//! - [`reachable_systems`] - Every system within a jump budget
//!
//! # Example
//!
//! ```ignore
//! use astrogator_lib::{find_route, RouteOptions};
//!
//! let source = load_sector_data("path/to/sectors.json")?;
//! let options = RouteOptions::new("Spinward Marches");
//! let route = find_route(&source, "0910", "1910", &options)?;
//! println!("Route: {} jumps", route.jumps);
//! ```

pub mod fuel;

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hex::HexCoord;
use crate::path::{find_route_a_star, systems_in_range, RouteOptions};
use crate::sector::{SectorSource, System, TravelZone};

/// How many drive ratings to try when listing alternatives.
pub const DEFAULT_ALTERNATIVE_ROUTES: usize = 3;

/// Planned jump route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Hexes visited, start and goal included.
    pub path: Vec<HexCoord>,
    /// System names matching `path` entry for entry.
    pub system_names: Vec<String>,
    /// Drive rating the route was planned for.
    pub jump_range: u32,
    /// Number of jumps flown.
    pub jumps: u32,
    /// Total distance covered in parsecs.
    pub parsecs: u32,
}

/// A system reached during a reachability sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachableSystem {
    pub name: String,
    /// Fewest jumps needed to arrive.
    pub jumps: u32,
    /// One minimum-jump path from the origin, origin included.
    pub path: Vec<HexCoord>,
}

/// Reachable systems keyed by hex, ordered for stable output.
pub type ReachabilityMap = BTreeMap<HexCoord, ReachableSystem>;

// =============================================================================
// Main Entry Points
// =============================================================================

/// Compute a minimum-jump route between two hexes.
///
/// This is the main entry point for route planning. It:
/// 1. Validates the options and parses both hex locations
/// 2. Resolves the sector and both endpoint systems
/// 3. Returns a zero-jump route when start and goal coincide
/// 4. Takes a single direct jump when the goal is already in range
/// 5. Otherwise runs an A* search over the sector's systems
///
/// A direct jump needs no intermediate stop, so avoidance and refuel rules do
/// not apply to it. Longer routes check the goal's travel zone and every
/// intermediate stop against the options.
pub fn find_route(
    source: &dyn SectorSource,
    start: &str,
    goal: &str,
    options: &RouteOptions,
) -> Result<Route> {
    options.validate()?;
    let start_hex: HexCoord = start.parse()?;
    let goal_hex: HexCoord = goal.parse()?;

    let systems = sector_snapshot(source, &options.sector)?;
    resolve_system(systems, start_hex, &options.sector)?;
    let goal_system = resolve_system(systems, goal_hex, &options.sector)?;

    debug!(
        sector = %options.sector,
        start = %start_hex,
        goal = %goal_hex,
        jump_range = options.jump_range,
        "planning route"
    );

    if start_hex == goal_hex {
        return Ok(build_route(systems, vec![start_hex], options.jump_range));
    }

    if start_hex.distance_to(&goal_hex) <= options.jump_range {
        return Ok(build_route(
            systems,
            vec![start_hex, goal_hex],
            options.jump_range,
        ));
    }

    if !options.zone_permits(goal_system) {
        return Err(Error::NoRoute {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    }

    let path =
        find_route_a_star(systems, start_hex, goal_hex, options).ok_or_else(|| Error::NoRoute {
            start: start.to_string(),
            goal: goal.to_string(),
        })?;

    Ok(build_route(systems, path, options.jump_range))
}

/// List distinct routes at descending drive ratings.
///
/// The first attempt uses the requested jump range, then each lower rating
/// down to jump-1. Ratings that produce no route are skipped, as are routes
/// identical to one already found, so the result may hold fewer than
/// `max_routes` entries. Errors other than a missing route stop the search.
pub fn find_alternative_routes(
    source: &dyn SectorSource,
    start: &str,
    goal: &str,
    options: &RouteOptions,
    max_routes: usize,
) -> Result<Vec<Route>> {
    options.validate()?;
    if max_routes == 0 {
        return Ok(Vec::new());
    }

    let mut routes: Vec<Route> = Vec::new();
    let mut rating = options.jump_range;
    loop {
        let attempt = RouteOptions {
            jump_range: rating,
            ..options.clone()
        };
        match find_route(source, start, goal, &attempt) {
            Ok(route) => {
                if routes.iter().all(|known| known.path != route.path) {
                    routes.push(route);
                }
            }
            Err(Error::NoRoute { .. }) => {}
            Err(error) => return Err(error),
        }

        if routes.len() >= max_routes || rating == 1 {
            break;
        }
        rating -= 1;
    }

    Ok(routes)
}

/// Every system reachable from `start` within `max_jumps` jumps.
///
/// Breadth-first, so each system is recorded with its minimum jump count and
/// one shortest path. Red-zone systems are skipped while
/// [`RouteOptions::avoid_red_zones`] is set; other avoidance and refuel rules
/// do not constrain a sweep. The origin itself is not listed.
pub fn reachable_systems(
    source: &dyn SectorSource,
    start: &str,
    max_jumps: u32,
    options: &RouteOptions,
) -> Result<ReachabilityMap> {
    options.validate()?;
    let start_hex: HexCoord = start.parse()?;

    let systems = sector_snapshot(source, &options.sector)?;
    resolve_system(systems, start_hex, &options.sector)?;

    debug!(
        sector = %options.sector,
        start = %start_hex,
        max_jumps,
        jump_range = options.jump_range,
        "sweeping reachable systems"
    );

    let mut reachable = ReachabilityMap::new();
    let mut visited = HashSet::from([start_hex]);
    let mut frontier = VecDeque::from([(start_hex, 0u32, vec![start_hex])]);

    while let Some((hex, jumps, path)) = frontier.pop_front() {
        if jumps >= max_jumps {
            continue;
        }

        for neighbour in systems_in_range(systems, hex, options.jump_range) {
            if visited.contains(&neighbour.hex) {
                continue;
            }
            if options.avoid_red_zones && neighbour.zone == TravelZone::Red {
                continue;
            }

            let mut next_path = path.clone();
            next_path.push(neighbour.hex);
            visited.insert(neighbour.hex);
            reachable.insert(
                neighbour.hex,
                ReachableSystem {
                    name: neighbour.name.clone(),
                    jumps: jumps + 1,
                    path: next_path.clone(),
                },
            );
            frontier.push_back((neighbour.hex, jumps + 1, next_path));
        }
    }

    Ok(reachable)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up a sector's systems, erroring on unknown sector names.
fn sector_snapshot<'a>(source: &'a dyn SectorSource, sector: &str) -> Result<&'a [System]> {
    source
        .list_systems(sector)
        .ok_or_else(|| Error::UnknownSector {
            name: sector.to_string(),
        })
}

/// Find the system occupying a hex, erroring on empty hexes.
fn resolve_system<'a>(systems: &'a [System], hex: HexCoord, sector: &str) -> Result<&'a System> {
    systems
        .iter()
        .find(|system| system.hex == hex)
        .ok_or_else(|| Error::UnknownSystem {
            sector: sector.to_string(),
            hex: hex.to_string(),
        })
}

/// Assemble the route summary for a finished path.
fn build_route(systems: &[System], path: Vec<HexCoord>, jump_range: u32) -> Route {
    let names: HashMap<HexCoord, &str> = systems
        .iter()
        .map(|system| (system.hex, system.name.as_str()))
        .collect();
    let system_names = path
        .iter()
        .map(|hex| names.get(hex).copied().unwrap_or("<unknown>").to_string())
        .collect();
    let parsecs = path
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum();
    let jumps = path.len().saturating_sub(1) as u32;

    Route {
        path,
        system_names,
        jump_range,
        jumps,
        parsecs,
    }
}

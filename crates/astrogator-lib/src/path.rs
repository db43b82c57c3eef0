use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Error, Result};
use crate::hex::HexCoord;
use crate::sector::{System, TravelZone};

/// Knobs for a route search.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Sector to plan within.
    pub sector: String,
    /// Jump drive rating, in parsecs per jump. Valid ratings are 1 to 6.
    pub jump_range: u32,
    /// Skip red-zone systems when choosing intermediate stops.
    pub avoid_red_zones: bool,
    /// Skip amber-zone systems when choosing intermediate stops.
    pub avoid_amber_zones: bool,
    /// Only stop at systems where fuel is available.
    pub require_refuel_at_each_stop: bool,
    /// Restrict refueling to gas-giant skimming, ignoring starports.
    pub wilderness_refuel_only: bool,
}

impl RouteOptions {
    /// Options for a jump-2 ship that steers clear of red zones.
    pub fn new(sector: impl Into<String>) -> Self {
        Self {
            sector: sector.into(),
            jump_range: 2,
            avoid_red_zones: true,
            avoid_amber_zones: false,
            require_refuel_at_each_stop: false,
            wilderness_refuel_only: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.jump_range) {
            return Err(Error::InvalidJumpRange {
                value: self.jump_range,
            });
        }
        Ok(())
    }

    /// Whether a system is acceptable as an intermediate stop.
    pub fn allows_waypoint(&self, system: &System) -> bool {
        if !self.zone_permits(system) {
            return false;
        }
        if self.wilderness_refuel_only {
            return system.has_gas_giant();
        }
        if self.require_refuel_at_each_stop {
            return system.has_gas_giant() || system.starport.provides_fuel();
        }
        true
    }

    pub(crate) fn zone_permits(&self, system: &System) -> bool {
        match system.zone {
            TravelZone::Green => true,
            TravelZone::Amber => !self.avoid_amber_zones,
            TravelZone::Red => !self.avoid_red_zones,
        }
    }
}

/// Systems within jump distance of `origin`, excluding `origin` itself.
pub fn systems_in_range<'a>(
    systems: &'a [System],
    origin: HexCoord,
    jump_range: u32,
) -> Vec<&'a System> {
    systems
        .iter()
        .filter(|system| {
            let distance = origin.distance_to(&system.hex);
            distance > 0 && distance <= jump_range
        })
        .collect()
}

/// A* search for a minimum-jump path from `start` to `goal`.
///
/// Every jump costs one regardless of distance covered, so the estimate adds
/// the remaining parsecs divided by the jump range, rounded up. Intermediate
/// stops must pass [`RouteOptions::allows_waypoint`]; the goal only has to
/// clear the zone rules, since nobody refuels at their destination.
pub(crate) fn find_route_a_star(
    systems: &[System],
    start: HexCoord,
    goal: HexCoord,
    options: &RouteOptions,
) -> Option<Vec<HexCoord>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut g_score: HashMap<HexCoord, u32> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<HexCoord, Option<HexCoord>> = HashMap::from([(start, None)]);
    let mut frontier = BinaryHeap::from([JumpEntry {
        node: start,
        jumps: 0,
        estimate: heuristic_jumps(start, goal, options.jump_range),
    }]);

    while let Some(entry) = frontier.pop() {
        let jumps = match g_score.get(&entry.node) {
            Some(jumps) if *jumps < entry.jumps => continue,
            Some(jumps) => *jumps,
            None => continue,
        };

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for neighbour in systems_in_range(systems, entry.node, options.jump_range) {
            let next = neighbour.hex;
            let permitted = if next == goal {
                options.zone_permits(neighbour)
            } else {
                options.allows_waypoint(neighbour)
            };
            if !permitted {
                continue;
            }

            let tentative = jumps + 1;
            if tentative < g_score.get(&next).copied().unwrap_or(u32::MAX) {
                g_score.insert(next, tentative);
                parents.insert(next, Some(entry.node));
                frontier.push(JumpEntry {
                    node: next,
                    jumps: tentative,
                    estimate: tentative + heuristic_jumps(next, goal, options.jump_range),
                });
            }
        }
    }

    None
}

/// Fewest jumps that could possibly cover the remaining distance.
fn heuristic_jumps(from: HexCoord, goal: HexCoord, jump_range: u32) -> u32 {
    from.distance_to(&goal).div_ceil(jump_range)
}

fn reconstruct_path(
    parents: &HashMap<HexCoord, Option<HexCoord>>,
    start: HexCoord,
    goal: HexCoord,
) -> Vec<HexCoord> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JumpEntry {
    node: HexCoord,
    jumps: u32,
    estimate: u32,
}

impl Ord for JumpEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for JumpEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

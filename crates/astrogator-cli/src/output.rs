//! Output formatting for routes, fuel plans, and reachability sweeps.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use astrogator_lib::{FuelRoute, HexCoord, ReachabilityMap, RefuelInfo, Route};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render a route in text format.
pub fn render_route_text(route: &Route) {
    let (start, goal) = endpoint_names(route);
    println!(
        "Route from {} to {} ({} jumps, {} parsecs; jump-{}):",
        start, goal, route.jumps, route.parsecs, route.jump_range
    );
    for (hex, name) in route.path.iter().zip(&route.system_names) {
        println!("- {} ({})", name, hex);
    }
}

/// Render an alternatives listing in text format.
pub fn render_routes_text(routes: &[Route]) {
    if routes.is_empty() {
        println!("No routes found.");
        return;
    }
    for (index, route) in routes.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Option {}:", index + 1);
        render_route_text(route);
    }
}

/// Render a fuel-annotated route in text format.
pub fn render_fuel_text(fuel_route: &FuelRoute) {
    let route = &fuel_route.route;
    let (start, goal) = endpoint_names(route);
    println!(
        "Route from {} to {} ({} jumps, {} parsecs; jump-{}):",
        start, goal, route.jumps, route.parsecs, route.jump_range
    );
    for (index, stop) in fuel_route.stops.iter().enumerate() {
        if index == 0 {
            println!(
                "- {} ({}) [port {}; refuel: {}]",
                stop.name,
                stop.hex,
                stop.refuel.starport,
                refuel_label(&stop.refuel)
            );
        } else {
            println!(
                "- {} ({}) +{}pc [port {}; refuel: {}]",
                stop.name,
                stop.hex,
                stop.jump_from_previous,
                stop.refuel.starport,
                refuel_label(&stop.refuel)
            );
        }
    }
    if let Some(warning) = &fuel_route.warning {
        println!("\nWarning: {}", warning);
    }
}

/// Render a reachability sweep in text format.
pub fn render_reachability_text(origin: &str, max_jumps: u32, reachable: &ReachabilityMap) {
    if reachable.is_empty() {
        println!("No systems within {} jumps of {}.", max_jumps, origin);
        return;
    }
    println!("Systems within {} jumps of {}:", max_jumps, origin);
    for (hex, entry) in reachable {
        println!(
            "- {} ({}): {} jumps via {}",
            entry.name,
            hex,
            entry.jumps,
            path_display(&entry.path)
        );
    }
}

/// Render any serializable result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn endpoint_names(route: &Route) -> (&str, &str) {
    let start = route
        .system_names
        .first()
        .map(String::as_str)
        .unwrap_or("<unknown>");
    let goal = route
        .system_names
        .last()
        .map(String::as_str)
        .unwrap_or("<unknown>");
    (start, goal)
}

fn refuel_label(refuel: &RefuelInfo) -> &'static str {
    if refuel.has_gas_giant {
        "yes (gas giant)"
    } else if refuel.can_refuel {
        "yes"
    } else {
        "no"
    }
}

fn path_display(path: &[HexCoord]) -> String {
    path.iter()
        .map(HexCoord::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

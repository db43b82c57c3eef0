use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use astrogator_cli::output::{self, OutputFormat};
use astrogator_cli::sector_file::load_sector_file;
use astrogator_lib::{
    find_alternative_routes, find_route, find_route_with_fuel, reachable_systems,
    Error as LibError, InMemorySectorSource, RouteOptions, DEFAULT_ALTERNATIVE_ROUTES,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Jump route planning over sector maps")]
struct Cli {
    /// Path to the sector map JSON file.
    #[arg(long)]
    sector_file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

/// Planning flags shared by every subcommand.
#[derive(Args, Debug)]
struct RouteFlags {
    /// Jump drive rating in parsecs per jump.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=6))]
    jump_range: u32,

    /// Sector to plan in; defaults to the sector named in the file.
    #[arg(long)]
    sector: Option<String>,

    /// Permit red-zone systems as stops.
    #[arg(long)]
    no_avoid_red_zones: bool,

    /// Skip amber-zone systems when choosing stops.
    #[arg(long)]
    avoid_amber_zones: bool,

    /// Only stop at systems where fuel is available.
    #[arg(long)]
    refuel_at_each_stop: bool,

    /// Only refuel by skimming gas giants.
    #[arg(long)]
    wilderness_refuel_only: bool,
}

impl RouteFlags {
    fn to_options(&self, default_sector: &str) -> RouteOptions {
        RouteOptions {
            sector: self
                .sector
                .clone()
                .unwrap_or_else(|| default_sector.to_string()),
            jump_range: self.jump_range,
            avoid_red_zones: !self.no_avoid_red_zones,
            avoid_amber_zones: self.avoid_amber_zones,
            require_refuel_at_each_stop: self.refuel_at_each_stop,
            wilderness_refuel_only: self.wilderness_refuel_only,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a minimum-jump route between two hexes.
    Route {
        /// Starting hex, e.g. 0910.
        #[arg(long = "from")]
        from: String,
        /// Destination hex.
        #[arg(long = "to")]
        to: String,
        #[command(flatten)]
        flags: RouteFlags,
    },
    /// List alternative routes at descending drive ratings.
    Routes {
        /// Starting hex.
        #[arg(long = "from")]
        from: String,
        /// Destination hex.
        #[arg(long = "to")]
        to: String,
        /// Most routes to list.
        #[arg(long, default_value_t = DEFAULT_ALTERNATIVE_ROUTES)]
        max_routes: usize,
        #[command(flatten)]
        flags: RouteFlags,
    },
    /// Plan a route with refueling stops in mind.
    Fuel {
        /// Starting hex.
        #[arg(long = "from")]
        from: String,
        /// Destination hex.
        #[arg(long = "to")]
        to: String,
        #[command(flatten)]
        flags: RouteFlags,
    },
    /// List every system within a jump budget of a hex.
    Reach {
        /// Origin hex.
        #[arg(long = "from")]
        from: String,
        /// Jump budget.
        #[arg(long, default_value_t = 2)]
        max_jumps: u32,
        #[command(flatten)]
        flags: RouteFlags,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (sector_name, source) = load_sector_file(&cli.sector_file)?;

    match cli.command {
        Command::Route { from, to, flags } => {
            handle_route(&source, &sector_name, &from, &to, &flags, cli.format)
        }
        Command::Routes {
            from,
            to,
            max_routes,
            flags,
        } => handle_routes(
            &source,
            &sector_name,
            &from,
            &to,
            max_routes,
            &flags,
            cli.format,
        ),
        Command::Fuel { from, to, flags } => {
            handle_fuel(&source, &sector_name, &from, &to, &flags, cli.format)
        }
        Command::Reach {
            from,
            max_jumps,
            flags,
        } => handle_reach(&source, &sector_name, &from, max_jumps, &flags, cli.format),
    }
}

fn handle_route(
    source: &InMemorySectorSource,
    default_sector: &str,
    from: &str,
    to: &str,
    flags: &RouteFlags,
    format: OutputFormat,
) -> Result<()> {
    let options = flags.to_options(default_sector);
    let route =
        find_route(source, from, to, &options).map_err(|error| friendly_error(error, &options))?;

    match format {
        OutputFormat::Text => output::render_route_text(&route),
        OutputFormat::Json => output::render_json(&route)?,
    }
    Ok(())
}

fn handle_routes(
    source: &InMemorySectorSource,
    default_sector: &str,
    from: &str,
    to: &str,
    max_routes: usize,
    flags: &RouteFlags,
    format: OutputFormat,
) -> Result<()> {
    let options = flags.to_options(default_sector);
    let routes = find_alternative_routes(source, from, to, &options, max_routes)
        .map_err(|error| friendly_error(error, &options))?;

    match format {
        OutputFormat::Text => output::render_routes_text(&routes),
        OutputFormat::Json => output::render_json(&routes)?,
    }
    Ok(())
}

fn handle_fuel(
    source: &InMemorySectorSource,
    default_sector: &str,
    from: &str,
    to: &str,
    flags: &RouteFlags,
    format: OutputFormat,
) -> Result<()> {
    let options = flags.to_options(default_sector);
    let fuel_route = find_route_with_fuel(source, from, to, &options)
        .map_err(|error| friendly_error(error, &options))?;

    match format {
        OutputFormat::Text => output::render_fuel_text(&fuel_route),
        OutputFormat::Json => output::render_json(&fuel_route)?,
    }
    Ok(())
}

fn handle_reach(
    source: &InMemorySectorSource,
    default_sector: &str,
    from: &str,
    max_jumps: u32,
    flags: &RouteFlags,
    format: OutputFormat,
) -> Result<()> {
    let options = flags.to_options(default_sector);
    let reachable = reachable_systems(source, from, max_jumps, &options)
        .map_err(|error| friendly_error(error, &options))?;

    match format {
        OutputFormat::Text => output::render_reachability_text(from, max_jumps, &reachable),
        OutputFormat::Json => output::render_json(&reachable)?,
    }
    Ok(())
}

fn friendly_error(error: LibError, options: &RouteOptions) -> anyhow::Error {
    match error {
        LibError::NoRoute { start, goal } => {
            anyhow::anyhow!(format_no_route_message(&start, &goal, options))
        }
        LibError::UnknownSystem { sector, hex } => anyhow::anyhow!(
            "No system at hex {} in sector '{}'. Check the hex against the sector map.",
            hex,
            sector
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_no_route_message(start: &str, goal: &str, options: &RouteOptions) -> String {
    let mut message = format!("No valid route found between {} and {}.", start, goal);
    let mut tips = Vec::new();
    if options.jump_range < 6 {
        tips.push("increase --jump-range");
    }
    if options.avoid_red_zones {
        tips.push("allow red zones (--no-avoid-red-zones)");
    }
    if options.avoid_amber_zones {
        tips.push("omit --avoid-amber-zones");
    }
    if options.require_refuel_at_each_stop {
        tips.push("omit --refuel-at-each-stop");
    }
    if options.wilderness_refuel_only {
        tips.push("omit --wilderness-refuel-only");
    }
    if tips.is_empty() {
        message.push_str(" The destination may be isolated beyond jump-6 range.");
    } else {
        message.push(' ');
        message.push_str(&format!("Try {}.", tips.join(", ")));
    }
    message
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

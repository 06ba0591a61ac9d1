use std::path::PathBuf;
use std::process::ExitCode;

use campus_navigator::config::load_config;
use campus_navigator::models::{floor_name, Floor};
use campus_navigator::presenter::{floor_segments, stops};
use campus_navigator::utils::audit::MapAudit;
use campus_navigator::utils::init_map::{bundled_campus, load_building};
use campus_navigator::utils::render::FloorPlan;
use campus_navigator::{
    Building, NavigatorConfig, NavigatorError, Route, RouteOutcome, RouteSummary, SearchStrategy,
};
use clap::{Parser, Subcommand};

/// Shortest walking routes between rooms of a building
#[derive(Parser)]
#[command(name = "campus_navigator", version)]
struct Cli {
    /// Map document to use instead of the bundled campus
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search strategy (linear-scan or indexed-heap), overrides the configuration
    #[arg(long, global = true)]
    strategy: Option<SearchStrategy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all rooms grouped by floor
    Rooms,
    /// Find the shortest route between two rooms
    Route {
        from: String,
        to: String,
        /// Floor whose segments to show, defaults to the source floor
        #[arg(long)]
        floor: Option<Floor>,
        /// Write the shown floor as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Report inconsistencies in the map data
    Audit,
    /// Draw a floor plan without a route
    Render { floor: Floor, output: PathBuf },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, NavigatorError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NavigatorConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }

    let building = match &cli.map {
        Some(path) => load_building(path)?,
        None => bundled_campus()?,
    };

    match cli.command {
        Command::Rooms => print_rooms(&building),
        Command::Route {
            from,
            to,
            floor,
            svg,
        } => return navigate(&building, &config, &from, &to, floor, svg),
        Command::Audit => print_audit(&building),
        Command::Render { floor, output } => {
            let no_route = Route::empty();
            FloorPlan::new(&building, floor, &no_route, config.plan_padding).write_svg(&output)?;
            println!("{} written to {}", floor_name(floor), output.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_rooms(building: &Building) {
    for group in building.rooms_by_floor() {
        println!("{}", group.label);
        for room in group.rooms {
            println!("  {:<28} {}", room.name, room.id);
        }
    }
}

fn navigate(
    building: &Building,
    config: &NavigatorConfig,
    from: &str,
    to: &str,
    floor: Option<Floor>,
    svg: Option<PathBuf>,
) -> Result<ExitCode, NavigatorError> {
    for id in [from, to] {
        if !building.contains(id) {
            return Err(NavigatorError::UnknownLocation(id.to_string()));
        }
    }
    if from == to {
        eprintln!("Source and destination cannot be the same");
        return Ok(ExitCode::FAILURE);
    }

    let route = match config.strategy.search(building, from, to) {
        RouteOutcome::Found(route) => route,
        _ => {
            eprintln!("No path found between selected rooms");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Path found! {}", RouteSummary::new(building, &route, config.distance_scale));
    for stop in stops(building, &route) {
        let badge = if stop.is_first {
            " [Start]"
        } else if stop.is_last {
            " [End]"
        } else {
            ""
        };
        println!("{:>3}. {} ({}){}", stop.index, stop.name, stop.floor_name, badge);
        if let Some(label) = stop.transition_label() {
            println!("     -> {}", label);
        }
    }

    // Show the source floor unless asked otherwise
    let shown_floor = floor
        .or_else(|| building.get(from).map(|l| l.floor))
        .unwrap_or_default();
    println!(
        "{}: {} highlighted segments",
        floor_name(shown_floor),
        floor_segments(building, &route, shown_floor).len()
    );

    if let Some(path) = svg {
        FloorPlan::new(building, shown_floor, &route, config.plan_padding).write_svg(&path)?;
        println!("Floor plan written to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn print_audit(building: &Building) {
    let audit = MapAudit::of(building);

    println!(
        "{}: {} locations, {} floors, {} connected part(s)",
        building.name(),
        building.len(),
        building.floors().len(),
        audit.components
    );
    for (from, to) in &audit.dangling {
        println!("  dangling: {} -> {}", from, to);
    }
    for (from, to) in &audit.one_way {
        println!("  one-way: {} -> {}", from, to);
    }
    for id in &audit.isolated {
        println!("  isolated: {}", id);
    }
    println!("  {} ordered pairs without a route", audit.unreachable.len());
    if audit.is_clean() {
        println!("No issues found");
    }
}

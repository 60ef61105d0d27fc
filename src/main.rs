use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use tourguide::config::TourGuideConfig;
use tourguide::logging::init_logging;
use tourguide::{
    Itinerary, ItineraryPlanner, PlannerSession, PlannerSettings, PoiCatalog, TravelStyle,
    TripParameters, directions, export,
};

#[derive(Parser)]
#[command(name = "tourguide")]
#[command(about = "Plan a multi-day sightseeing itinerary from a catalog of points of interest")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the states, or the cities of one state, in a catalog
    Catalog {
        /// POI catalog (JSON)
        #[arg(long, env = "TOURGUIDE_CATALOG")]
        catalog: Option<PathBuf>,

        /// Show the cities of this state
        #[arg(long)]
        state: Option<String>,
    },
    /// Generate an itinerary
    Plan(PlanArgs),
}

#[derive(clap::Args)]
struct PlanArgs {
    /// POI catalog (JSON)
    #[arg(long, env = "TOURGUIDE_CATALOG")]
    catalog: Option<PathBuf>,

    #[arg(long)]
    state: String,

    #[arg(long)]
    city: String,

    /// Number of days (defaults to the configured value)
    #[arg(long)]
    days: Option<u32>,

    /// Travel style: cultural, historical, family, adventure, romantic, spiritual, relaxation
    #[arg(long)]
    style: Option<TravelStyle>,

    /// Daily start time, HH:MM
    #[arg(long)]
    start: Option<String>,

    /// Where you stay, as lat,lon
    #[arg(long, default_value = "")]
    stay: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print a driving-directions link for every day with two or more stops
    #[arg(long)]
    directions: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TourGuideConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    init_logging(&config.logging, cli.verbose)?;
    debug!("Using configuration: {:?}", config);

    match cli.command {
        Command::Catalog { catalog, state } => handle_catalog(&config, catalog, state),
        Command::Plan(args) => handle_plan(&config, args),
    }
}

fn load_catalog(config: &TourGuideConfig, path: Option<PathBuf>) -> Result<PoiCatalog> {
    let path = path
        .or_else(|| config.trip.catalog_path.clone())
        .ok_or_else(|| anyhow!("No catalog given. Pass --catalog or set trip.catalog_path"))?;
    PoiCatalog::load(&path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))
}

fn handle_catalog(
    config: &TourGuideConfig,
    path: Option<PathBuf>,
    state: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(config, path)?;
    match state {
        Some(state) => {
            for city in catalog.cities(&state)? {
                let count = catalog.pois(&state, city)?.len();
                println!("{city} ({count} places)");
            }
        }
        None => {
            for state in catalog.states() {
                println!("{state}");
            }
        }
    }
    Ok(())
}

fn handle_plan(config: &TourGuideConfig, args: PlanArgs) -> Result<()> {
    let catalog = load_catalog(config, args.catalog)?;
    let planner = ItineraryPlanner::new(PlannerSettings::from(&config.planner));
    let mut session = PlannerSession::new(planner, config.trip.max_days);

    let params = TripParameters {
        state: args.state,
        city: args.city,
        days: args.days.unwrap_or(config.trip.days),
        travel_style: args.style.unwrap_or(config.trip.travel_style),
        start_time: args.start.unwrap_or_else(|| config.trip.start_time.clone()),
        stay_location: args.stay,
    };
    session
        .update(&catalog, params.clone())
        .map_err(|e| anyhow!("Failed to generate itinerary: {}", e.user_message()))?;
    let itinerary = session
        .itinerary()
        .ok_or_else(|| anyhow!("No itinerary was generated"))?;

    match args.format {
        OutputFormat::Text => print_text(&params, itinerary),
        OutputFormat::Json => println!("{}", export::to_json(itinerary)?),
        OutputFormat::Csv => export::write_csv(itinerary, io::stdout().lock())?,
    }

    if args.directions {
        for (day, entries) in itinerary.days() {
            if let Some(url) = directions::google_maps_url(entries) {
                println!("Day {day} route: {url}");
            }
        }
    }
    Ok(())
}

fn print_text(params: &TripParameters, itinerary: &Itinerary) {
    println!(
        "Trip itinerary for {} ({} days, {})",
        params.city, params.days, params.travel_style
    );
    for (day, entries) in itinerary.days() {
        println!();
        println!("Day {day}");
        if entries.is_empty() {
            println!(
                "  No activities could be scheduled for Day {day}. Try increasing the number of days or changing your travel style."
            );
            continue;
        }
        for entry in entries {
            let tags = if entry.poi.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", entry.poi.tags.join(", "))
            };
            println!(
                "  {}  {} ({} hrs){}",
                entry.window(),
                entry.poi.name,
                entry.poi.duration,
                tags
            );
        }
    }
}

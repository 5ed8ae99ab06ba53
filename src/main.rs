use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tripplanner::config::LoggingConfig;
use tripplanner::{
    DayType, Itinerary, LocationResolver, MockPlaceDirectory, MockRouteEstimator, MockTripStore,
    PlaceProvider, RouteEstimator, Trip, TripPlannerConfig, TripPlannerError, TripStore,
    TripSummary, derive_segments,
};

#[derive(Debug, Parser)]
#[command(
    name = "tripplanner",
    version,
    about = "Multi-day trip itinerary planner with mocked route and cost estimates"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DayTypeArg {
    Travel,
    Stay,
}

impl From<DayTypeArg> for DayType {
    fn from(value: DayTypeArg) -> Self {
        match value {
            DayTypeArg::Travel => DayType::Travel,
            DayTypeArg::Stay => DayType::Stay,
        }
    }
}

/// Trip commands read a trip JSON file (`-` for stdin) and print the result
#[derive(Debug, Subcommand)]
enum Command {
    /// Start a new trip with a single travel day
    New {
        #[arg(long, default_value_t = 1)]
        members: u32,
        /// Start of day 1 (place name or "lat,lng")
        #[arg(long)]
        start: Option<String>,
        /// Destination of day 1
        #[arg(long)]
        end: Option<String>,
    },
    /// Append a day seeded from where the last day ends
    AddDay {
        trip: String,
        #[arg(long = "type", value_enum, default_value = "travel")]
        day_type: DayTypeArg,
    },
    /// Remove a day and renumber the rest
    RemoveDay {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
    },
    /// Toggle a day between travel and stay
    SetType {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        #[arg(long = "type", value_enum)]
        day_type: DayTypeArg,
    },
    /// Set where day 1 starts
    SetStart {
        trip: String,
        #[arg(long)]
        place: String,
    },
    /// Set a day's destination
    SetEnd {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        #[arg(long)]
        place: String,
    },
    /// Append a stop to a day
    AddStop {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        #[arg(long)]
        place: String,
    },
    /// Replace the stop at a position
    ReplaceStop {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stop: u32,
        #[arg(long)]
        place: String,
    },
    /// Remove the stop at a position
    RemoveStop {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stop: u32,
    },
    /// Move a stop onto another stop's position
    MoveStop {
        trip: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        from: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        to: u32,
    },
    /// Change the traveler count (clamped to 1..=50)
    SetMembers {
        trip: String,
        #[arg(long)]
        members: u32,
    },
    /// Rewrite stored day starts from the day chain
    Relink { trip: String },
    /// Calculate distances and costs
    Estimate { trip: String },
    /// Print the map segments of the trip
    Segments { trip: String },
    /// Print the trip summary
    Summary {
        trip: String,
        /// Calculate before summarizing
        #[arg(long)]
        calculate: bool,
    },
    /// Look up places by name
    Search { query: String },
    /// Send the trip to the save endpoint
    Save { trip: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TripPlannerError>() {
                Some(err) => eprintln!("Error: {}", err.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = TripPlannerConfig::load_from_path(cli.config.clone())?;
    init_tracing(&config.logging, cli.verbose);
    tracing::debug!("Loaded configuration: {:?}", config);

    let places = MockPlaceDirectory::new(config.places.clone());

    match cli.command {
        Command::New {
            members,
            start,
            end,
        } => {
            let mut trip = Trip::new(members);
            if let Some(start) = start {
                let location = LocationResolver::resolve_str(&places, &start).await?;
                trip = Itinerary::set_start_location(trip, 0, location)?;
            }
            if let Some(end) = end {
                let location = LocationResolver::resolve_str(&places, &end).await?;
                trip = Itinerary::set_end_location(trip, 0, location)?;
            }
            print_json(&trip)
        }
        Command::AddDay { trip, day_type } => {
            let trip = read_trip(&trip)?;
            print_json(&Itinerary::append_day(trip, day_type.into()))
        }
        Command::RemoveDay { trip, day } => {
            let trip = read_trip(&trip)?;
            print_json(&Itinerary::remove_day(trip, index(day))?)
        }
        Command::SetType {
            trip,
            day,
            day_type,
        } => {
            let trip = read_trip(&trip)?;
            print_json(&Itinerary::set_day_type(trip, index(day), day_type.into())?)
        }
        Command::SetStart { trip, place } => {
            let trip = read_trip(&trip)?;
            let location = LocationResolver::resolve_str(&places, &place).await?;
            print_json(&Itinerary::set_start_location(trip, 0, location)?)
        }
        Command::SetEnd { trip, day, place } => {
            let trip = read_trip(&trip)?;
            let location = LocationResolver::resolve_str(&places, &place).await?;
            print_json(&Itinerary::set_end_location(trip, index(day), location)?)
        }
        Command::AddStop { trip, day, place } => {
            let trip = read_trip(&trip)?;
            let location = LocationResolver::resolve_str(&places, &place).await?;
            print_json(&Itinerary::add_stop(trip, index(day), location)?)
        }
        Command::ReplaceStop {
            trip,
            day,
            stop,
            place,
        } => {
            let trip = read_trip(&trip)?;
            let location = LocationResolver::resolve_str(&places, &place).await?;
            print_json(&Itinerary::replace_stop(
                trip,
                index(day),
                index(stop),
                location,
            )?)
        }
        Command::RemoveStop { trip, day, stop } => {
            let trip = read_trip(&trip)?;
            print_json(&Itinerary::remove_stop(trip, index(day), index(stop))?)
        }
        Command::MoveStop {
            trip,
            day,
            from,
            to,
        } => {
            let trip = read_trip(&trip)?;
            let stops = &trip.day(index(day))?.stops;
            let stop_id = |position: u32| {
                stops.get(index(position)).map(|s| s.id).ok_or_else(|| {
                    TripPlannerError::validation(format!(
                        "Day {day} has no stop at position {position}"
                    ))
                })
            };
            let (active, over) = (stop_id(from)?, stop_id(to)?);
            print_json(&Itinerary::move_stop(trip, index(day), active, over)?)
        }
        Command::SetMembers { trip, members } => {
            let trip = read_trip(&trip)?;
            print_json(&Itinerary::set_members(trip, members))
        }
        Command::Relink { trip } => {
            let trip = read_trip(&trip)?;
            print_json(&Itinerary::relink(trip))
        }
        Command::Estimate { trip } => {
            let trip = read_trip(&trip)?;
            let estimator = MockRouteEstimator::new(config.estimator.clone());
            let estimate = estimator.calculate_trip(&trip).await?;
            print_json(&estimate.apply(trip))
        }
        Command::Segments { trip } => {
            let trip = read_trip(&trip)?;
            print_json(&derive_segments(&trip))
        }
        Command::Summary { trip, calculate } => {
            let mut trip = read_trip(&trip)?;
            if calculate {
                let estimator = MockRouteEstimator::new(config.estimator.clone());
                trip = estimator.calculate_trip(&trip).await?.apply(trip);
            }
            print!("{}", TripSummary::from(&trip));
            Ok(())
        }
        Command::Search { query } => {
            let results = places.search(&query).await?;
            if results.is_empty() {
                return Err(TripPlannerError::place_not_found(query).into());
            }
            print_json(&results)
        }
        Command::Save { trip } => {
            let trip = read_trip(&trip)?;
            let store = MockTripStore::new(config.store.clone());
            print_json(&store.save_trip(&trip).await?)
        }
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 1-based position from the command line to a 0-based index
fn index(position: u32) -> usize {
    position.saturating_sub(1) as usize
}

fn read_trip(source: &str) -> Result<Trip> {
    let raw = if source == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read trip from stdin")?
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read trip file: {source}"))?
    };
    let trip: Trip = serde_json::from_str(&raw).map_err(TripPlannerError::from)?;
    trip.validate()?;
    Ok(trip)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(TripPlannerError::from)?;
    println!("{json}");
    Ok(())
}

use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use tsl::cli::{Command, USAGE, parse_args};
use tsl::config::Settings;
use tsl::domain::Itinerary;
use tsl::lookup::{LookupError, TripLookup};
use tsl::render::render;
use tsl::travelplanner::{MockTravelPlanner, TravelPlannerClient};

/// Exit status for a bad command line.
const EXIT_USAGE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the itinerary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (origin, destination, format) = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Lookup {
            origin,
            destination,
            format,
        }) => (origin, destination, format),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let itinerary = match lookup(&settings, &origin, &destination).await {
        Ok(itinerary) => itinerary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match render(&itinerary, format) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to render itinerary: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the lookup against captured responses or the live API.
async fn lookup(
    settings: &Settings,
    origin: &str,
    destination: &str,
) -> Result<Itinerary, LookupError> {
    let config = &settings.travel_planner;

    if let Some(dir) = &settings.replay_dir {
        let mock = MockTravelPlanner::new(dir, config.capacity)?;
        return TripLookup::new(mock).lookup(origin, destination).await;
    }

    if config.api_key.is_empty() {
        warn!("SL_API_KEY not set; the API will reject the request");
    }
    let client = TravelPlannerClient::new(config.clone());
    TripLookup::new(client).lookup(origin, destination).await
}

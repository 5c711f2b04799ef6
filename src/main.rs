mod balloons;
mod flights;
mod geo;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::balloons::{clean_fixes, FeedClient};
use crate::flights::{find_nearby, OpenSkyClient};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "stratowatch")]
#[command(about = "Balloon constellation map with nearby-flight overlay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve { config: String },
    /// Fetch and print the cleaned constellation snapshot
    Balloons { config: String },
    /// One-shot nearby-flight lookup for a "lat,lon" reference point
    Nearby {
        config: String,
        coordinates: String,
        /// Override the configured distance threshold
        #[arg(long)]
        threshold_km: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Balloons { config } => balloons_snapshot(&config).await,
        Commands::Nearby {
            config,
            coordinates,
            threshold_km,
        } => nearby(&config, &coordinates, threshold_km).await,
    }
}

fn load_config(path: &str) -> Option<Config> {
    match Config::from_file(path) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            None
        }
    }
}

async fn serve(config_path: &str) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn balloons_snapshot(config_path: &str) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let feed = match FeedClient::new(config.balloons.feed_url.clone(), config.balloons.hours) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Feed client error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let raw = feed.snapshot().await;
    let raw_count = raw.len();
    let fixes = clean_fixes(raw);

    println!(
        "Constellation snapshot: {} fixes ({} dropped by cleaning)",
        fixes.len(),
        raw_count - fixes.len()
    );
    for (i, fix) in fixes.iter().enumerate() {
        println!(
            "  {}: ({:.4}, {:.4}) at {:.1} km, {}",
            i + 1,
            fix.latitude,
            fix.longitude,
            fix.altitude_km,
            fix.observed_at.to_rfc3339()
        );
    }
    ExitCode::SUCCESS
}

async fn nearby(config_path: &str, coordinates: &str, threshold_km: Option<f64>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let Some((latitude, longitude)) = geo::parse_coordinates(coordinates) else {
        eprintln!("Invalid coordinates (expected \"lat,lon\"): {}", coordinates);
        return ExitCode::FAILURE;
    };

    let client = match OpenSkyClient::new(
        config.opensky.api_url.clone(),
        config.opensky.credentials(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Aircraft API client error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let states = match client.states().await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error fetching aircraft states: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let threshold = threshold_km.unwrap_or(config.opensky.threshold_km);
    let flights = find_nearby(&states, latitude, longitude, threshold);

    if flights.is_empty() {
        println!(
            "No flights within {} km of ({}, {})",
            threshold, latitude, longitude
        );
        return ExitCode::SUCCESS;
    }

    println!(
        "{} flights within {} km of ({}, {}):",
        flights.len(),
        threshold,
        latitude,
        longitude
    );
    for flight in &flights {
        println!(
            "  {}: ({:.4}, {:.4}), {:.2} km away",
            flight.callsign, flight.latitude, flight.longitude, flight.distance_km
        );
    }
    ExitCode::SUCCESS
}

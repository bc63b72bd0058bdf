//! Route Globe - flight route viewer backend.
//!
//! Loads the airport catalog, builds the marker registry, and runs the
//! scheduler that keeps globe highlighting in sync with the current flight.
//! Navigation and refresh commands are read from stdin, standing in for the
//! UI buttons of a full viewer.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routeglobe_app::config::Config;
use routeglobe_app::display::TracingDisplay;
use routeglobe_app::scheduler::{Command, Scheduler};
use routeglobe_core::{AirportCatalog, HighlightEngine, MarkerRegistry};
use routeglobe_feed::{AviationClient, FlightFeed};

#[derive(Parser)]
#[command(name = "routeglobe", about = "Flight route viewer on a 3D globe")]
struct Args {
    /// Path to the allowed-airports dataset (overrides ROUTEGLOBE_AIRPORTS)
    #[arg(long)]
    airports: Option<PathBuf>,
    /// Flights to request per refresh (overrides ROUTEGLOBE_FLIGHT_LIMIT)
    #[arg(long)]
    limit: Option<u32>,
    /// Flight API access key (overrides ROUTEGLOBE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("routeglobe_app=info".parse()?)
                .add_directive("routeglobe_feed=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(path) = args.airports {
        config.airports_path = path;
    }
    if let Some(limit) = args.limit {
        config.flight_limit = limit;
    }
    if let Some(key) = args.api_key {
        config.api_key = key;
    }

    let catalog = match AirportCatalog::load(&config.airports_path) {
        Ok(catalog) => {
            tracing::info!(airports = catalog.len(), "airport catalog loaded");
            catalog
        }
        Err(err) => {
            // Not fatal: the viewer runs, but every lookup misses and every
            // refresh reports no matching routes.
            tracing::error!("airport catalog unavailable: {err}");
            AirportCatalog::default()
        }
    };

    let registry = MarkerRegistry::from_catalog(&catalog, config.globe_radius);
    let engine = HighlightEngine::new(registry, config.path_samples);
    let client = AviationClient::new(&config.api_url, &config.api_key);
    let feed = FlightFeed::new(client, &catalog);
    let scheduler = Scheduler::new(
        feed,
        engine,
        Box::new(TracingDisplay),
        Duration::from_millis(config.tick_interval_ms),
    );

    let (commands, receiver) = mpsc::channel(16);
    let scheduler_task = tokio::spawn(scheduler.run(receiver));

    println!("commands: r [limit] = refresh, n = next, p = previous, q = quit");
    let default_limit = config.flight_limit;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line, default_limit) {
            Some(command) => {
                let quit = command == Command::Quit;
                commands.send(command).await?;
                if quit {
                    break;
                }
            }
            None => println!("unknown command {line:?}; try r, n, p, or q"),
        }
    }

    drop(commands);
    scheduler_task.await?;
    Ok(())
}

fn parse_command(line: &str, default_limit: u32) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "n" | "next" => Some(Command::Next),
        "p" | "prev" | "previous" => Some(Command::Previous),
        "r" | "refresh" => {
            let limit = parts
                .next()
                .and_then(|value| value.parse().ok())
                .unwrap_or(default_limit);
            Some(Command::Refresh { limit })
        }
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

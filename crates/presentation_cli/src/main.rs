//! GeoPlant CLI
//!
//! Command-line client for the plant lookup server.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use clap::{Parser, Subcommand};
use domain::LookupResult;
use serde_json::{Value, json};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GeoPlant CLI
#[derive(Parser)]
#[command(name = "geoplant-cli")]
#[command(author, version, about = "GeoPlant plant lookup CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up common plants for a location
    ///
    /// Example: geoplant-cli lookup --latitude 45.0 --longitude -93.0
    Lookup {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000", env = "GEOPLANT_URL")]
        url: String,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Check server health
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000", env = "GEOPLANT_URL")]
        url: String,
    },
}

/// Server answer to a lookup
#[derive(Debug)]
enum LookupOutcome {
    Found(Value),
    Rejected(String),
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Join a base URL and a path without doubling the slash
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

async fn request_lookup(
    client: &reqwest::Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
) -> anyhow::Result<LookupOutcome> {
    let url = endpoint_url(base_url, "/api/plantDetail");
    debug!(%url, latitude, longitude, "Sending lookup");

    let resp = client
        .post(url)
        .json(&json!({ "latitude": latitude, "longitude": longitude }))
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if status.is_success() {
        Ok(LookupOutcome::Found(serde_json::from_str(&body)?))
    } else {
        Ok(LookupOutcome::Rejected(render::render_error(status, &body)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = reqwest::Client::new();

    match cli.command {
        Commands::Lookup {
            latitude,
            longitude,
            url,
            json,
        } => match request_lookup(&client, &url, latitude, longitude).await {
            Ok(LookupOutcome::Found(body)) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&body)?);
                } else {
                    let result: LookupResult = serde_json::from_value(body)?;
                    print!("{}", render::render_result(&result));
                }
            },
            Ok(LookupOutcome::Rejected(message)) => {
                eprintln!("❌ {message}");
                std::process::exit(1);
            },
            Err(e) => {
                eprintln!("❌ {}: {e}", render::ERROR_PREFIX);
                std::process::exit(1);
            },
        },

        Commands::Health { url } => {
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    println!("✅ Server is healthy");
                },
                Ok(resp) => {
                    eprintln!("❌ Server returned: {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    eprintln!("❌ Failed to connect: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}

//! # Wayfare Shell
//!
//! Command-line entry point that wires the client stores to concrete
//! backends and drives them the way the booking screens do.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use wayfare_core::domain::{CabinClass, Passengers};
use wayfare_infra::StorageBackend;

mod commands;
mod config;
mod state;
mod telemetry;

use commands::SearchArgs;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[derive(Parser)]
#[command(
    name = "wayfare",
    version,
    about = "Drive the Wayfare booking client from a terminal",
    long_about = "Runs the booking client's session and search stores against real storage.\n\
                  \n\
                  Every invocation restores the persisted session first, so `login` in one\n\
                  run is visible to `status` in the next.\n\
                  \n\
                  Environment Variables:\n\
                    STORAGE_BACKEND                  # memory | file | redis (default: file)\n\
                    STORAGE_PATH                     # Document path for the file backend\n\
                    REDIS_URL                        # Redis connection string\n\
                    AUTH_LOGIN_DELAY_MS              # Simulated sign-in latency\n\
                    AUTH_LOGOUT_DELAY_MS             # Simulated sign-out latency\n\
                    LOG_FORMAT                       # json for structured logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage backend override (memory|file|redis)
    #[arg(long, global = true)]
    storage: Option<StorageBackend>,

    /// Storage document path override (file backend)
    #[arg(long, global = true)]
    storage_path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current session
    Status,
    /// Sign in as the demo user
    Login,
    /// Sign out and clear the persisted session
    Logout,
    /// List airports, optionally filtered by name, city or code
    Airports {
        /// Substring to match
        query: Option<String>,
    },
    /// Fill in the search form and print the payload
    Search(SearchCommand),
}

#[derive(Args)]
struct SearchCommand {
    /// Origin airport code
    #[arg(long)]
    from: Option<String>,
    /// Destination airport code
    #[arg(long)]
    to: Option<String>,
    /// Round trip instead of one-way
    #[arg(long)]
    round_trip: bool,
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    depart: Option<NaiveDate>,
    /// Return date (YYYY-MM-DD)
    #[arg(long = "return")]
    return_date: Option<NaiveDate>,
    #[arg(long, default_value_t = 1)]
    adults: u32,
    #[arg(long, default_value_t = 0)]
    children: u32,
    #[arg(long, default_value_t = 0)]
    infants: u32,
    /// Cabin class (economy|premium-economy|business|first)
    #[arg(long, default_value = "economy")]
    class: CabinClass,
    /// Promo code
    #[arg(long)]
    promo: Option<String>,
    /// Restrict results to the home airline
    #[arg(long)]
    airline_only: bool,
    /// Swap origin and destination before submitting
    #[arg(long)]
    swap: bool,
}

impl From<SearchCommand> for SearchArgs {
    fn from(cmd: SearchCommand) -> Self {
        Self {
            from: cmd.from,
            to: cmd.to,
            round_trip: cmd.round_trip,
            depart: cmd.depart,
            return_date: cmd.return_date,
            passengers: Passengers::new(cmd.adults, cmd.children, cmd.infants),
            class: cmd.class,
            promo: cmd.promo,
            airline_only: cmd.airline_only,
            swap: cmd.swap,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().with_overrides(cli.storage, cli.storage_path);

    let state = AppState::new(&config).await?;
    state.auth.rehydrate().await;

    let result = match cli.command {
        Command::Status => commands::status(&state, cli.json).await,
        Command::Login => commands::login(&state, cli.json).await,
        Command::Logout => commands::logout(&state, cli.json).await,
        Command::Airports { query } => {
            commands::airports(&state, query.as_deref(), cli.json).await
        }
        Command::Search(cmd) => commands::search(&state, &cmd.into()).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}

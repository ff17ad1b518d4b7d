mod config;
mod google;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use holiday_core::{HolidayStore, SyncOutcome, Timestamp, TracingObserver, sync_locale};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::google::GoogleCalendarClient;

#[derive(Parser)]
#[command(name = "holiday-sync")]
#[command(about = "Sync public holidays from Google Calendar into per-year JSON files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Holiday calendar locale (e.g. "id.indonesian", "en.usa")
    #[arg(long, global = true)]
    code: Option<String>,

    /// Directory holding {code}/meta.json and {code}/{year}.json
    #[arg(long, global = true)]
    public_dir: Option<PathBuf>,

    /// Config file (defaults to ./holiday-sync.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the holiday calendar and rewrite year files if it changed (default)
    Sync,
    /// Create {code}/meta.json so the first sync writes every year
    Init {
        /// Initial timestamp (YYYY-MM-DDTHH:MM:SS.ffffffZ), defaults to the Unix epoch
        #[arg(long)]
        updated: Option<String>,
    },
    /// Print a stored year file
    Show {
        /// Year to print, e.g. 2024
        year: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.code, cli.public_dir);

    match cli.command.unwrap_or(Commands::Sync) {
        Commands::Sync => cmd_sync(&config).await,
        Commands::Init { updated } => cmd_init(&config, updated.as_deref()),
        Commands::Show { year } => cmd_show(&config, &year),
    }
}

async fn cmd_sync(config: &AppConfig) -> Result<()> {
    let store = HolidayStore::new(&config.public_dir);
    let client = GoogleCalendarClient::new(config)?;

    let outcome = sync_locale(&client, &store, &config.code, &TracingObserver)
        .await
        .with_context(|| format!("Sync failed for {}", config.code))?;

    match outcome {
        SyncOutcome::Unchanged { stored } => {
            tracing::info!(code = %config.code, %stored, "up to date");
        }
        SyncOutcome::Updated {
            updated,
            years_written,
        } => {
            tracing::info!(
                code = %config.code,
                %updated,
                years = years_written.len(),
                "holidays updated"
            );
        }
    }

    Ok(())
}

fn cmd_init(config: &AppConfig, updated: Option<&str>) -> Result<()> {
    let updated = match updated {
        Some(value) => value.parse::<Timestamp>()?,
        None => Timestamp::epoch(),
    };

    let store = HolidayStore::new(&config.public_dir);
    let path = store.init_meta(&config.code, updated, &TracingObserver)?;

    tracing::info!(code = %config.code, "initialized {}", path.display());

    Ok(())
}

fn cmd_show(config: &AppConfig, year: &str) -> Result<()> {
    let store = HolidayStore::new(&config.public_dir);
    let holidays = store
        .read_year(&config.code, year)
        .with_context(|| format!("No holidays stored for {} in {}", config.code, year))?;

    for (date, holiday) in &holidays {
        if holiday.description.is_empty() {
            println!("{}  {}", date, holiday.summary);
        } else {
            println!("{}  {} ({})", date, holiday.summary, holiday.description);
        }
    }

    Ok(())
}

//! USAJobs importer CLI
//!
//! Local execution entry point: reads a feed file, normalizes its entries
//! and writes the batch to a JSON file or stdout.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use importer::{
    error::{AppError, Result},
    models::{Config, RawFeed},
    normalize::normalize_location,
    pipeline::{self, RecordExtractor},
    storage::{JsonFileSink, MemorySink},
};

/// USAJobs position openings importer
#[derive(Parser, Debug)]
#[command(name = "importer", version, about = "USAJobs Feed Importer")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a feed file
    Import {
        /// Path to the USAJobs XML feed
        #[arg(long)]
        feed: PathBuf,

        /// Write records to this JSON file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Date TTLs are computed from (default: today, YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the normalized form of location strings
    Normalize {
        #[arg(required = true)]
        locations: Vec<String>,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, configured: &str) {
    let level = if verbose { "debug" } else { configured };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    init_logging(cli.verbose, &config.logging.level);

    match cli.command {
        Command::Import {
            feed,
            output,
            today,
        } => {
            config.validate()?;

            let today = today.unwrap_or_else(|| Local::now().date_naive());
            log::info!("Loading feed {} (today = {})", feed.display(), today);

            let raw_feed = RawFeed::load(&feed)?;
            let extractor = RecordExtractor::new(&config.importer, today);

            match output {
                Some(path) => {
                    let mut sink = JsonFileSink::new(path);
                    pipeline::run_import(&raw_feed, &extractor, &mut sink)?;
                }
                None => {
                    let mut sink = MemorySink::default();
                    pipeline::run_import(&raw_feed, &extractor, &mut sink)?;
                    let records = sink
                        .last_batch()
                        .ok_or_else(|| AppError::import("memory", "no batch recorded"))?;
                    println!("{}", serde_json::to_string_pretty(records)?);
                }
            }
        }

        Command::Normalize { locations } => {
            for location in locations {
                println!("{}", normalize_location(&location));
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK (type = {}, source = {}, max locations = {})",
                config.importer.record_type,
                config.importer.source,
                config.importer.max_locations
            );
        }
    }

    Ok(())
}

//! `slots` CLI — list bookable appointment start times from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # All 30-minute slots for a working-hours file (JSON or TOML)
//! slots list -c schedule.json
//!
//! # 45-minute appointments probed every 15 minutes, as a JSON array
//! slots list -c schedule.toml --duration 45 --step 15 --format json
//!
//! # Add reservations on top of the ones in the file
//! slots list -c schedule.json --reserved 09:00,09:30
//!
//! # Config from stdin (JSON)
//! echo '{"start":"08:00","end":"12:00"}' | slots list
//!
//! # Earliest bookable time only
//! slots first -c schedule.json
//!
//! # Show how reservations merge into occupied runs
//! slots runs -c schedule.json --step 15
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use slot_engine::{ScheduleConfig, SlotQuery};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "List bookable appointment slots around lunch and reservations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available start time
    List {
        #[command(flatten)]
        source: ConfigSource,
        #[command(flatten)]
        query: QueryArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the earliest available start time
    First {
        #[command(flatten)]
        source: ConfigSource,
        #[command(flatten)]
        query: QueryArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print reserved blocks merged into occupied runs
    Runs {
        #[command(flatten)]
        source: ConfigSource,
        /// Reserved block length in minutes
        #[arg(long, default_value_t = SlotQuery::default().step, allow_negative_numbers = true)]
        step: i64,
    },
}

#[derive(Args)]
struct ConfigSource {
    /// Working-hours file, `.toml` or JSON (reads JSON from stdin if omitted)
    #[arg(short, long)]
    config: Option<String>,
    /// Comma-separated extra reserved start times (HH:MM)
    #[arg(long)]
    reserved: Option<String>,
}

#[derive(Args)]
struct QueryArgs {
    /// Appointment length in minutes
    #[arg(short, long, default_value_t = SlotQuery::default().duration, allow_negative_numbers = true)]
    duration: i64,
    /// Probe granularity in minutes
    #[arg(short, long, default_value_t = SlotQuery::default().step, allow_negative_numbers = true)]
    step: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List {
            source,
            query,
            format,
        } => {
            let config = load_config(&source)?;
            let slots = slot_engine::compute_available_slots(&config, query.duration, query.step)
                .context("Failed to compute available slots")?;

            match format {
                Format::Text if slots.is_empty() => println!("no available time"),
                Format::Text => {
                    for slot in &slots {
                        println!("{}", slot);
                    }
                }
                Format::Json => println!("{}", serde_json::to_string(&slots)?),
            }
        }
        Commands::First {
            source,
            query,
            format,
        } => {
            let config = load_config(&source)?;
            let first = slot_engine::find_first_available_slot(&config, query.duration, query.step)
                .context("Failed to compute available slots")?;

            match format {
                Format::Text => println!("{}", first.as_deref().unwrap_or("no available time")),
                Format::Json => println!("{}", serde_json::to_string(&first)?),
            }
        }
        Commands::Runs { source, step } => {
            let config = load_config(&source)?;
            let schedule = config.parse().context("Invalid schedule")?;
            let runs = slot_engine::merge_reserved(&schedule.reserved, step)
                .context("Failed to merge reserved blocks")?;

            for run in &runs {
                println!("{}", run);
            }
        }
    }

    Ok(())
}

/// Read the config from `--config` or stdin, then append any `--reserved` times.
fn load_config(source: &ConfigSource) -> Result<ScheduleConfig> {
    let mut config = match source.config.as_deref() {
        Some(path) => ScheduleConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            ScheduleConfig::from_json_str(&buf).context("Failed to parse config from stdin")?
        }
    };

    if let Some(raw) = source.reserved.as_deref() {
        config.reserved.extend(parse_reserved_list(raw));
    }

    tracing::debug!(
        start = %config.start,
        end = %config.end,
        reserved = config.reserved.len(),
        "loaded schedule config"
    );

    Ok(config)
}

/// Split `09:00, 09:30,,10:00` into trimmed, non-empty entries.
fn parse_reserved_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

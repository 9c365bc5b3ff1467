//! PRTG Sensor Deleter CLI
//!
//! One-shot command that deletes PRTG sensors by exact name.

use std::path::PathBuf;

use clap::Parser;
use prtg_sensor_deleter::logging::init_logging;
use prtg_sensor_deleter::{load_config, run};
use tracing::Level;

#[derive(Parser)]
#[command(name = "prtg-sensor-deleter")]
#[command(about = "Delete PRTG sensors by exact name")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Directory for the run's log file (overrides config file)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    config.resolve_secrets();
    config.validate()?;

    if let Some(log_dir) = args.log_dir {
        config.log_dir = log_dir;
    }

    // Held until main returns so the log file is flushed on every path
    let log_guard = init_logging(&config.log_dir, args.log_level)?;
    tracing::debug!(
        "Loaded configuration from {:?}, logging to {:?}",
        args.config,
        log_guard.path()
    );

    match run(&config).await {
        Ok(summary) => {
            tracing::debug!(
                "Run finished with {} deletions and {} errors",
                summary.deletions,
                summary.errors
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Deletion job failed: {}", e);
            Err(e.into())
        }
    }
}

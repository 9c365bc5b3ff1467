//! Log sink: a timestamped file per run, mirrored to the console

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, time::ChronoLocal};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{DeleterError, Result};

const TIMESTAMP_FORMAT: &str = "%m-%d-%Y %I:%M:%S %p";

/// Keeps the file writer alive. Dropping it flushes and closes the log file.
pub struct LogGuard {
    path: PathBuf,
    _worker: WorkerGuard,
}

impl LogGuard {
    /// Path of the log file for this run
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Log file name for a run started at `started`
pub fn log_file_name(started: &NaiveDateTime) -> String {
    format!("deletion_log-{}.log", started.format("%Y-%m-%d_%I-%M-%S-%p"))
}

/// Install the global subscriber writing to stdout and a new file in `log_dir`
pub fn init_logging(log_dir: &Path, level: Level) -> Result<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_name = log_file_name(&Local::now().naive_local());
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&file_name)
        .build(log_dir)
        .map_err(|e| DeleterError::Logging(format!("creating {}: {}", file_name, e)))?;
    let (file_writer, worker) = tracing_appender::non_blocking(appender);

    let console_layer = fmt::layer()
        .with_target(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_writer(std::io::stdout);
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| DeleterError::Logging(e.to_string()))?;

    Ok(LogGuard {
        path: log_dir.join(file_name),
        _worker: worker,
    })
}

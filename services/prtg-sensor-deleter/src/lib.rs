//! PRTG Sensor Deleter
//!
//! Lists every sensor on a PRTG server, deletes the ones whose name matches a
//! configured target exactly, and reports how many deletions succeeded.

pub mod auth;
pub mod config;
pub mod error;
pub mod io;
pub mod job;
pub mod logging;
pub mod prtg_client;
pub mod sensor;
pub mod table;

pub use config::{load_config, Config};
pub use error::{DeleterError, Result};
pub use job::{DeletionJob, DeletionOutcome, RunSummary};

use std::sync::Arc;

use crate::io::{HttpClient, ReqwestHttpClient};

/// Run the deletion job against the configured PRTG server
pub async fn run(config: &Config) -> Result<RunSummary> {
    run_with_client(config, Arc::new(ReqwestHttpClient::new())).await
}

/// Run the deletion job using the given HTTP client
pub async fn run_with_client(config: &Config, http: Arc<dyn HttpClient>) -> Result<RunSummary> {
    config.validate()?;
    tracing::debug!(
        "Deleting sensors named '{}' from {}",
        config.target_sensor_name,
        config.base_url()
    );
    DeletionJob::new(config, http).run().await
}

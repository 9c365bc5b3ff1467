//! Deletion job: fetch the sensor listing, match by name, delete matches

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::io::{HttpClient, HttpResponse};
use crate::prtg_client::PrtgClient;
use crate::sensor::{sensors_from_table, SensorRecord};
use crate::table::{remove_raw_columns, Table};

/// Result of one delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted {
        sensor: SensorRecord,
    },
    Failed {
        sensor: SensorRecord,
        status: u16,
        reason: String,
    },
}

impl DeletionOutcome {
    fn from_response(sensor: SensorRecord, response: &HttpResponse) -> Self {
        if response.status == 200 {
            DeletionOutcome::Deleted { sensor }
        } else {
            DeletionOutcome::Failed {
                sensor,
                status: response.status,
                reason: response.reason.clone(),
            }
        }
    }

    pub fn sensor(&self) -> &SensorRecord {
        match self {
            DeletionOutcome::Deleted { sensor } | DeletionOutcome::Failed { sensor, .. } => sensor,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, DeletionOutcome::Deleted { .. })
    }
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionOutcome::Deleted { sensor } => {
                write!(f, "Sensor -- {} -- was successfully deleted from PRTG!", sensor)
            }
            DeletionOutcome::Failed {
                sensor,
                status,
                reason,
            } => write!(
                f,
                "Error deleting sensor -- {} -- Caused by: {} {}",
                sensor, status, reason
            ),
        }
    }
}

/// Counters reported when the job finishes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub deletions: usize,
    pub errors: usize,
    pub outcomes: Vec<DeletionOutcome>,
}

impl RunSummary {
    fn record(&mut self, outcome: DeletionOutcome) -> &DeletionOutcome {
        if outcome.is_deleted() {
            self.deletions += 1;
        } else {
            self.errors += 1;
        }
        self.outcomes.push(outcome);
        &self.outcomes[self.outcomes.len() - 1]
    }
}

/// Deletes every sensor whose name equals the configured target
pub struct DeletionJob {
    client: PrtgClient,
    target_sensor_name: String,
}

impl DeletionJob {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            client: PrtgClient::new(config, http),
            target_sensor_name: config.target_sensor_name.clone(),
        }
    }

    /// Run the job once.
    ///
    /// Transport failures and malformed listings end the run with an error.
    /// A delete request answered with anything but 200 is counted and logged,
    /// and the run moves on to the next sensor.
    pub async fn run(&self) -> crate::Result<RunSummary> {
        tracing::info!("Retrieving all sensors from PRTG...");
        let body = self.client.list_sensors().await?;
        tracing::info!("All sensors retrieved from PRTG!");

        tracing::info!("Formatting response from PRTG...");
        let table = remove_raw_columns(Table::parse(&body)?);
        let sensors = sensors_from_table(&table)?;
        tracing::info!(
            "Response from PRTG has been formatted! ({} sensors)",
            sensors.len()
        );

        let mut summary = RunSummary::default();
        for sensor in sensors {
            if sensor.name != self.target_sensor_name {
                continue;
            }

            tracing::info!("Deleting sensor [{}]...", sensor.id);
            let response = self.client.delete_sensor(sensor.id).await?;
            let outcome = summary.record(DeletionOutcome::from_response(sensor, &response));
            if outcome.is_deleted() {
                tracing::info!("{}", outcome);
            } else {
                tracing::error!("{}", outcome);
            }
        }

        tracing::info!("");
        tracing::info!("===========================================================");
        tracing::info!("");
        tracing::info!("Deletion job completed.");
        tracing::info!("Total sensor deletions: {}", summary.deletions);
        tracing::info!("Total sensor deletion errors: {}", summary.errors);
        if summary.deletions > 0 {
            tracing::info!("PRTG may need a restart before the deletions show up everywhere.");
        }

        Ok(summary)
    }
}

//! PRTG HTTP API client

use std::sync::Arc;

use crate::auth::Credentials;
use crate::config::Config;
use crate::io::{HttpClient, HttpResponse};

/// Columns requested from the sensor table
pub const SENSOR_COLUMNS: &str = "probe,group,device,name,objid,type";

/// Upper bound on rows returned by one table query
pub const MAX_SENSORS: u32 = 50000;

/// Client for the PRTG table and object-deletion endpoints
pub struct PrtgClient {
    base_url: String,
    credentials: Credentials,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PrtgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrtgClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl PrtgClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url().to_string();
        tracing::debug!("Created PrtgClient for {}", base_url);

        Self {
            base_url,
            credentials: Credentials::from_config(config),
            http,
        }
    }

    /// Authenticated URL listing every sensor as CSV
    pub fn sensor_list_url(&self) -> String {
        let url = format!(
            "{}/api/table.xml?content=sensors&output=csvtable&columns={}&count={}&username={}",
            self.base_url,
            SENSOR_COLUMNS,
            MAX_SENSORS,
            self.credentials.username()
        );
        self.credentials.append_to(&url)
    }

    /// Authenticated URL deleting the object with the given ID
    pub fn delete_url(&self, id: u64) -> String {
        let url = format!(
            "{}/api/deleteobject.htm?id={}&approve=1&username={}",
            self.base_url,
            id,
            self.credentials.username()
        );
        self.credentials.append_to(&url)
    }

    /// Fetch the raw sensor listing. The response status is not inspected.
    pub async fn list_sensors(&self) -> crate::Result<String> {
        let response = self.http.get(&self.sensor_list_url()).await?;
        tracing::debug!(
            "Sensor listing returned status {} ({} bytes)",
            response.status,
            response.body.len()
        );
        Ok(response.body)
    }

    /// Ask PRTG to delete a sensor. Any HTTP response is returned as-is.
    pub async fn delete_sensor(&self, id: u64) -> crate::Result<HttpResponse> {
        self.http.get(&self.delete_url(id)).await
    }
}

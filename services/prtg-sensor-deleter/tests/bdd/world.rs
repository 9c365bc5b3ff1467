//! BDD test world for the PRTG sensor deleter

use std::sync::{Arc, Mutex};

use cucumber::World;
use prtg_sensor_deleter::io::{HttpClient, HttpResponse};
use prtg_sensor_deleter::RunSummary;

/// Fake PRTG: serves a fixed listing and answers every delete with one status
#[derive(Debug, Default)]
pub struct RecordingClient {
    pub listing: String,
    pub delete_status: u16,
    pub requests: Mutex<Vec<String>>,
}

impl RecordingClient {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn delete_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|url| url.contains("/api/deleteobject.htm"))
            .collect()
    }
}

#[async_trait::async_trait]
impl HttpClient for RecordingClient {
    async fn get(&self, url: &str) -> prtg_sensor_deleter::Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        if url.contains("/api/table.xml") {
            Ok(HttpResponse::new(200, self.listing.clone()))
        } else {
            Ok(HttpResponse::new(self.delete_status, ""))
        }
    }
}

#[derive(Debug, World)]
pub struct DeleterWorld {
    pub listing: String,
    pub target_sensor_name: String,
    pub password: String,
    pub passhash: String,
    pub delete_status: u16,

    pub client: Option<Arc<RecordingClient>>,
    pub result: Option<prtg_sensor_deleter::Result<RunSummary>>,
}

impl Default for DeleterWorld {
    fn default() -> Self {
        Self {
            listing: String::new(),
            target_sensor_name: "Ping".to_string(),
            password: "pw".to_string(),
            passhash: String::new(),
            delete_status: 200,
            client: None,
            result: None,
        }
    }
}

impl DeleterWorld {
    pub fn client(&self) -> &RecordingClient {
        self.client.as_ref().expect("job has not run")
    }

    pub fn summary(&self) -> &RunSummary {
        match self.result.as_ref().expect("job has not run") {
            Ok(summary) => summary,
            Err(e) => panic!("job failed: {e}"),
        }
    }
}

//! BDD step definitions for the deletion feature

use std::path::PathBuf;
use std::sync::Arc;

use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use prtg_sensor_deleter::{run_with_client, Config};

use crate::world::{DeleterWorld, RecordingClient};

/// Render a data table as PRTG would, each column followed by its `(RAW)` twin
fn listing_from_table(step: &Step) -> String {
    let table = step.table.as_ref().expect("step needs a data table");
    let mut lines = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .flat_map(|cell| {
                let raw = if index == 0 {
                    format!("{}(RAW)", cell)
                } else {
                    cell.clone()
                };
                [format!("\"{}\"", cell), format!("\"{}\"", raw)]
            })
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\r\n")
}

#[given("PRTG lists the sensors:")]
fn prtg_lists_sensors(world: &mut DeleterWorld, step: &Step) {
    world.listing = listing_from_table(step);
}

#[given(expr = "PRTG returns the listing {string}")]
fn prtg_returns_listing(world: &mut DeleterWorld, listing: String) {
    world.listing = listing;
}

#[given(expr = "the target sensor name is {string}")]
fn target_sensor_name(world: &mut DeleterWorld, name: String) {
    world.target_sensor_name = name;
}

#[given(expr = "delete requests are answered with status {int}")]
fn delete_status(world: &mut DeleterWorld, status: u16) {
    world.delete_status = status;
}

#[given(expr = "the password is {string} and the passhash is {string}")]
fn credentials(world: &mut DeleterWorld, password: String, passhash: String) {
    world.password = password;
    world.passhash = passhash;
}

#[when("the deletion job runs")]
async fn deletion_job_runs(world: &mut DeleterWorld) {
    let client = Arc::new(RecordingClient {
        listing: world.listing.clone(),
        delete_status: world.delete_status,
        ..Default::default()
    });
    let config = Config {
        server_url: "http://prtg.test".to_string(),
        username: "prtgadmin".to_string(),
        password: world.password.clone(),
        passhash: world.passhash.clone(),
        target_sensor_name: world.target_sensor_name.clone(),
        log_dir: PathBuf::from("."),
    };

    world.result = Some(run_with_client(&config, client.clone()).await);
    world.client = Some(client);
}

#[then(expr = "{int} delete request(s) should be issued")]
fn delete_request_count(world: &mut DeleterWorld, expected: usize) {
    assert_eq!(world.client().delete_requests().len(), expected);
}

#[then(expr = "a delete request should be issued for sensor {int}")]
fn delete_issued_for(world: &mut DeleterWorld, id: u64) {
    let prefix = format!("http://prtg.test/api/deleteobject.htm?id={}&", id);
    let matching = world
        .client()
        .delete_requests()
        .into_iter()
        .filter(|url| url.starts_with(&prefix))
        .count();
    assert_eq!(matching, 1, "expected exactly one delete for sensor {id}");
}

#[then(expr = "the summary should show {int} deletion(s) and {int} error(s)")]
fn summary_counts(world: &mut DeleterWorld, deletions: usize, errors: usize) {
    let summary = world.summary();
    assert_eq!(summary.deletions, deletions);
    assert_eq!(summary.errors, errors);
}

#[then(expr = "the failure message should contain {string}")]
fn failure_message_contains(world: &mut DeleterWorld, text: String) {
    let failures: Vec<String> = world
        .summary()
        .outcomes
        .iter()
        .filter(|outcome| !outcome.is_deleted())
        .map(|outcome| outcome.to_string())
        .collect();
    assert!(
        failures.iter().any(|message| message.contains(&text)),
        "{failures:?}"
    );
}

#[then(expr = "every request URL should end with {string}")]
fn every_url_ends_with(world: &mut DeleterWorld, suffix: String) {
    let requests = world.client().requests();
    assert!(!requests.is_empty());
    for url in requests {
        assert!(url.ends_with(&suffix), "{url}");
    }
}

#[then(expr = "no request URL should contain {string}")]
fn no_url_contains(world: &mut DeleterWorld, text: String) {
    for url in world.client().requests() {
        assert!(!url.contains(&text), "{url}");
    }
}

#[then("the run should fail with a malformed listing error")]
fn run_fails_malformed(world: &mut DeleterWorld) {
    let result = world.result.as_ref().expect("job has not run");
    match result {
        Err(prtg_sensor_deleter::DeleterError::Parse(_)) => {}
        other => panic!("expected a parse error, got {other:?}"),
    }
}

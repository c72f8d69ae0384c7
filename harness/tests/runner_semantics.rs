//! Execution-engine semantics
//!
//! A failed expectation is local to its step: the run continues, the failed
//! step's fixture writes are suppressed, and downstream dependents surface a
//! missing-fixture error (harness bug) instead of an expectation mismatch
//! (server bug).

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use common::spawn_target;
use harness::{
    ExpectedOutcome, FixtureState, IdSource, LifecycleRunner, Operation, Payload, Priority,
    ResourceClient, Step, StepError, StepOutcome,
};
use serde_json::json;
use shared::{Book, HarnessConfig};

fn valid_book(id: i64) -> Payload {
    Payload::resource(&Book::new(id, Some("Runner Probe"), Some("desc"), Some(50), Some("ex"), Some("2020-01-01T00:00:00Z")))
}

fn invalid_book() -> Payload {
    Payload::resource(&Book::new(0, None, Some("no title"), Some(50), Some("ex"), Some("2020-01-01T00:00:00Z")))
}

#[tokio::test]
async fn a_failed_step_does_not_stop_the_run() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    let steps = vec![
        // Deliberately wrong expectation: the server rejects this payload.
        Step::new(
            Priority::P1,
            "create without a title, wrongly expecting success",
            Operation::Create(invalid_book()),
            ExpectedOutcome::status(201),
        ),
        Step::new(
            Priority::P2,
            "list still runs after the failure",
            Operation::ListAll,
            ExpectedOutcome::status(200).non_empty_array(),
        ),
    ];

    let report = runner.run("failure-isolation", &steps, &mut fixtures).await;

    assert_eq!(report.failed(), 1);
    assert_eq!(report.passed(), 1);
    assert_matches!(report.steps[0].outcome, StepOutcome::Failed(_));
    assert_matches!(report.steps[1].outcome, StepOutcome::Passed);
}

#[tokio::test]
async fn a_failed_step_never_publishes_its_fixture_writes() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    let steps = vec![
        Step::new(
            Priority::P1,
            "create that fails its expectation",
            Operation::Create(invalid_book()),
            ExpectedOutcome::status(201),
        )
        .save_field("createdBookId", "id"),
        Step::new(
            Priority::P2,
            "read depending on the suppressed fixture",
            Operation::GetById(IdSource::Fixture("createdBookId")),
            ExpectedOutcome::status(200),
        ),
    ];

    let report = runner.run("fixture-suppression", &steps, &mut fixtures).await;

    assert_matches!(report.steps[0].outcome, StepOutcome::Failed(_));
    assert_matches!(
        &report.steps[1].outcome,
        StepOutcome::Error(StepError::MissingFixture { name }) if name == "createdBookId"
    );
    assert!(fixtures.is_empty());
}

#[tokio::test]
async fn a_passing_step_publishes_fixtures_for_later_steps() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    let steps = vec![
        Step::new(
            Priority::P1,
            "create a book",
            Operation::Create(valid_book(9001)),
            ExpectedOutcome::status(201),
        )
        .save_field("createdBookId", "id"),
        Step::new(
            Priority::P1,
            "read it back by the recorded id",
            Operation::GetById(IdSource::Fixture("createdBookId")),
            ExpectedOutcome::status(200).field_equals("title", "Runner Probe"),
        ),
        Step::new(
            Priority::P1,
            "delete it by the recorded id",
            Operation::Delete(IdSource::Fixture("createdBookId")),
            ExpectedOutcome::status_one_of(&[200, 204]),
        ),
    ];

    let report = runner.run("fixture-threading", &steps, &mut fixtures).await;

    assert!(report.is_success(), "unexpected outcomes:\n{}", report);
    assert_eq!(fixtures.id("createdBookId").unwrap().as_str(), "9001");
}

#[tokio::test]
async fn fixture_state_is_reset_at_the_start_of_every_run() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);
    let runner = LifecycleRunner::new(&client);

    let mut fixtures = FixtureState::new();
    fixtures.set("leftover", json!(12345));

    let steps = vec![Step::new(
        Priority::P1,
        "read a fixture from a previous suite",
        Operation::GetById(IdSource::Fixture("leftover")),
        ExpectedOutcome::status(200),
    )];

    let report = runner.run("reset-semantics", &steps, &mut fixtures).await;

    // The stale value must not leak in; the read fails as a harness error.
    assert_matches!(
        &report.steps[0].outcome,
        StepOutcome::Error(StepError::MissingFixture { name }) if name == "leftover"
    );
}

#[tokio::test]
async fn transport_failure_is_an_error_on_the_affected_step_only() {
    // Nothing listens on port 9; every call fails at the transport layer.
    let config = HarnessConfig::from_base_url("http://127.0.0.1:9")
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    let client = ResourceClient::books(&config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    let steps = vec![
        Step::new(
            Priority::P1,
            "list against an unreachable server",
            Operation::ListAll,
            ExpectedOutcome::status(200),
        ),
        Step::new(
            Priority::P2,
            "second step still executes",
            Operation::GetById(IdSource::from(1)),
            ExpectedOutcome::status(200),
        ),
    ];

    let report = runner.run("transport-errors", &steps, &mut fixtures).await;

    assert_eq!(report.errors(), 2);
    assert_eq!(report.failed(), 0);
    assert_matches!(report.steps[0].outcome, StepOutcome::Error(StepError::Transport { .. }));
    assert_matches!(report.steps[1].outcome, StepOutcome::Error(StepError::Transport { .. }));
}

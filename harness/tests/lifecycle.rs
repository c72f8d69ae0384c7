//! End-to-end suite runs against the in-process mock API
//!
//! Covers the ordered lifecycle flows and the cross-call consistency
//! properties: create-then-read, update-then-read, list idempotence and
//! duplicate-id conflicts.

mod common;

use common::spawn_target;
use harness::{suites, Payload, ResourceClient, ResourceId};
use serde_json::Value;
use shared::{Author, Book};

#[tokio::test]
async fn authors_lifecycle_passes_against_the_mock_api() {
    let (_server, config) = spawn_target().await;

    let reports = suites::run_suite("authors-lifecycle", &config).await.unwrap();
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert!(report.is_success(), "unexpected outcomes:\n{}", report);
    assert!(!report.has_blocking_failures());
}

#[tokio::test]
async fn books_lifecycle_passes_against_the_mock_api() {
    let (_server, config) = spawn_target().await;

    let reports = suites::run_suite("books-lifecycle", &config).await.unwrap();
    let report = &reports[0];

    assert!(report.is_success(), "unexpected outcomes:\n{}", report);
}

#[tokio::test]
async fn the_full_suite_run_has_no_failures() {
    let (_server, config) = spawn_target().await;

    let reports = suites::run_suite("all", &config).await.unwrap();
    assert_eq!(reports.len(), 4);

    for report in &reports {
        assert!(report.is_success(), "suite '{}' had outcomes:\n{}", report.suite, report);
    }
}

#[tokio::test]
async fn unknown_suite_names_are_rejected_before_any_call() {
    let (_server, config) = spawn_target().await;

    let error = suites::run_suite("nonsense", &config).await.unwrap_err();
    assert!(error.to_string().contains("Unknown suite"));
}

#[tokio::test]
async fn create_then_read_returns_the_created_fields() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::authors(&config);

    let author = Author::new(6001, Some("TC02 Happy Path"), Some("Author bio"), Some("1980-01-01"));
    let created = client.create(&Payload::resource(&author)).await.unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.field("name"), Some(Value::from("TC02 Happy Path")));

    let fetched = client.get_by_id(&ResourceId::from(6001)).await.unwrap();
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.field("name"), Some(Value::from("TC02 Happy Path")));
    assert_eq!(fetched.field("bio"), Some(Value::from("Author bio")));
    assert_eq!(fetched.field("birthDate"), Some(Value::from("1980-01-01")));
}

#[tokio::test]
async fn update_then_read_reflects_every_updated_field() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);

    let book = Book::new(8001, Some("Before"), Some("Original"), Some(100), Some("ex"), Some("2020-01-01T00:00:00Z"));
    assert_eq!(client.create(&Payload::resource(&book)).await.unwrap().status, 201);

    let updated = Book::new(8001, Some("After"), Some("Changed"), Some(150), Some("ex2"), Some("2021-01-01T00:00:00Z"));
    let response = client.update(&ResourceId::from(8001), &Payload::resource(&updated)).await.unwrap();
    assert_eq!(response.status, 200);

    let fetched = client.get_by_id(&ResourceId::from(8001)).await.unwrap();
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.field("title"), Some(Value::from("After")));
    assert_eq!(fetched.field("description"), Some(Value::from("Changed")));
    assert_eq!(fetched.field("pageCount"), Some(Value::from(150)));
}

#[tokio::test]
async fn list_all_is_idempotent_without_intervening_mutation() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);

    let ids = |response: &harness::ApiResponse| -> Vec<i64> {
        match response.json() {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.get("id").and_then(Value::as_i64))
                .collect(),
            _ => panic!("list body was not an array"),
        }
    };

    let first = client.list_all().await.unwrap();
    let second = client.list_all().await.unwrap();

    assert_eq!(first.status, 200);
    assert_eq!(second.status, 200);
    assert_eq!(ids(&first), ids(&second));
}

#[tokio::test]
async fn duplicate_book_id_conflicts_on_the_second_create() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);

    let first = Book::new(5001, Some("TC02 Happy Path"), Some("Valid Book"), Some(120), Some("Excerpt"), Some("2023-01-01T00:00:00Z"));
    let second = Book::new(5001, Some("TC26 Duplicate"), Some("Duplicate test"), Some(200), Some("Excerpt"), Some("2022-12-01T00:00:00Z"));

    assert_eq!(client.create(&Payload::resource(&first)).await.unwrap().status, 201);
    assert_eq!(client.create(&Payload::resource(&second)).await.unwrap().status, 409);
}

#[tokio::test]
async fn missing_book_title_is_rejected() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);

    let book = Book::new(6002, None, Some("Missing title"), Some(150), Some("Excerpt"), Some("2022-03-01T00:00:00Z"));
    let response = client.create(&Payload::resource(&book)).await.unwrap();

    assert_eq!(response.status, 400);
}

#[tokio::test]
async fn special_character_id_is_rejected_by_the_server() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::books(&config);

    let response = client.get_by_id(&ResourceId::from("!@#%")).await.unwrap();
    assert!(
        response.status == 400 || response.status == 422,
        "got status {}",
        response.status
    );
}

#[tokio::test]
async fn list_responses_are_json() {
    let (_server, config) = spawn_target().await;
    let client = ResourceClient::authors(&config);

    let response = client.list_all().await.unwrap();
    assert_eq!(response.status, 200);
    assert!(response.header("Content-Type").unwrap().contains("application/json"));
}

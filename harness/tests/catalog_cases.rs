//! Catalog sweeps against the mock API
//!
//! Every case table entry runs as an independent probe; all declared
//! expectations must hold, tier by tier.

mod common;

use common::spawn_target;
use harness::{suites, Priority};

#[tokio::test]
async fn books_cases_suite_passes_in_full() {
    let (_server, config) = spawn_target().await;

    let reports = suites::run_suite("books-cases", &config).await.unwrap();
    let report = &reports[0];

    assert!(report.is_success(), "unexpected outcomes:\n{}", report);
}

#[tokio::test]
async fn authors_cases_suite_passes_in_full() {
    let (_server, config) = spawn_target().await;

    let reports = suites::run_suite("authors-cases", &config).await.unwrap();
    let report = &reports[0];

    assert!(report.is_success(), "unexpected outcomes:\n{}", report);
}

#[tokio::test]
async fn every_priority_tier_is_exercised() {
    let (_server, config) = spawn_target().await;

    for suite in ["authors-cases", "books-cases"] {
        let reports = suites::run_suite(suite, &config).await.unwrap();
        let report = &reports[0];

        for priority in [Priority::P1, Priority::P2, Priority::P3] {
            let counts = report.tier_counts(priority);
            assert!(
                counts.passed > 0,
                "suite '{}' ran no passing {} steps:\n{}",
                suite,
                priority,
                report
            );
            assert_eq!(counts.failed, 0, "suite '{}' {} failures:\n{}", suite, priority, report);
            assert_eq!(counts.errors, 0, "suite '{}' {} errors:\n{}", suite, priority, report);
        }
    }
}

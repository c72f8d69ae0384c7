//! Named suites
//!
//! Each suite is an explicit ordered step list; the dependency graph between
//! steps is data, not annotation order. Suites are dispatched by name.

pub mod authors;
pub mod books;

use shared::{HarnessConfig, HarnessError, HarnessResult};

use crate::catalog::{CaseCatalog, CaseOperation};
use crate::client::Payload;
use crate::report::SuiteReport;
use crate::runner::{Operation, Step};
use crate::validator::ExpectedOutcome;

/// Run a suite (or all of them) by name.
pub async fn run_suite(name: &str, config: &HarnessConfig) -> HarnessResult<Vec<SuiteReport>> {
    match name {
        "authors-lifecycle" => Ok(vec![authors::lifecycle(config).await]),
        "books-lifecycle" => Ok(vec![books::lifecycle(config).await]),
        "authors-cases" => Ok(vec![authors::cases(config).await]),
        "books-cases" => Ok(vec![books::cases(config).await]),

        // Complete run: lifecycle flows first, then the catalog sweeps
        "all" => Ok(vec![
            authors::lifecycle(config).await,
            books::lifecycle(config).await,
            authors::cases(config).await,
            books::cases(config).await,
        ]),

        _ => Err(HarnessError::Config {
            message: format!(
                "Unknown suite '{}'. Available: {}",
                name,
                available_suites().join(", ")
            ),
        }),
    }
}

/// Get list of available suites
pub fn available_suites() -> Vec<&'static str> {
    vec![
        "authors-lifecycle",
        "books-lifecycle",
        "authors-cases",
        "books-cases",
        "all",
    ]
}

/// Turn a case table into an ordered step list.
///
/// A successful update probe needs its target row present, so a seeding
/// create is inserted right before it. Everything else maps one-to-one.
pub(crate) fn steps_from_catalog(catalog: &CaseCatalog, seed: fn(i64) -> Payload) -> Vec<Step> {
    let mut steps = Vec::new();

    for case in catalog.cases() {
        if let CaseOperation::Update(id) = &case.operation {
            if case.expect.expects_success() {
                if let Ok(numeric) = id.as_str().parse::<i64>() {
                    steps.push(Step::new(
                        case.priority,
                        format!("seed row {} for '{}'", numeric, case.description),
                        Operation::Create(seed(numeric)),
                        ExpectedOutcome::status(201),
                    ));
                }
            }
        }
        steps.push(Step::from_case(case));
    }

    steps
}

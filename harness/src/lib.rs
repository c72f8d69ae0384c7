//! Contract-test harness for the Bookstore REST API
//!
//! Exercises CRUD over the Authors and Books collections and verifies status
//! codes, payload shape and cross-call consistency.
//!
//! ## Main Interface
//!
//! Suites are explicit ordered [`Step`] lists executed by the
//! [`LifecycleRunner`], which threads [`FixtureState`] between steps so later
//! steps can depend on ids produced by earlier ones.
//!
//! ## Quick Start
//!
//! ```no_run
//! use harness::suites;
//! use shared::HarnessConfig;
//!
//! # async fn run() -> shared::HarnessResult<()> {
//! let config = HarnessConfig::from_base_url("http://localhost:3000")?;
//!
//! for report in suites::run_suite("books-lifecycle", &config).await? {
//!     println!("{}", report);
//!     assert!(report.is_success());
//! }
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod catalog;
pub mod client;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod suites;
pub mod validator;

// Main interfaces - re-exported at crate root for convenience
pub use client::{ApiResponse, Payload, ResourceClient, ResourceId};
pub use fixtures::FixtureState;
pub use runner::{LifecycleRunner, Step};

// Supporting types
pub use catalog::{CaseCatalog, CaseOperation, Priority, TestCase};
pub use report::{RecordedStep, SuiteReport, TierCounts};
pub use runner::{IdSource, Operation, SaveField, StepError, StepOutcome};
pub use validator::{validate, ExpectedOutcome, FieldCheck, Mismatch, StatusExpectation};

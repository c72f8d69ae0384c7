//! Shared building blocks for the Bookstore API contract-test harness
//!
//! Contains only the pieces used by more than one member: the error
//! taxonomy, harness configuration, wire models for the two resource
//! collections, and tracing setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;

pub use config::HarnessConfig;
pub use errors::{HarnessError, HarnessResult};
pub use model::{Author, Book};

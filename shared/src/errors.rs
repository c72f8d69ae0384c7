//! Shared error types for the contract-test harness
//!
//! Expectation mismatches are deliberately NOT errors; they are recorded as
//! data in the suite report. This enum covers the conditions that make a
//! step (or the whole run) unable to proceed.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Fixture '{name}' was never set in this suite run")]
    MissingFixture { name: String },
}

pub type HarnessResult<T> = Result<T, HarnessError>;

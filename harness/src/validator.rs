//! Response validation
//!
//! Compares one response against one declared expectation and reports every
//! mismatched check at once, not just the first.

use std::fmt;

use serde_json::Value;

use crate::client::ApiResponse;

/// Expected HTTP status: one exact code, or any of a small set where the
/// contract allows alternatives (e.g. DELETE returning 200 or 204).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusExpectation {
    Exactly(u16),
    OneOf(&'static [u16]),
}

impl StatusExpectation {
    pub fn matches(&self, actual: u16) -> bool {
        match self {
            StatusExpectation::Exactly(code) => *code == actual,
            StatusExpectation::OneOf(codes) => codes.contains(&actual),
        }
    }

    /// True when the expectation names only success codes.
    pub fn expects_success(&self) -> bool {
        match self {
            StatusExpectation::Exactly(code) => (200..300).contains(code),
            StatusExpectation::OneOf(codes) => codes.iter().all(|code| (200..300).contains(code)),
        }
    }
}

impl fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusExpectation::Exactly(code) => write!(f, "{}", code),
            StatusExpectation::OneOf(codes) => {
                let rendered: Vec<String> = codes.iter().map(u16::to_string).collect();
                write!(f, "one of [{}]", rendered.join(", "))
            }
        }
    }
}

/// One field-level check against a response.
#[derive(Clone, Debug)]
pub enum FieldCheck {
    /// Named top-level field equals the given JSON value
    Equals(&'static str, Value),
    /// Named top-level field exists and is not null
    Present(&'static str),
    /// Body parses as a JSON array with at least one element
    NonEmptyArray,
    /// Named header value contains the given substring
    HeaderContains(&'static str, &'static str),
}

/// Everything one step expects from its response.
#[derive(Clone, Debug)]
pub struct ExpectedOutcome {
    pub status: StatusExpectation,
    pub checks: Vec<FieldCheck>,
}

impl ExpectedOutcome {
    pub fn status(code: u16) -> Self {
        Self {
            status: StatusExpectation::Exactly(code),
            checks: Vec::new(),
        }
    }

    pub fn status_one_of(codes: &'static [u16]) -> Self {
        Self {
            status: StatusExpectation::OneOf(codes),
            checks: Vec::new(),
        }
    }

    pub fn field_equals(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.checks.push(FieldCheck::Equals(name, value.into()));
        self
    }

    pub fn field_present(mut self, name: &'static str) -> Self {
        self.checks.push(FieldCheck::Present(name));
        self
    }

    pub fn non_empty_array(mut self) -> Self {
        self.checks.push(FieldCheck::NonEmptyArray);
        self
    }

    pub fn header_contains(mut self, header: &'static str, needle: &'static str) -> Self {
        self.checks.push(FieldCheck::HeaderContains(header, needle));
        self
    }

    pub fn expects_success(&self) -> bool {
        self.status.expects_success()
    }
}

/// Aggregate of every failed check for one response.
#[derive(Clone, Debug)]
pub struct Mismatch {
    pub problems: Vec<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problems.join("; "))
    }
}

/// Compare one response against one expectation, collecting every failed check.
pub fn validate(response: &ApiResponse, expected: &ExpectedOutcome) -> Result<(), Mismatch> {
    let mut problems = Vec::new();

    if !expected.status.matches(response.status) {
        problems.push(format!(
            "status: expected {}, got {}",
            expected.status, response.status
        ));
    }

    for check in &expected.checks {
        match check {
            FieldCheck::Equals(name, want) => match response.field(name) {
                Some(got) if &got == want => {}
                Some(got) => problems.push(format!("field '{}': expected {}, got {}", name, want, got)),
                None => problems.push(format!("field '{}': expected {}, field absent", name, want)),
            },
            FieldCheck::Present(name) => match response.field(name) {
                Some(value) if !value.is_null() => {}
                _ => problems.push(format!("field '{}': expected a non-null value", name)),
            },
            FieldCheck::NonEmptyArray => match response.json() {
                Some(Value::Array(items)) if !items.is_empty() => {}
                Some(Value::Array(_)) => {
                    problems.push("body: expected a non-empty array, got an empty one".to_string())
                }
                _ => problems.push("body: expected a JSON array".to_string()),
            },
            FieldCheck::HeaderContains(header, needle) => match response.header(header) {
                Some(value) if value.contains(needle) => {}
                Some(value) => problems.push(format!(
                    "header '{}': expected to contain '{}', got '{}'",
                    header, needle, value
                )),
                None => problems.push(format!("header '{}': missing", header)),
            },
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Mismatch { problems })
    }
}

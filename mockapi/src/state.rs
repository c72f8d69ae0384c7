//! In-memory collections and payload validation
//!
//! Stored rows are schema-less JSON objects; validation enforces the
//! contract the harness probes: required non-blank strings, positive
//! numeric fields, parseable dates, and strict field typing.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use shared::{Author, Book};

/// Why a payload was refused.
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Missing, blank or out-of-range field value
    Invalid(String),
    /// Field present but of the wrong JSON type
    WrongType(String),
}

pub struct ApiState {
    pub authors: Mutex<BTreeMap<i64, Value>>,
    pub books: Mutex<BTreeMap<i64, Value>>,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            authors: Mutex::new(BTreeMap::new()),
            books: Mutex::new(BTreeMap::new()),
        }
    }

    /// A store with a few rows in each collection, so list endpoints are
    /// non-empty from the first request.
    pub fn seeded() -> Self {
        let mut authors = BTreeMap::new();
        for author in [
            Author::new(1, Some("Ada Lovelace"), Some("Mathematician and writer"), Some("1815-12-10")),
            Author::new(2, Some("Alan Turing"), Some("Computing pioneer"), Some("1912-06-23")),
            Author::new(3, Some("Grace Hopper"), Some("Compiler pioneer"), Some("1906-12-09")),
        ] {
            authors.insert(author.id, to_row(&author));
        }

        let mut books = BTreeMap::new();
        for book in [
            Book::new(1, Some("The Analytical Engine"), Some("Notes on computation"), Some(320), Some("On the engine."), Some("1843-01-01T00:00:00Z")),
            Book::new(2, Some("Computing Machinery"), Some("Essays on machine intelligence"), Some(180), Some("Can machines think?"), Some("1950-10-01T00:00:00Z")),
            Book::new(3, Some("Compilers in Practice"), Some("From FLOW-MATIC onward"), Some(240), Some("A compiler story."), Some("1959-05-01T00:00:00Z")),
        ] {
            books.insert(book.id, to_row(&book));
        }

        Self {
            authors: Mutex::new(authors),
            books: Mutex::new(books),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

fn to_row<T: serde::Serialize>(resource: &T) -> Value {
    serde_json::to_value(resource).expect("seed rows serialize to JSON")
}

/// Validate an Author payload, returning its id.
pub fn validate_author(value: &Value) -> Result<i64, Rejection> {
    let object = as_object(value)?;
    let id = require_positive_int(object, "id")?;
    require_non_blank_string(object, "name")?;
    optional_plain_date(object, "birthDate")?;
    Ok(id)
}

/// Validate a Book payload, returning its id.
pub fn validate_book(value: &Value) -> Result<i64, Rejection> {
    let object = as_object(value)?;
    let id = require_positive_int(object, "id")?;
    require_non_blank_string(object, "title")?;
    require_positive_int(object, "pageCount")?;
    optional_datetime(object, "publishDate")?;
    Ok(id)
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, Rejection> {
    value
        .as_object()
        .ok_or_else(|| Rejection::Invalid("body must be a JSON object".to_string()))
}

fn require_positive_int(object: &Map<String, Value>, key: &str) -> Result<i64, Rejection> {
    match object.get(key) {
        None | Some(Value::Null) => Err(Rejection::Invalid(format!("'{}' is required", key))),
        Some(Value::Number(number)) => number
            .as_i64()
            .filter(|value| *value > 0)
            .ok_or_else(|| Rejection::Invalid(format!("'{}' must be a positive integer", key))),
        Some(_) => Err(Rejection::WrongType(format!("'{}' must be a number", key))),
    }
}

fn require_non_blank_string(object: &Map<String, Value>, key: &str) -> Result<(), Rejection> {
    match object.get(key) {
        None | Some(Value::Null) => Err(Rejection::Invalid(format!("'{}' is required", key))),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(Rejection::Invalid(format!("'{}' must not be blank", key)))
        }
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(Rejection::WrongType(format!("'{}' must be a string", key))),
    }
}

fn optional_plain_date(object: &Map<String, Value>, key: &str) -> Result<(), Rejection> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(text)) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| Rejection::Invalid(format!("'{}' must be a YYYY-MM-DD date", key))),
        Some(_) => Err(Rejection::WrongType(format!("'{}' must be a string", key))),
    }
}

fn optional_datetime(object: &Map<String, Value>, key: &str) -> Result<(), Rejection> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(text)
            .map(|_| ())
            .map_err(|_| Rejection::Invalid(format!("'{}' must be an ISO-8601 datetime", key))),
        Some(_) => Err(Rejection::WrongType(format!("'{}' must be a string", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_book_passes_and_returns_its_id() {
        let value = json!({
            "id": 5001,
            "title": "TC02 Happy Path",
            "description": "Valid Book",
            "pageCount": 120,
            "excerpt": "Excerpt",
            "publishDate": "2023-01-01T00:00:00Z"
        });

        assert_eq!(validate_book(&value), Ok(5001));
    }

    #[test]
    fn missing_and_blank_titles_are_invalid() {
        let missing = json!({"id": 10, "pageCount": 100});
        let null = json!({"id": 10, "title": null, "pageCount": 100});
        let blank = json!({"id": 10, "title": "   ", "pageCount": 100});

        for value in [missing, null, blank] {
            assert!(matches!(validate_book(&value), Err(Rejection::Invalid(_))));
        }
    }

    #[test]
    fn wrong_typed_page_count_is_a_type_rejection() {
        let value = json!({"id": 10, "title": "T", "pageCount": "ten"});
        assert!(matches!(validate_book(&value), Err(Rejection::WrongType(_))));
    }

    #[test]
    fn zero_and_negative_numbers_are_invalid() {
        let zero = json!({"id": 10, "title": "T", "pageCount": 0});
        let negative = json!({"id": 10, "title": "T", "pageCount": -5});
        let bad_id = json!({"id": 0, "title": "T", "pageCount": 10});

        for value in [zero, negative, bad_id] {
            assert!(matches!(validate_book(&value), Err(Rejection::Invalid(_))));
        }
    }

    #[test]
    fn malformed_dates_are_invalid() {
        let book = json!({"id": 10, "title": "T", "pageCount": 10, "publishDate": "31-12-2024"});
        assert!(matches!(validate_book(&book), Err(Rejection::Invalid(_))));

        let author = json!({"id": 10, "name": "N", "birthDate": "12/31/1980"});
        assert!(matches!(validate_author(&author), Err(Rejection::Invalid(_))));
    }

    #[test]
    fn author_requires_name_and_positive_id() {
        let ok = json!({"id": 6001, "name": "TC02 Happy Path", "bio": "Author bio", "birthDate": "1980-01-01"});
        assert_eq!(validate_author(&ok), Ok(6001));

        let negative = json!({"id": -1, "name": "Negative ID"});
        assert!(matches!(validate_author(&negative), Err(Rejection::Invalid(_))));

        let string_id = json!({"id": "abc", "name": "Type Probe"});
        assert!(matches!(validate_author(&string_id), Err(Rejection::WrongType(_))));
    }

    #[test]
    fn seeded_state_has_rows_in_both_collections() {
        let state = ApiState::seeded();

        assert_eq!(state.authors.try_lock().unwrap().len(), 3);
        assert_eq!(state.books.try_lock().unwrap().len(), 3);
    }
}

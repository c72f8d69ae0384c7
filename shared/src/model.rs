//! Wire models for the two Bookstore collections
//!
//! Fields other than `id` are optional so that missing-field cases can be
//! expressed as real payloads (`null` on the wire) instead of hand-written
//! JSON strings.

use serde::{Deserialize, Serialize};

/// One Author resource as the API sends and receives it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<String>,
}

impl Author {
    pub fn new(id: i64, name: Option<&str>, bio: Option<&str>, birth_date: Option<&str>) -> Self {
        Self {
            id,
            name: name.map(str::to_string),
            bio: bio.map(str::to_string),
            birth_date: birth_date.map(str::to_string),
        }
    }
}

/// One Book resource as the API sends and receives it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<i64>,
    pub excerpt: Option<String>,
    pub publish_date: Option<String>,
}

impl Book {
    pub fn new(
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        page_count: Option<i64>,
        excerpt: Option<&str>,
        publish_date: Option<&str>,
    ) -> Self {
        Self {
            id,
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            page_count,
            excerpt: excerpt.map(str::to_string),
            publish_date: publish_date.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_serializes_with_camel_case_keys() {
        let author = Author::new(7001, Some("Jane Doe"), Some("Test author"), Some("1990-01-01"));
        let value = serde_json::to_value(&author).unwrap();

        assert_eq!(value["id"], 7001);
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["birthDate"], "1990-01-01");
    }

    #[test]
    fn missing_book_title_serializes_as_null() {
        let book = Book::new(6002, None, Some("Missing title"), Some(150), Some("Excerpt"), Some("2022-03-01T00:00:00Z"));
        let value = serde_json::to_value(&book).unwrap();

        assert!(value["title"].is_null());
        assert_eq!(value["pageCount"], 150);
        assert_eq!(value["publishDate"], "2022-03-01T00:00:00Z");
    }

    #[test]
    fn book_round_trips_through_json() {
        let book = Book::new(101, Some("API Automation for Dummies"), Some("Practical guide"), Some(200), Some("Learn step by step."), Some("2023-09-01T00:00:00Z"));
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();

        assert_eq!(back, book);
    }
}

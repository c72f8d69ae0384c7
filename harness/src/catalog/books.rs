//! Case table for the Books collection
//!
//! Merged from the overlapping draft tables of the source suite; one
//! canonical expectation per scenario (duplicate id is 409, wrong-typed
//! pageCount is 400 or 422, invalid dates are 400).

use shared::Book;

use crate::client::Payload;
use crate::validator::ExpectedOutcome;

use super::{Priority, TestCase};

pub(super) fn cases() -> Vec<TestCase> {
    vec![
        // --- Priority: P1 ---
        TestCase::create(
            Priority::P1,
            "TC02 (P1): Create new book - all fields valid",
            Payload::resource(&Book::new(5001, Some("TC02 Happy Path"), Some("Valid Book"), Some(120), Some("Excerpt"), Some("2023-01-01T00:00:00Z"))),
            ExpectedOutcome::status(201).field_equals("title", "TC02 Happy Path"),
        ),
        TestCase::create(
            Priority::P1,
            "TC16 (P1): Missing required title",
            Payload::resource(&Book::new(6002, None, Some("Missing title"), Some(150), Some("Excerpt"), Some("2022-03-01T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P1,
            "TC23 (P1): Blank title (empty string)",
            Payload::resource(&Book::new(6003, Some(""), Some("Blank title"), Some(110), Some("Excerpt"), Some("2023-04-04T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P1,
            "TC23 (P1): Title spaces only",
            Payload::resource(&Book::new(6004, Some("   "), Some("Title with spaces only"), Some(110), Some("Excerpt"), Some("2023-05-05T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P1,
            "TC27 (P1): String value in pageCount",
            Payload::raw(r#"{"id":5110,"title":"Type Probe","description":"pageCount as string","pageCount":"ten","excerpt":"ex","publishDate":"2023-09-01T00:00:00Z"}"#),
            ExpectedOutcome::status_one_of(&[400, 422]),
        ),
        TestCase::create(
            Priority::P1,
            "TC33 (P1): Malformed JSON body",
            Payload::raw(r#"{"id":, "title":"Missing value""#),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P1,
            "TC17 (P1): Empty request body",
            Payload::raw(""),
            ExpectedOutcome::status(400),
        ),
        // --- Priority: P2 ---
        TestCase::create(
            Priority::P2,
            "TC07 (P2): Create new book, all valid",
            Payload::resource(&Book::new(5101, Some("TC07 All Valid"), Some("All valid fields"), Some(300), Some("Testing Excerpt"), Some("2022-07-01T00:00:00Z"))),
            ExpectedOutcome::status(201).field_equals("title", "TC07 All Valid"),
        ),
        TestCase::update(
            Priority::P2,
            "TC04 (P2): Update existing book - all fields valid",
            5002,
            Payload::resource(&Book::new(5002, Some("TC04 Update"), Some("Update Book"), Some(130), Some("New excerpt"), Some("2023-02-02T00:00:00Z"))),
            ExpectedOutcome::status(200).field_equals("title", "TC04 Update"),
        ),
        TestCase::create(
            Priority::P2,
            "TC19 (P2): Negative pageCount",
            Payload::resource(&Book::new(5103, Some("TC19 Negative"), Some("pageCount < 0"), Some(-5), Some("Excerpt"), Some("2022-09-01T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P2,
            "TC20 (P2): pageCount zero",
            Payload::resource(&Book::new(5104, Some("TC20 Zero"), Some("pageCount = 0"), Some(0), Some("Excerpt"), Some("2022-10-01T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P2,
            "TC24 (P2): Invalid publishDate",
            Payload::resource(&Book::new(5105, Some("TC24 Date"), Some("Invalid date format"), Some(111), Some("Excerpt"), Some("31-12-2024"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P2,
            "TC26 (P2): Duplicate ID",
            Payload::resource(&Book::new(5001, Some("TC26 Duplicate"), Some("Duplicate test"), Some(200), Some("Excerpt"), Some("2022-12-01T00:00:00Z"))),
            ExpectedOutcome::status(409),
        ),
        TestCase::update(
            Priority::P2,
            "TC28 (P2): Update with non-existent ID",
            99999,
            Payload::resource(&Book::new(99999, Some("TC28 NonExist"), Some("Update non-existing"), Some(100), Some("Excerpt"), Some("2022-11-11T00:00:00Z"))),
            ExpectedOutcome::status(404),
        ),
        TestCase::update(
            Priority::P2,
            "TC29 (P2): Update with blank body fields",
            5106,
            Payload::resource(&Book::new(5106, Some(""), Some(""), Some(0), Some(""), Some(""))),
            ExpectedOutcome::status(400),
        ),
        TestCase::update(
            Priority::P2,
            "TC30 (P2): Null title update",
            5107,
            Payload::resource(&Book::new(5107, None, Some("Invalid title update"), Some(100), Some("Excerpt"), Some("2023-01-01T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::update(
            Priority::P2,
            "TC30 (P2): Negative pageCount update",
            5108,
            Payload::resource(&Book::new(5108, Some("Invalid Field"), Some("Negative pageCount update"), Some(-3), Some("Excerpt"), Some("2023-02-01T00:00:00Z"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::get_by_id(
            Priority::P2,
            "TC11 (P2): Get book by non-existing ID",
            999999,
            ExpectedOutcome::status(404),
        ),
        // --- Priority: P3 ---
        TestCase::create(
            Priority::P3,
            "TC07 (P3): Create book, all fields valid",
            Payload::resource(&Book::new(6006, Some("TC07 All Valid"), Some("All valid fields"), Some(300), Some("Testing Excerpt"), Some("2022-07-01T00:00:00Z"))),
            ExpectedOutcome::status(201).field_equals("title", "TC07 All Valid"),
        ),
        TestCase::update(
            Priority::P3,
            "TC08 (P3): Update with new data",
            6007,
            Payload::resource(&Book::new(6007, Some("TC08 Update"), Some("Updated data"), Some(255), Some("Excerpt"), Some("2022-08-01T00:00:00Z"))),
            ExpectedOutcome::status(200).field_equals("title", "TC08 Update"),
        ),
        TestCase::get_by_id(
            Priority::P3,
            "TC38 (P3): Get book by special-character ID",
            "!@#%",
            ExpectedOutcome::status_one_of(&[400, 422]),
        ),
    ]
}

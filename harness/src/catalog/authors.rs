//! Case table for the Authors collection
//!
//! Boundary and equivalence classes mirrored with the Books table: happy
//! paths, missing/blank required field, bad ids, duplicates, wrong-typed
//! fields and syntactically invalid payloads.

use shared::Author;

use crate::client::Payload;
use crate::validator::ExpectedOutcome;

use super::{Priority, TestCase};

pub(super) fn cases() -> Vec<TestCase> {
    vec![
        // --- Priority: P1 ---
        TestCase::create(
            Priority::P1,
            "TC02 (P1): Create new author - all fields valid",
            Payload::resource(&Author::new(6001, Some("TC02 Happy Path"), Some("Author bio"), Some("1980-01-01"))),
            ExpectedOutcome::status(201).field_equals("name", "TC02 Happy Path"),
        ),
        TestCase::create(
            Priority::P1,
            "TC16 (P1): Missing required name",
            Payload::resource(&Author::new(6002, None, Some("No name field"), Some("1990-02-02"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P1,
            "TC22 (P1): Name is empty string",
            Payload::resource(&Author::new(6003, Some(""), Some("Blank name"), Some("1985-05-05"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P1,
            "TC22 (P1): Name spaces only",
            Payload::resource(&Author::new(6004, Some("   "), Some("Name with spaces only"), Some("1986-06-06"))),
            ExpectedOutcome::status(400),
        ),
        // --- Priority: P2 ---
        TestCase::create(
            Priority::P2,
            "TC07 (P2): Create new author, all valid",
            Payload::resource(&Author::new(6101, Some("TC07 All Valid"), Some("All valid fields"), Some("1975-12-31"))),
            ExpectedOutcome::status(201).field_equals("name", "TC07 All Valid"),
        ),
        TestCase::update(
            Priority::P2,
            "TC08 (P2): Update with new data",
            6102,
            Payload::resource(&Author::new(6102, Some("TC08 Update"), Some("Updated bio"), Some("1970-03-15"))),
            ExpectedOutcome::status(200).field_equals("bio", "Updated bio"),
        ),
        TestCase::create(
            Priority::P2,
            "TC19 (P2): Negative id",
            Payload::resource(&Author::new(-1, Some("Negative ID"), Some("Negative test"), Some("1971-07-07"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P2,
            "TC20 (P2): id zero",
            Payload::resource(&Author::new(0, Some("Zero ID"), Some("Zero id test"), Some("1972-08-08"))),
            ExpectedOutcome::status(400),
        ),
        TestCase::create(
            Priority::P2,
            "TC23 (P2): Duplicate ID",
            Payload::resource(&Author::new(6001, Some("TC23 Duplicate"), Some("Duplicate ID test"), Some("1973-09-09"))),
            ExpectedOutcome::status(409),
        ),
        TestCase::get_by_id(
            Priority::P2,
            "TC11 (P2): Get author by non-existing ID",
            999999,
            ExpectedOutcome::status(404),
        ),
        // --- Priority: P3 ---
        TestCase::update(
            Priority::P3,
            "TC28 (P3): Update with non-existent ID",
            99999,
            Payload::resource(&Author::new(99999, Some("TC28 NonExist"), Some("Update non-existing"), Some("1960-01-01"))),
            ExpectedOutcome::status(404),
        ),
        TestCase::create(
            Priority::P3,
            "TC27 (P3): String value in id field",
            Payload::raw(r#"{"id":"abc","name":"Type Probe","bio":"id as string","birthDate":"1970-01-01"}"#),
            ExpectedOutcome::status_one_of(&[400, 422]),
        ),
        TestCase::create(
            Priority::P3,
            "TC33 (P3): Malformed JSON body",
            Payload::raw(r#"{"id":, "name":"Missing value""#),
            ExpectedOutcome::status(400),
        ),
        TestCase::get_by_id(
            Priority::P3,
            "TC37 (P3): Get author by alphabetic ID",
            "abc",
            ExpectedOutcome::status_one_of(&[400, 422]),
        ),
    ]
}

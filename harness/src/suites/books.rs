//! Books API suites
//!
//! Lifecycle flow mirrors the Authors suite and adds the header validation
//! and special-character id probes.

use shared::{Book, HarnessConfig};

use crate::catalog::{CaseCatalog, Priority};
use crate::client::{Payload, ResourceClient};
use crate::fixtures::FixtureState;
use crate::report::SuiteReport;
use crate::runner::{IdSource, LifecycleRunner, Operation, Step};
use crate::validator::ExpectedOutcome;

const CREATED_BOOK_ID: &str = "createdBookId";
const ANOTHER_BOOK_ID: &str = "anotherBookId";

/// Ordered CRUD flow over the Books collection.
pub async fn lifecycle(config: &HarnessConfig) -> SuiteReport {
    let client = ResourceClient::books(config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    runner.run("books-lifecycle", &lifecycle_steps(), &mut fixtures).await
}

/// Every catalog case for the Books collection, as independent probes.
pub async fn cases(config: &HarnessConfig) -> SuiteReport {
    let client = ResourceClient::books(config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    let catalog = CaseCatalog::books();
    let steps = super::steps_from_catalog(&catalog, seed_book);

    runner.run("books-cases", &steps, &mut fixtures).await
}

fn seed_book(id: i64) -> Payload {
    Payload::resource(&Book::new(id, Some("Seed Book"), Some("Seeded for update probes"), Some(10), Some("Seed"), Some("2020-01-01T00:00:00Z")))
}

fn lifecycle_steps() -> Vec<Step> {
    let valid_book = Book::new(101, Some("API Automation for Dummies"), Some("Practical guide to modern API automation"), Some(200), Some("Learn API testing step by step."), Some("2023-09-01T00:00:00Z"));
    let updated_book = Book::new(101, Some("API Automation for Dummies"), Some("Updated desc"), Some(200), Some("Learn API testing step by step."), Some("2023-09-01T00:00:00Z"));
    let another_book = Book::new(102, Some("Clean REST Design"), Some("API design best practices"), Some(120), Some("REST for everyone."), Some("2022-06-01T00:00:00Z"));

    vec![
        Step::new(
            Priority::P1,
            "TC01 - Get all books",
            Operation::ListAll,
            ExpectedOutcome::status(200).non_empty_array(),
        ),
        Step::new(
            Priority::P1,
            "TC02 - Create new book",
            Operation::Create(Payload::resource(&valid_book)),
            ExpectedOutcome::status(201).field_equals("title", "API Automation for Dummies"),
        )
        .save_field(CREATED_BOOK_ID, "id"),
        Step::new(
            Priority::P1,
            "TC16 - Create book missing title",
            Operation::Create(Payload::resource(&Book::new(0, None, Some("Missing title"), Some(150), Some("Excerpt"), Some("2023-09-01T00:00:00Z")))),
            ExpectedOutcome::status(400),
        ),
        Step::new(
            Priority::P1,
            "TC23 - Create book with blank title",
            Operation::Create(Payload::resource(&Book::new(0, Some("   "), Some("Blank title"), Some(100), Some("Excerpt"), Some("2023-09-01T00:00:00Z")))),
            ExpectedOutcome::status(400),
        ),
        Step::new(
            Priority::P1,
            "TC27 - Create book with string in pageCount",
            Operation::Create(Payload::raw(r#"{"id":0,"title":"Test","description":"desc","pageCount":"ten","excerpt":"ex","publishDate":"2023-09-01T00:00:00Z"}"#)),
            ExpectedOutcome::status_one_of(&[400, 422]),
        ),
        Step::new(
            Priority::P1,
            "TC33 - Send POST request with malformed JSON",
            Operation::Create(Payload::raw(r#"{"id":, "title":"Missing value""#)),
            ExpectedOutcome::status(400),
        ),
        Step::new(
            Priority::P2,
            "TC03 - Get book by ID (just created)",
            Operation::GetById(IdSource::Fixture(CREATED_BOOK_ID)),
            ExpectedOutcome::status(200).field_equals("title", "API Automation for Dummies"),
        ),
        Step::new(
            Priority::P2,
            "TC04 - Update book",
            Operation::Update(
                IdSource::Fixture(CREATED_BOOK_ID),
                Payload::resource(&updated_book),
            ),
            ExpectedOutcome::status(200).field_equals("description", "Updated desc"),
        ),
        Step::new(
            Priority::P2,
            "Read back the updated book",
            Operation::GetById(IdSource::Fixture(CREATED_BOOK_ID)),
            ExpectedOutcome::status(200).field_equals("description", "Updated desc"),
        ),
        Step::new(
            Priority::P2,
            "TC05 - Delete book",
            Operation::Delete(IdSource::Fixture(CREATED_BOOK_ID)),
            ExpectedOutcome::status_one_of(&[200, 204]),
        ),
        Step::new(
            Priority::P2,
            "Deleted book is gone",
            Operation::GetById(IdSource::Fixture(CREATED_BOOK_ID)),
            ExpectedOutcome::status(404),
        ),
        Step::new(
            Priority::P2,
            "TC11 - Get book by non-existing ID",
            Operation::GetById(IdSource::from(999999)),
            ExpectedOutcome::status(404),
        ),
        Step::new(
            Priority::P3,
            "TC06 - Create another book",
            Operation::Create(Payload::resource(&another_book)),
            ExpectedOutcome::status(201),
        )
        .save_field(ANOTHER_BOOK_ID, "id"),
        Step::new(
            Priority::P3,
            "TC06 - Get book by another valid ID",
            Operation::GetById(IdSource::Fixture(ANOTHER_BOOK_ID)),
            ExpectedOutcome::status(200).field_equals("title", "Clean REST Design"),
        ),
        Step::new(
            Priority::P3,
            "TC07 - Create new book (all valid fields)",
            Operation::Create(Payload::resource(&Book::new(103, Some("Test Driven API"), Some("All fields test"), Some(80), Some("Excerpt"), Some("2023-01-01T00:00:00Z")))),
            ExpectedOutcome::status(201).field_equals("title", "Test Driven API"),
        ),
        Step::new(
            Priority::P3,
            "TC08 - Update existing book with new data",
            Operation::Update(
                IdSource::from(103),
                Payload::resource(&Book::new(103, Some("Updated Title"), Some("Updated Desc"), Some(90), Some("Updated Excerpt"), Some("2023-01-01T00:00:00Z"))),
            ),
            ExpectedOutcome::status(200).field_equals("title", "Updated Title"),
        ),
        Step::new(
            Priority::P3,
            "TC09 - Delete a different existing book",
            Operation::Delete(IdSource::Fixture(ANOTHER_BOOK_ID)),
            ExpectedOutcome::status_one_of(&[200, 204]),
        ),
        Step::new(
            Priority::P3,
            "TC10 - List all books after CRUD operations",
            Operation::ListAll,
            ExpectedOutcome::status(200).non_empty_array(),
        ),
        Step::new(
            Priority::P3,
            "TC39 - Content-Type header validation",
            Operation::ListAll,
            ExpectedOutcome::status(200).header_contains("Content-Type", "application/json"),
        ),
        Step::new(
            Priority::P3,
            "TC38 - Get book by special-character ID",
            Operation::GetById(IdSource::from("!@#%")),
            ExpectedOutcome::status_one_of(&[400, 422]),
        ),
    ]
}

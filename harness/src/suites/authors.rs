//! Authors API suites
//!
//! The lifecycle suite follows the ordered create → read → update → delete
//! flow; the cases suite sweeps the full catalog for this collection.

use shared::{Author, HarnessConfig};

use crate::catalog::{CaseCatalog, Priority};
use crate::client::{Payload, ResourceClient};
use crate::fixtures::FixtureState;
use crate::report::SuiteReport;
use crate::runner::{IdSource, LifecycleRunner, Operation, Step};
use crate::validator::ExpectedOutcome;

const CREATED_AUTHOR_ID: &str = "createdAuthorId";
const ANOTHER_AUTHOR_ID: &str = "anotherAuthorId";

/// Ordered CRUD flow over the Authors collection.
pub async fn lifecycle(config: &HarnessConfig) -> SuiteReport {
    let client = ResourceClient::authors(config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    runner.run("authors-lifecycle", &lifecycle_steps(), &mut fixtures).await
}

/// Every catalog case for the Authors collection, as independent probes.
pub async fn cases(config: &HarnessConfig) -> SuiteReport {
    let client = ResourceClient::authors(config);
    let runner = LifecycleRunner::new(&client);
    let mut fixtures = FixtureState::new();

    let catalog = CaseCatalog::authors();
    let steps = super::steps_from_catalog(&catalog, seed_author);

    runner.run("authors-cases", &steps, &mut fixtures).await
}

fn seed_author(id: i64) -> Payload {
    Payload::resource(&Author::new(id, Some("Seed Author"), Some("Seeded for update probes"), Some("1950-01-01")))
}

fn lifecycle_steps() -> Vec<Step> {
    let valid_author = Author::new(7001, Some("Jane Doe"), Some("Test author"), Some("1990-01-01"));
    let updated_author = Author::new(7001, Some("Jane Doe"), Some("Updated bio"), Some("1990-01-01"));
    let another_author = Author::new(7002, Some("John Smith"), Some("Another test author"), Some("1985-05-12"));

    vec![
        Step::new(
            Priority::P1,
            "TC01 - Get all authors",
            Operation::ListAll,
            ExpectedOutcome::status(200).non_empty_array(),
        ),
        Step::new(
            Priority::P1,
            "TC02 - Create new author",
            Operation::Create(Payload::resource(&valid_author)),
            ExpectedOutcome::status(201).field_equals("name", "Jane Doe"),
        )
        .save_field(CREATED_AUTHOR_ID, "id"),
        Step::new(
            Priority::P1,
            "TC16 - Create author missing name",
            Operation::Create(Payload::resource(&Author::new(0, None, Some("Bio"), Some("1990-01-01")))),
            ExpectedOutcome::status(400),
        ),
        Step::new(
            Priority::P1,
            "TC22 - Create author with blank name",
            Operation::Create(Payload::resource(&Author::new(0, Some("   "), Some("Bio"), Some("1990-01-01")))),
            ExpectedOutcome::status(400),
        ),
        Step::new(
            Priority::P2,
            "TC03 - Get author by ID (just created)",
            Operation::GetById(IdSource::Fixture(CREATED_AUTHOR_ID)),
            ExpectedOutcome::status(200)
                .field_equals("id", 7001)
                .field_equals("name", "Jane Doe"),
        ),
        Step::new(
            Priority::P2,
            "TC04 - Update author",
            Operation::Update(
                IdSource::Fixture(CREATED_AUTHOR_ID),
                Payload::resource(&updated_author),
            ),
            ExpectedOutcome::status(200).field_equals("bio", "Updated bio"),
        ),
        Step::new(
            Priority::P2,
            "Read back the updated author",
            Operation::GetById(IdSource::Fixture(CREATED_AUTHOR_ID)),
            ExpectedOutcome::status(200).field_equals("bio", "Updated bio"),
        ),
        Step::new(
            Priority::P2,
            "TC05 - Delete author",
            Operation::Delete(IdSource::Fixture(CREATED_AUTHOR_ID)),
            ExpectedOutcome::status_one_of(&[200, 204]),
        ),
        Step::new(
            Priority::P2,
            "Deleted author is gone",
            Operation::GetById(IdSource::Fixture(CREATED_AUTHOR_ID)),
            ExpectedOutcome::status(404),
        ),
        Step::new(
            Priority::P3,
            "TC06 - Create another author",
            Operation::Create(Payload::resource(&another_author)),
            ExpectedOutcome::status(201),
        )
        .save_field(ANOTHER_AUTHOR_ID, "id"),
        Step::new(
            Priority::P3,
            "TC06 - Get author by another valid ID",
            Operation::GetById(IdSource::Fixture(ANOTHER_AUTHOR_ID)),
            ExpectedOutcome::status(200).field_equals("name", "John Smith"),
        ),
        Step::new(
            Priority::P3,
            "TC07 - Create new author (all valid fields)",
            Operation::Create(Payload::resource(&Author::new(7003, Some("E2E Author"), Some("Full fields"), Some("1995-03-03")))),
            ExpectedOutcome::status(201).field_equals("name", "E2E Author"),
        ),
        Step::new(
            Priority::P3,
            "TC08 - Update existing author with new data",
            Operation::Update(
                IdSource::from(7003),
                Payload::resource(&Author::new(7003, Some("E2E Author Updated"), Some("Updated"), Some("1995-03-03"))),
            ),
            ExpectedOutcome::status(200).field_equals("name", "E2E Author Updated"),
        ),
        Step::new(
            Priority::P3,
            "TC09 - Delete a different existing author",
            Operation::Delete(IdSource::Fixture(ANOTHER_AUTHOR_ID)),
            ExpectedOutcome::status_one_of(&[200, 204]),
        ),
    ]
}

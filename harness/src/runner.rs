//! Ordered, stateful step execution
//!
//! Steps run strictly in declaration order against one resource client,
//! threading fixture state between them. A failed expectation is recorded
//! and the run continues; the failed step's fixture writes are suppressed so
//! downstream dependents fail loudly instead of reading stale values.

use std::fmt;

use shared::HarnessError;

use crate::catalog::{CaseOperation, Priority, TestCase};
use crate::client::{ApiResponse, Payload, ResourceClient, ResourceId};
use crate::fixtures::FixtureState;
use crate::report::SuiteReport;
use crate::validator::{validate, ExpectedOutcome, Mismatch};

/// Where a step takes the id it operates on.
#[derive(Clone, Debug)]
pub enum IdSource {
    Literal(ResourceId),
    /// Read from a fixture written by an earlier step
    Fixture(&'static str),
}

impl From<i64> for IdSource {
    fn from(id: i64) -> Self {
        IdSource::Literal(ResourceId::from(id))
    }
}

impl From<&'static str> for IdSource {
    fn from(id: &'static str) -> Self {
        IdSource::Literal(ResourceId::from(id))
    }
}

/// One CRUD intent executed by the runner.
#[derive(Clone, Debug)]
pub enum Operation {
    ListAll,
    GetById(IdSource),
    Create(Payload),
    Update(IdSource, Payload),
    Delete(IdSource),
}

/// Fixture write sourced from a step's response.
#[derive(Clone, Debug)]
pub struct SaveField {
    pub fixture: &'static str,
    pub field: &'static str,
}

/// One ordered step of a suite.
#[derive(Clone, Debug)]
pub struct Step {
    pub label: String,
    pub priority: Priority,
    pub operation: Operation,
    pub expect: ExpectedOutcome,
    pub saves: Vec<SaveField>,
}

impl Step {
    pub fn new(
        priority: Priority,
        label: impl Into<String>,
        operation: Operation,
        expect: ExpectedOutcome,
    ) -> Self {
        Self {
            label: label.into(),
            priority,
            operation,
            expect,
            saves: Vec::new(),
        }
    }

    /// After a passing response, copy a top-level response field into a fixture.
    pub fn save_field(mut self, fixture: &'static str, field: &'static str) -> Self {
        self.saves.push(SaveField { fixture, field });
        self
    }

    /// A catalog case is a step with a literal id and no fixture writes.
    pub fn from_case(case: &TestCase) -> Self {
        let operation = match (&case.operation, &case.payload) {
            (CaseOperation::Create, Some(payload)) => Operation::Create(payload.clone()),
            (CaseOperation::Create, None) => Operation::Create(Payload::raw("")),
            (CaseOperation::Update(id), Some(payload)) => {
                Operation::Update(IdSource::Literal(id.clone()), payload.clone())
            }
            (CaseOperation::Update(id), None) => {
                Operation::Update(IdSource::Literal(id.clone()), Payload::raw(""))
            }
            (CaseOperation::GetById(id), _) => Operation::GetById(IdSource::Literal(id.clone())),
            (CaseOperation::Delete(id), _) => Operation::Delete(IdSource::Literal(id.clone())),
        };

        Self::new(case.priority, case.description, operation, case.expect.clone())
    }
}

/// Why the harness itself could not execute a step. Kept distinct from
/// expectation mismatches so a broken harness is never mistaken for a broken
/// server.
#[derive(Clone, Debug)]
pub enum StepError {
    /// A fixture dependency was never written; step ordering is broken
    MissingFixture { name: String },
    /// The HTTP call could not complete
    Transport { message: String },
    /// The response lacked a field a fixture write needed
    MissingResponseField { field: String, fixture: String },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::MissingFixture { name } => {
                write!(f, "fixture '{}' was never set in this suite run", name)
            }
            StepError::Transport { message } => write!(f, "transport failure: {}", message),
            StepError::MissingResponseField { field, fixture } => write!(
                f,
                "response field '{}' missing, cannot record fixture '{}'",
                field, fixture
            ),
        }
    }
}

impl From<HarnessError> for StepError {
    fn from(error: HarnessError) -> Self {
        match error {
            HarnessError::MissingFixture { name } => StepError::MissingFixture { name },
            other => StepError::Transport {
                message: other.to_string(),
            },
        }
    }
}

/// Result of one executed step.
#[derive(Clone, Debug)]
pub enum StepOutcome {
    Passed,
    /// Server behavior differed from the declared expectation
    Failed(Mismatch),
    /// The harness could not execute the step
    Error(StepError),
}

impl StepOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, StepOutcome::Passed)
    }
}

/// Sequential executor for an ordered step list.
pub struct LifecycleRunner<'a> {
    client: &'a ResourceClient,
}

impl<'a> LifecycleRunner<'a> {
    pub fn new(client: &'a ResourceClient) -> Self {
        Self { client }
    }

    /// Execute every step in declaration order. Fixture state is reset up
    /// front so nothing leaks in from a previous suite.
    pub async fn run(&self, suite: &str, steps: &[Step], fixtures: &mut FixtureState) -> SuiteReport {
        fixtures.reset();

        let mut report = SuiteReport::new(suite);
        tracing::info!("🧪 Running suite '{}' ({} steps)", suite, steps.len());

        for (index, step) in steps.iter().enumerate() {
            let outcome = self.run_step(step, fixtures).await;

            match &outcome {
                StepOutcome::Passed => tracing::info!("✅ {}", step.label),
                StepOutcome::Failed(mismatch) => tracing::warn!("❌ {}: {}", step.label, mismatch),
                StepOutcome::Error(error) => tracing::error!("🛑 {}: {}", step.label, error),
            }

            report.record(index, &step.label, step.priority, outcome);
        }

        report
    }

    async fn run_step(&self, step: &Step, fixtures: &mut FixtureState) -> StepOutcome {
        let response = match self.issue(&step.operation, fixtures).await {
            Ok(response) => response,
            Err(error) => return StepOutcome::Error(StepError::from(error)),
        };

        if let Err(mismatch) = validate(&response, &step.expect) {
            // No fixture writes from a failed step.
            return StepOutcome::Failed(mismatch);
        }

        for save in &step.saves {
            match response.field(save.field) {
                Some(value) => fixtures.set(save.fixture, value),
                None => {
                    return StepOutcome::Error(StepError::MissingResponseField {
                        field: save.field.to_string(),
                        fixture: save.fixture.to_string(),
                    })
                }
            }
        }

        StepOutcome::Passed
    }

    async fn issue(
        &self,
        operation: &Operation,
        fixtures: &FixtureState,
    ) -> Result<ApiResponse, HarnessError> {
        match operation {
            Operation::ListAll => self.client.list_all().await,
            Operation::GetById(id) => self.client.get_by_id(&resolve(id, fixtures)?).await,
            Operation::Create(payload) => self.client.create(payload).await,
            Operation::Update(id, payload) => {
                self.client.update(&resolve(id, fixtures)?, payload).await
            }
            Operation::Delete(id) => self.client.delete(&resolve(id, fixtures)?).await,
        }
    }
}

fn resolve(source: &IdSource, fixtures: &FixtureState) -> Result<ResourceId, HarnessError> {
    match source {
        IdSource::Literal(id) => Ok(id.clone()),
        IdSource::Fixture(name) => fixtures.id(name),
    }
}

//! Suite reporting
//!
//! Per-step outcomes plus pass/fail/error aggregation by priority tier.
//! Expectation mismatches and harness errors are counted separately so the
//! summary tells "server bug" apart from "harness bug".

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Priority;
use crate::runner::StepOutcome;

/// One executed step as it appears in the report.
#[derive(Clone, Debug)]
pub struct RecordedStep {
    pub index: usize,
    pub label: String,
    pub priority: Priority,
    pub outcome: StepOutcome,
}

/// Aggregated counts for one priority tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

/// Outcome of one suite run.
#[derive(Clone, Debug)]
pub struct SuiteReport {
    pub suite: String,
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub steps: Vec<RecordedStep>,
}

impl SuiteReport {
    pub fn new(suite: &str) -> Self {
        Self {
            suite: suite.to_string(),
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, index: usize, label: &str, priority: Priority, outcome: StepOutcome) {
        self.steps.push(RecordedStep {
            index,
            label: label.to_string(),
            priority,
            outcome,
        });
    }

    pub fn passed(&self) -> usize {
        self.steps.iter().filter(|step| matches!(step.outcome, StepOutcome::Passed)).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|step| matches!(step.outcome, StepOutcome::Failed(_))).count()
    }

    pub fn errors(&self) -> usize {
        self.steps.iter().filter(|step| matches!(step.outcome, StepOutcome::Error(_))).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.errors() == 0
    }

    /// Any non-passing P1 step blocks a release.
    pub fn has_blocking_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.priority == Priority::P1 && !step.outcome.is_pass())
    }

    pub fn tier_counts(&self, priority: Priority) -> TierCounts {
        let mut counts = TierCounts::default();
        for step in self.steps.iter().filter(|step| step.priority == priority) {
            match step.outcome {
                StepOutcome::Passed => counts.passed += 1,
                StepOutcome::Failed(_) => counts.failed += 1,
                StepOutcome::Error(_) => counts.errors += 1,
            }
        }
        counts
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Suite '{}' (run {}, started {})",
            self.suite,
            self.run_id,
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        for step in &self.steps {
            match &step.outcome {
                StepOutcome::Passed => writeln!(f, "  ✅ [{}] {}", step.priority, step.label)?,
                StepOutcome::Failed(mismatch) => {
                    writeln!(f, "  ❌ [{}] {}: {}", step.priority, step.label, mismatch)?
                }
                StepOutcome::Error(error) => {
                    writeln!(f, "  🛑 [{}] {}: {}", step.priority, step.label, error)?
                }
            }
        }

        for priority in [Priority::P1, Priority::P2, Priority::P3] {
            let counts = self.tier_counts(priority);
            if counts.passed + counts.failed + counts.errors > 0 {
                writeln!(
                    f,
                    "  {}: {} passed, {} failed, {} errors",
                    priority, counts.passed, counts.failed, counts.errors
                )?;
            }
        }

        write!(
            f,
            "  Total: {} passed, {} failed, {} errors",
            self.passed(),
            self.failed(),
            self.errors()
        )
    }
}

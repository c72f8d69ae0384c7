//! Parameterized test-case catalog
//!
//! Each resource has one canonical, declaration-ordered case table,
//! partitioned into priority tiers (P1 first). Tables are authored
//! explicitly, never generated, so a reader can see exactly what runs and
//! in what order.

mod authors;
mod books;

use std::fmt;

use crate::client::{Payload, ResourceId};
use crate::validator::ExpectedOutcome;

/// Priority tier of a case: P1 blocking, P2 critical, P3 regression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::P1 => write!(f, "P1"),
            Priority::P2 => write!(f, "P2"),
            Priority::P3 => write!(f, "P3"),
        }
    }
}

/// The CRUD intent a case exercises.
#[derive(Clone, Debug)]
pub enum CaseOperation {
    Create,
    Update(ResourceId),
    GetById(ResourceId),
    Delete(ResourceId),
}

/// One parameterized input/expected-outcome pair.
#[derive(Clone, Debug)]
pub struct TestCase {
    pub description: &'static str,
    pub priority: Priority,
    pub operation: CaseOperation,
    pub payload: Option<Payload>,
    pub expect: ExpectedOutcome,
}

impl TestCase {
    pub fn create(
        priority: Priority,
        description: &'static str,
        payload: Payload,
        expect: ExpectedOutcome,
    ) -> Self {
        Self {
            description,
            priority,
            operation: CaseOperation::Create,
            payload: Some(payload),
            expect,
        }
    }

    pub fn update(
        priority: Priority,
        description: &'static str,
        id: impl Into<ResourceId>,
        payload: Payload,
        expect: ExpectedOutcome,
    ) -> Self {
        Self {
            description,
            priority,
            operation: CaseOperation::Update(id.into()),
            payload: Some(payload),
            expect,
        }
    }

    pub fn get_by_id(
        priority: Priority,
        description: &'static str,
        id: impl Into<ResourceId>,
        expect: ExpectedOutcome,
    ) -> Self {
        Self {
            description,
            priority,
            operation: CaseOperation::GetById(id.into()),
            payload: None,
            expect,
        }
    }

    pub fn delete(
        priority: Priority,
        description: &'static str,
        id: impl Into<ResourceId>,
        expect: ExpectedOutcome,
    ) -> Self {
        Self {
            description,
            priority,
            operation: CaseOperation::Delete(id.into()),
            payload: None,
            expect,
        }
    }
}

/// Ordered, restartable case table for one resource type.
pub struct CaseCatalog {
    resource: &'static str,
    cases: Vec<TestCase>,
}

impl CaseCatalog {
    fn new(resource: &'static str, cases: Vec<TestCase>) -> Self {
        debug_assert!(
            cases.windows(2).all(|pair| pair[0].priority <= pair[1].priority),
            "case table for {} must be tier-ordered",
            resource
        );
        Self { resource, cases }
    }

    /// Canonical case table for the Authors collection
    pub fn authors() -> Self {
        Self::new("Authors", authors::cases())
    }

    /// Canonical case table for the Books collection
    pub fn books() -> Self {
        Self::new("Books", books::cases())
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// All cases, P1 first, declaration order within a tier. Re-iterating
    /// yields the same cases; there is no hidden consumption state.
    pub fn cases(&self) -> impl Iterator<Item = &TestCase> + '_ {
        self.cases.iter()
    }

    /// Cases of one tier only, in declaration order.
    pub fn tier(&self, priority: Priority) -> impl Iterator<Item = &TestCase> + '_ {
        self.cases.iter().filter(move |case| case.priority == priority)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

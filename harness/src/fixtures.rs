//! Suite-scoped fixture memory
//!
//! Named values written by one step and read by later steps in the same
//! ordered run. Passed by reference into the runner, never held in statics,
//! so data dependencies stay visible and reset is trivial.

use std::collections::HashMap;

use serde_json::Value;

use shared::{HarnessError, HarnessResult};

use crate::client::ResourceId;

#[derive(Debug, Default)]
pub struct FixtureState {
    entries: HashMap<String, Value>,
}

impl FixtureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value under a logical name, overwriting unconditionally.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    /// Read a value set by an earlier step.
    ///
    /// An unset name signals broken step ordering, not a server defect.
    pub fn get(&self, name: &str) -> HarnessResult<&Value> {
        self.entries.get(name).ok_or_else(|| HarnessError::MissingFixture {
            name: name.to_string(),
        })
    }

    /// Read a value recorded earlier and render it as a resource id.
    pub fn id(&self, name: &str) -> HarnessResult<ResourceId> {
        let value = self.get(name)?;
        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Ok(ResourceId::from(rendered.as_str()))
    }

    /// Drop every entry. Must run before each independent suite.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

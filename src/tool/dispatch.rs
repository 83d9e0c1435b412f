// ABOUTME: Dispatcher - routes parsed tool calls to the math and string catalogs.
// ABOUTME: Collects per-call results and errors without aborting the batch.

use tracing::{debug, warn};

use super::{Registry, ToolCall, Value};
use crate::error::ToolError;
use crate::tools;

/// Results of running a batch of tool calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionReport {
    /// Rendered call → value, in first-seen order.
    pub results: Vec<(String, Value)>,
    pub errors: Vec<String>,
}

impl ExecutionReport {
    /// Record a result. A call that renders identically to an earlier one
    /// replaces its value and keeps its position.
    pub fn insert(&mut self, key: String, value: Value) {
        match self.results.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.results.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.results.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.errors.is_empty()
    }
}

/// Routes tool calls to the registry for their namespace.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registries: Vec<&'static Registry>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher over the built-in `math` and `string` catalogs.
    pub fn new() -> Self {
        Self::with_registries(vec![tools::math_registry(), tools::string_registry()])
    }

    pub fn with_registries(registries: Vec<&'static Registry>) -> Self {
        Self { registries }
    }

    pub fn registries(&self) -> &[&'static Registry] {
        &self.registries
    }

    /// Find the registry for a namespace, ignoring case.
    pub fn registry(&self, namespace: &str) -> Option<&'static Registry> {
        self.registries
            .iter()
            .copied()
            .find(|r| r.namespace().eq_ignore_ascii_case(namespace))
    }

    /// Run one call.
    pub fn call(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let registry = self
            .registry(&call.namespace)
            .ok_or_else(|| ToolError::UnknownNamespace(call.namespace.clone()))?;
        registry.call(&call.function, &call.args)
    }

    /// Run every call in order, collecting results and errors.
    pub fn execute(&self, calls: &[ToolCall]) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for call in calls {
            let key = call.to_string();
            match self.call(call) {
                Ok(value) => {
                    debug!(call = %key, result = %value, "tool call succeeded");
                    report.insert(key, value);
                }
                Err(err @ ToolError::UnknownNamespace(_)) => {
                    warn!(call = %key, error = %err, "unknown tool namespace");
                    report.errors.push(err.to_string());
                }
                Err(err) => {
                    warn!(call = %key, error = %err, "tool call failed");
                    report.errors.push(format!("Error executing {}: {}", key, err));
                }
            }
        }

        report
    }
}

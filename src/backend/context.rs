//! Run-scoped state of one generation.
//!
//! A [`GenerationContext`] is created by the caller of the emitter for a single run and dropped afterwards. Nothing in
//! it is global, so independent runs can proceed concurrently.

use cellgen_core::qualified_id;
use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::{Warning, WarningKind};

#[derive(Debug, Default)]
pub struct GenerationContext {
    /// Inferred fields, in first-reference order.
    members: IndexSet<String>,
    /// Rendered parameter lists keyed by function id.
    parameters: IndexMap<String, Vec<String>>,
    warnings: Vec<Warning>,
    /// Next `tN` thread name within the method being emitted.
    next_thread: usize,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a member field. Recording the same name again is a no-op.
    pub fn add_member(&mut self, name: &str) {
        if !self.members.contains(name) {
            self.members.insert(name.to_string());
        }
    }

    pub fn members(&self) -> impl ExactSizeIterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Apply the member rule to an id and return the text to emit.
    ///
    /// A dotted id contributes its qualifier as a member and is emitted without it; an undotted id is emitted as-is
    /// (alias prefix removed).
    pub fn member_path<'id>(&mut self, id: &'id str) -> &'id str {
        match qualified_id::qualifier(id) {
            Some(member) => {
                self.add_member(member);
                qualified_id::unqualified(id)
            }
            None => qualified_id::unwrap_alias(id),
        }
    }

    pub fn register_parameters(&mut self, function_id: &str, parameters: Vec<String>) {
        self.parameters.insert(function_id.to_string(), parameters);
    }

    pub fn parameters(&self, function_id: &str) -> &[String] {
        self.parameters.get(function_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record and log a non-fatal problem.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(kind = warning.kind.as_str(), node = ?warning.node_id, "{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warn_placeholder(&mut self, what: &str, severity: impl std::fmt::Display, node_id: &str) {
        let message = format!("{what} placeholder ({severity}) left in document");
        self.warn(Warning::new(WarningKind::Placeholder, message).at(node_id));
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Restart thread numbering; called at the start of every method.
    pub fn reset_threads(&mut self) {
        self.next_thread = 0;
    }

    /// Allocate the next thread variable name (`t0`, `t1`, ...) of the current method.
    pub fn next_thread_name(&mut self) -> String {
        let name = format!("t{}", self.next_thread);
        self.next_thread += 1;
        name
    }
}

//! Non-fatal diagnostics collected during a generation run.
//!
//! Anything that does not stop generation (a call made outside a function, an unresolved call target, an unknown
//! node kind, a leftover placeholder) becomes a [`Warning`]. Warnings are returned next to the generated code and are
//! also logged with `tracing::warn!` at the point they are raised.

use std::fmt;

/// Category of a [`Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A node whose `kind` the model does not know; nothing was emitted for it.
    UnknownNode,
    /// A function call whose callee id does not name a function definition.
    UnresolvedCallTarget,
    /// A call encountered while no function was being walked.
    CallOutsideFunction,
    /// An editor placeholder left in the document.
    Placeholder,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningKind::UnknownNode => "unknown node",
            WarningKind::UnresolvedCallTarget => "unresolved call target",
            WarningKind::CallOutsideFunction => "call outside function",
            WarningKind::Placeholder => "placeholder",
        }
    }
}

/// A non-fatal problem found while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    /// Id of the offending node, when it has one.
    pub node_id: Option<String>,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn at(mut self, node_id: impl Into<String>) -> Self {
        let node_id = node_id.into();
        if !node_id.is_empty() {
            self.node_id = Some(node_id);
        }
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)?;
        if let Some(id) = &self.node_id {
            write!(f, " (node `{id}`)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_node() {
        let w = Warning::new(WarningKind::UnresolvedCallTarget, "`lib.missing` is not a function").at("call-7");
        assert_eq!(
            w.to_string(),
            "unresolved call target: `lib.missing` is not a function (node `call-7`)"
        );
    }

    #[test]
    fn empty_node_id_is_dropped() {
        let w = Warning::new(WarningKind::UnknownNode, "statement").at("");
        assert_eq!(w.node_id, None);
        assert_eq!(w.to_string(), "unknown node: statement");
    }
}

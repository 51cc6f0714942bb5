//! Call-hierarchy resolution.
//!
//! Starting from the program's entry point, functions are discovered depth-first by following `functionCall`
//! statements. The result maps every reachable function to the functions it calls directly, both in first-discovery
//! order with the entry function first. Each function is walked once, so recursive and mutually recursive sequences
//! terminate. Pending callees live on an explicit work stack, so the length of a call chain is not bounded by the
//! native stack.
//!
//! ## Notes
//! - Only function-kind calls are followed; operation calls and generic calls target instances outside the program.
//! - Problems that do not prevent generation (unresolved callee, call outside a function) are recorded as warnings.

use cellgen_syntax::ast::{CallKind, CallStatement, Definition, FunctionDefinition, Program};
use cellgen_syntax::visit::{self, VisitControl, Visitor};
use indexmap::{IndexMap, IndexSet};
use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics::{Warning, WarningKind};

/// The entry point cannot start generation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    #[error("entry point `{entry_point}` does not name any definition")]
    #[diagnostic(
        code(cellgen::resolve::entry_point_not_found),
        help("set `entryPoint` to the id of one of the program's function definitions")
    )]
    EntryPointNotFound { entry_point: String },

    #[error("entry point `{entry_point}` names a definition that is not a function")]
    #[diagnostic(
        code(cellgen::resolve::entry_point_not_a_function),
        help("generation starts from a function; instance definitions cannot be entry points")
    )]
    EntryPointNotAFunction { entry_point: String },
}

/// A reachable function and the ids of the functions it calls directly.
#[derive(Debug, Clone)]
struct HierarchyEntry<'ast> {
    function: &'ast FunctionDefinition,
    callees: IndexSet<&'ast str>,
}

/// Reachable call graph of a program.
#[derive(Debug, Clone)]
pub struct CallHierarchy<'ast> {
    entry: &'ast FunctionDefinition,
    entries: IndexMap<&'ast str, HierarchyEntry<'ast>>,
    warnings: Vec<Warning>,
}

impl<'ast> CallHierarchy<'ast> {
    /// Resolve the call hierarchy of `program`.
    ///
    /// ## Errors
    /// - [`ResolveError`] if `entryPoint` does not name a function definition. This is checked before any traversal.
    #[tracing::instrument(skip_all, fields(program = %program.id(), entry_point = %program.entry_point))]
    pub fn resolve(program: &'ast Program) -> Result<Self, ResolveError> {
        let entry = match program.find_definition(&program.entry_point) {
            Some(Definition::Function(function)) => function,
            Some(_) => {
                return Err(ResolveError::EntryPointNotAFunction {
                    entry_point: program.entry_point.clone(),
                });
            }
            None => {
                return Err(ResolveError::EntryPointNotFound {
                    entry_point: program.entry_point.clone(),
                });
            }
        };

        let mut resolver = Resolver {
            program,
            entry,
            current: None,
            found: Vec::new(),
            entries: IndexMap::new(),
            warnings: Vec::new(),
        };
        visit::walk_program(&mut resolver, program);
        tracing::debug!(functions = resolver.entries.len(), "resolved call hierarchy");

        Ok(Self {
            entry,
            entries: resolver.entries,
            warnings: resolver.warnings,
        })
    }

    /// The entry function.
    pub fn entry(&self) -> &'ast FunctionDefinition {
        self.entry
    }

    /// Reachable functions in discovery order, entry first.
    pub fn functions(&self) -> impl ExactSizeIterator<Item = &'ast FunctionDefinition> + '_ {
        self.entries.values().map(|e| e.function)
    }

    /// Functions called directly by `id`, in first-call order. Empty if `id` is not reachable.
    pub fn callees(&self, id: &str) -> Vec<&'ast FunctionDefinition> {
        self.entries
            .get(id)
            .map(|entry| {
                entry
                    .callees
                    .iter()
                    .filter_map(|callee| self.entries.get(*callee).map(|e| e.function))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// Depth-first walker filling the hierarchy.
///
/// The walk of one function body only collects its direct callees; descending into them is driven by the work stack
/// in `enter_program`.
struct Resolver<'ast> {
    program: &'ast Program,
    entry: &'ast FunctionDefinition,
    /// Function whose body is being walked.
    current: Option<&'ast str>,
    /// Callees first seen in the current body, in call order.
    found: Vec<&'ast FunctionDefinition>,
    entries: IndexMap<&'ast str, HierarchyEntry<'ast>>,
    warnings: Vec<Warning>,
}

impl Resolver<'_> {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(kind = warning.kind.as_str(), node = ?warning.node_id, "{}", warning.message);
        self.warnings.push(warning);
    }
}

impl<'ast> Visitor<'ast> for Resolver<'ast> {
    fn enter_program(&mut self, _program: &'ast Program) -> VisitControl {
        // Only what the entry point reaches belongs to the hierarchy.
        let mut pending = vec![self.entry];
        while let Some(function) = pending.pop() {
            visit::walk_function_definition(self, function);
            // Reversed so the first call is popped first, giving preorder discovery.
            pending.extend(self.found.drain(..).rev());
        }
        VisitControl::SkipChildren
    }

    fn enter_function_definition(&mut self, function: &'ast FunctionDefinition) -> VisitControl {
        let id = function.id();
        if self.entries.contains_key(id) {
            return VisitControl::SkipChildren;
        }
        self.entries.insert(
            id,
            HierarchyEntry {
                function,
                callees: IndexSet::new(),
            },
        );
        self.current = Some(id);
        VisitControl::Continue
    }

    fn leave_function_definition(&mut self, _function: &'ast FunctionDefinition) {
        self.current = None;
    }

    fn enter_call_statement(&mut self, kind: CallKind, call: &'ast CallStatement) -> VisitControl {
        let Some(caller) = self.current else {
            self.warn(
                Warning::new(
                    WarningKind::CallOutsideFunction,
                    format!("call to `{}` is not inside a function", call.callee_id),
                )
                .at(&call.meta.id),
            );
            return VisitControl::SkipChildren;
        };
        if kind != CallKind::Function {
            return VisitControl::SkipChildren;
        }

        let Some(callee) = self.program.find_function(&call.callee_id) else {
            self.warn(
                Warning::new(
                    WarningKind::UnresolvedCallTarget,
                    format!("`{}` does not name a function definition", call.callee_id),
                )
                .at(&call.meta.id),
            );
            return VisitControl::SkipChildren;
        };

        let first_edge = self
            .entries
            .get_mut(caller)
            .is_some_and(|entry| entry.callees.insert(callee.id()));
        if first_edge {
            self.found.push(callee);
        }
        VisitControl::SkipChildren
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn program(definitions: serde_json::Value, entry: &str) -> Program {
        serde_json::from_value(json!({"id": "cell.P", "entryPoint": entry, "definitions": definitions})).unwrap()
    }

    fn call(callee: &str) -> serde_json::Value {
        json!({"kind": "functionCall", "id": format!("call-{callee}"), "calleeId": callee})
    }

    fn function(id: &str, statements: serde_json::Value) -> serde_json::Value {
        json!({"kind": "function", "id": id, "statements": statements})
    }

    fn ids<'a>(functions: impl Iterator<Item = &'a FunctionDefinition>) -> Vec<&'a str> {
        functions.map(|f| f.id()).collect()
    }

    #[test]
    fn entry_first_then_discovery_order() {
        let p = program(
            json!([
                function("b", json!([])),
                function("main", json!([call("a"), call("b")])),
                function("a", json!([call("b")])),
                function("unreached", json!([])),
            ]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(ids(h.functions()), vec!["main", "a", "b"]);
        assert_eq!(h.entry().id(), "main");
        assert_eq!(ids(h.callees("main").into_iter()), vec!["a", "b"]);
        assert_eq!(ids(h.callees("a").into_iter()), vec!["b"]);
        assert!(!h.contains("unreached"));
    }

    #[test]
    fn recursion_terminates() {
        let p = program(
            json!([
                function("main", json!([call("main"), call("ping")])),
                function("ping", json!([call("pong")])),
                function("pong", json!([call("ping")])),
            ]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(ids(h.functions()), vec!["main", "ping", "pong"]);
        assert_eq!(ids(h.callees("main").into_iter()), vec!["main", "ping"]);
        assert_eq!(ids(h.callees("pong").into_iter()), vec!["ping"]);
    }

    #[test]
    fn repeated_calls_record_one_edge() {
        let p = program(
            json!([function("main", json!([call("f"), call("f")])), function("f", json!([]))]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(h.callees("main").len(), 1);
    }

    #[test]
    fn operation_calls_are_not_followed() {
        let p = program(
            json!([
                function("main", json!([{"kind": "operationCall", "calleeId": "helper"}])),
                function("helper", json!([])),
            ]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(h.len(), 1);
        assert!(h.warnings().is_empty());
    }

    #[test]
    fn calls_nested_in_control_flow_are_found() {
        let p = program(
            json!([
                function("main", json!([{
                    "kind": "parallel",
                    "branches": [{"id": "b1", "statements": [{
                        "kind": "while",
                        "condition": {"kind": "instance", "instanceId": "running"},
                        "statements": [call("inner")]
                    }]}]
                }])),
                function("inner", json!([])),
            ]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(ids(h.functions()), vec!["main", "inner"]);
    }

    #[test]
    fn unresolved_callee_warns_without_edge() {
        let p = program(
            json!([function("main", json!([call("lib.missing")])), {"kind": "instance_def", "id": "Robot1"}]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert!(h.callees("main").is_empty());
        assert_eq!(h.warnings().len(), 1);
        assert_eq!(h.warnings()[0].kind, WarningKind::UnresolvedCallTarget);
        assert_eq!(h.warnings()[0].node_id.as_deref(), Some("call-lib.missing"));
    }

    #[test]
    fn missing_entry_point_is_typed() {
        let p = program(json!([function("main", json!([]))]), "nope");
        assert_eq!(
            CallHierarchy::resolve(&p).unwrap_err(),
            ResolveError::EntryPointNotFound {
                entry_point: "nope".to_string()
            }
        );
    }

    #[test]
    fn instance_entry_point_is_typed() {
        let p = program(json!([{"kind": "instance_def", "id": "Robot1"}]), "Robot1");
        assert!(matches!(
            CallHierarchy::resolve(&p),
            Err(ResolveError::EntryPointNotAFunction { .. })
        ));
    }

    #[test]
    fn call_outside_function_warns() {
        let p = program(json!([function("main", json!([]))]), "main");
        let mut resolver = Resolver {
            program: &p,
            entry: p.find_function("main").unwrap(),
            current: None,
            found: Vec::new(),
            entries: IndexMap::new(),
            warnings: Vec::new(),
        };
        let stray = CallStatement {
            meta: Default::default(),
            callee_id: "main".to_string(),
            input_arguments: Vec::new(),
        };
        let control = resolver.enter_call_statement(CallKind::Function, &stray);
        assert_eq!(control, VisitControl::SkipChildren);
        assert!(resolver.entries.is_empty());
        assert_eq!(resolver.warnings[0].kind, WarningKind::CallOutsideFunction);
    }

    #[test]
    fn discovery_is_depth_first_preorder() {
        let p = program(
            json!([
                function("main", json!([call("a"), call("b"), call("a")])),
                function("a", json!([call("c")])),
                function("b", json!([call("c")])),
                function("c", json!([])),
            ]),
            "main",
        );
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(ids(h.functions()), vec!["main", "a", "c", "b"]);
        assert_eq!(ids(h.callees("b").into_iter()), vec!["c"]);
    }

    #[test]
    fn long_call_chain_resolves_without_deep_recursion() {
        const DEPTH: usize = 20_000;
        let definitions: Vec<serde_json::Value> = (0..DEPTH)
            .map(|i| {
                let statements = if i + 1 < DEPTH {
                    json!([call(&format!("f{}", i + 1))])
                } else {
                    json!([])
                };
                function(&format!("f{i}"), statements)
            })
            .collect();
        let p = program(serde_json::Value::Array(definitions), "f0");
        let h = CallHierarchy::resolve(&p).unwrap();
        assert_eq!(h.len(), DEPTH);
        assert_eq!(h.functions().last().map(|f| f.id()), Some(format!("f{}", DEPTH - 1).as_str()));
    }
}

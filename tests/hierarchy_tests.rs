//! Call-hierarchy resolution through the public API.

use cellgen::backend::{CallHierarchy, ResolveError};
use cellgen::diagnostics::WarningKind;
use cellgen::document;

fn resolve_ids(json: &str) -> Vec<String> {
    let program = document::from_str(json).expect("decode failed");
    let hierarchy = CallHierarchy::resolve(&program).expect("resolve failed");
    hierarchy.functions().map(|f| f.id().to_string()).collect()
}

#[test]
fn entry_first_then_discovery_order() {
    let ids = resolve_ids(
        r#"{"id": "cell.P", "entryPoint": "main", "definitions": [
            {"kind": "function", "id": "leaf", "statements": []},
            {"kind": "function", "id": "mid", "statements": [{"kind": "functionCall", "calleeId": "leaf"}]},
            {"kind": "function", "id": "main", "statements": [
                {"kind": "functionCall", "calleeId": "mid"},
                {"kind": "functionCall", "calleeId": "other"}
            ]},
            {"kind": "function", "id": "other", "statements": []}
        ]}"#,
    );
    assert_eq!(ids, vec!["main", "mid", "leaf", "other"]);
}

#[test]
fn mutual_recursion_terminates_with_each_function_once() {
    let json = r#"{"id": "cell.P", "entryPoint": "ping", "definitions": [
        {"kind": "function", "id": "ping", "statements": [{"kind": "functionCall", "calleeId": "pong"}]},
        {"kind": "function", "id": "pong", "statements": [{"kind": "functionCall", "calleeId": "ping"}]}
    ]}"#;
    let program = document::from_str(json).unwrap();
    let hierarchy = CallHierarchy::resolve(&program).unwrap();
    assert_eq!(hierarchy.len(), 2);
    let ping_callees: Vec<_> = hierarchy.callees("ping").iter().map(|f| f.id()).collect();
    let pong_callees: Vec<_> = hierarchy.callees("pong").iter().map(|f| f.id()).collect();
    assert_eq!(ping_callees, vec!["pong"]);
    assert_eq!(pong_callees, vec!["ping"]);
}

#[test]
fn calls_nested_in_control_flow_are_followed() {
    let ids = resolve_ids(
        r#"{"id": "cell.P", "entryPoint": "main", "definitions": [
            {"kind": "function", "id": "main", "statements": [
                {"kind": "if", "conditionals": [
                    {"condition": {"kind": "variable", "variableId": "x"},
                     "then": [{"kind": "functionCall", "calleeId": "inIf"}]}
                ], "else": [{"kind": "functionCall", "calleeId": "inElse"}]},
                {"kind": "parallel", "branches": [{"statements": [{"kind": "functionCall", "calleeId": "inBranch"}]}]},
                {"kind": "switch", "expression": {"kind": "variable", "variableId": "m"}, "cases": [
                    {"case": 1, "then": [{"kind": "functionCall", "calleeId": "inCase"}]}
                ]},
                {"kind": "meanWhile", "statements": [{"kind": "functionCall", "calleeId": "inMeanWhile"}]}
            ]},
            {"kind": "function", "id": "inIf", "statements": []},
            {"kind": "function", "id": "inElse", "statements": []},
            {"kind": "function", "id": "inBranch", "statements": []},
            {"kind": "function", "id": "inCase", "statements": []},
            {"kind": "function", "id": "inMeanWhile", "statements": []}
        ]}"#,
    );
    assert_eq!(ids, vec!["main", "inIf", "inElse", "inBranch", "inCase", "inMeanWhile"]);
}

#[test]
fn operation_calls_are_not_followed_even_when_ids_match() {
    let ids = resolve_ids(
        r#"{"id": "cell.P", "entryPoint": "main", "definitions": [
            {"kind": "function", "id": "main", "statements": [
                {"kind": "operationCall", "calleeId": "helper"},
                {"kind": "call", "calleeId": "helper"}
            ]},
            {"kind": "function", "id": "helper", "statements": []}
        ]}"#,
    );
    assert_eq!(ids, vec!["main"]);
}

#[test]
fn entry_point_failures_are_typed() {
    let missing = document::from_str(r#"{"id": "cell.P", "entryPoint": "nope", "definitions": []}"#).unwrap();
    assert_eq!(
        CallHierarchy::resolve(&missing).unwrap_err(),
        ResolveError::EntryPointNotFound {
            entry_point: "nope".to_string()
        }
    );

    let instance = document::from_str(
        r#"{"id": "cell.P", "entryPoint": "Robot1", "definitions": [{"kind": "instance_def", "id": "Robot1"}]}"#,
    )
    .unwrap();
    assert_eq!(
        CallHierarchy::resolve(&instance).unwrap_err(),
        ResolveError::EntryPointNotAFunction {
            entry_point: "Robot1".to_string()
        }
    );
}

#[test]
fn unresolved_callee_warns_and_adds_no_edge() {
    let json = r#"{"id": "cell.P", "entryPoint": "main", "definitions": [
        {"kind": "function", "id": "main", "statements": [{"kind": "functionCall", "id": "c9", "calleeId": "ghost"}]}
    ]}"#;
    let program = document::from_str(json).unwrap();
    let hierarchy = CallHierarchy::resolve(&program).unwrap();
    assert!(hierarchy.callees("main").is_empty());
    assert!(!hierarchy.contains("ghost"));
    assert_eq!(hierarchy.warnings().len(), 1);
    assert_eq!(hierarchy.warnings()[0].kind, WarningKind::UnresolvedCallTarget);
    assert_eq!(hierarchy.warnings()[0].node_id.as_deref(), Some("c9"));
}

#[test]
fn long_call_chain_generates() {
    const DEPTH: usize = 20_000;
    let definitions: Vec<String> = (0..DEPTH)
        .map(|i| {
            let body = if i + 1 < DEPTH {
                format!(r#"[{{"kind": "functionCall", "calleeId": "f{}"}}]"#, i + 1)
            } else {
                "[]".to_string()
            };
            format!(r#"{{"kind": "function", "id": "f{i}", "statements": {body}}}"#)
        })
        .collect();
    let json = format!(
        r#"{{"id": "cell.Chain", "entryPoint": "f0", "definitions": [{}]}}"#,
        definitions.join(",")
    );
    let program = document::from_str(&json).unwrap();

    let source = cellgen::JavaCodegen::new().try_generate(&program).unwrap();
    assert_eq!(source.code.matches("private void f").count(), DEPTH - 1);
    assert!(source.code.contains(&format!("private void f{}() {{\n\t}}", DEPTH - 1)));
}

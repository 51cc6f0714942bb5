//! Golden snapshot tests for codegen
//!
//! These tests generate Java code from `.json` sequence documents and compare
//! the output against stored snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use cellgen::backend::JavaCodegen;
use std::fs;

/// Generate Java code from a sequence document
fn generate_java(source: &str) -> String {
    let generated = JavaCodegen::new().try_generate_str(source).expect("generation failed");
    generated.code
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.json", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_park_cycle_codegen() {
    let source = load_test_file("park_cycle");
    let java_code = generate_java(&source);
    insta::assert_snapshot!("park_cycle", java_code);
}

#[test]
fn test_handover_codegen() {
    let source = load_test_file("handover");
    let java_code = generate_java(&source);
    insta::assert_snapshot!("handover", java_code);
}

#[test]
fn test_sorter_codegen() {
    let source = load_test_file("sorter");
    let java_code = generate_java(&source);
    insta::assert_snapshot!("sorter", java_code);
}

#[test]
fn test_fixtures_generate_without_warnings() {
    for name in ["park_cycle", "handover", "sorter"] {
        let generated = JavaCodegen::new()
            .try_generate_str(&load_test_file(name))
            .expect("generation failed");
        assert!(generated.warnings.is_empty(), "{name}: {:?}", generated.warnings);
    }
}

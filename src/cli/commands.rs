//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use cellgen_syntax::ast::Program;
use cellgen_syntax::document;
use indexmap::IndexSet;

use crate::backend::{CallHierarchy, EmitConfig, GenerationError, JavaCodegen};

use super::{CliError, CliResult, ExitCode};

/// Maximum document size (64 MB)
///
/// Larger files are rejected before they are read.
const MAX_SOURCE_SIZE: u64 = 64 * 1024 * 1024;

// ============================================================================
// Loading
// ============================================================================

/// Read a document with a size check.
///
/// ## Errors
///
/// Returns `CliError` if:
/// - The file cannot be accessed (doesn't exist, permission denied)
/// - The file exceeds `MAX_SOURCE_SIZE` (64 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Document '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Read and decode a sequence document.
pub fn load_program(file_path: &Path) -> CliResult<Program> {
    let source = read_source(file_path)?;
    document::from_str(&source).map_err(|e| CliError::report(GenerationError::from(e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Generate the Java class for a document and write it to `output` (or stdout).
pub fn emit_file(file_path: &Path, output: Option<&Path>, config: EmitConfig) -> CliResult<ExitCode> {
    let program = load_program(file_path)?;
    let generated = JavaCodegen::with_config(config)
        .try_generate(&program)
        .map_err(CliError::report)?;

    // Each warning was logged when raised; the count makes a clean run distinguishable at a glance.
    if !generated.warnings.is_empty() {
        tracing::warn!(
            file = %file_path.display(),
            warnings = generated.warnings.len(),
            "generated with warnings"
        );
    }

    match output {
        Some(out) => {
            fs::write(out, &generated.code)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", out.display(), e)))?;
            tracing::info!(output = %out.display(), "wrote Java class");
        }
        None => print!("{}", generated.code),
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the call hierarchy reachable from the entry point.
pub fn print_hierarchy(file_path: &Path) -> CliResult<ExitCode> {
    let program = load_program(file_path)?;
    let hierarchy = CallHierarchy::resolve(&program).map_err(|e| CliError::report(GenerationError::from(e)))?;
    print!("{}", format_hierarchy(&hierarchy));
    Ok(ExitCode::SUCCESS)
}

/// Decode the document and resolve its entry point.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let program = load_program(file_path)?;
    let hierarchy = CallHierarchy::resolve(&program).map_err(|e| CliError::report(GenerationError::from(e)))?;
    println!(
        "✓ {}: entry point `{}`, {} reachable function(s), {} warning(s)",
        file_path.display(),
        program.entry_point,
        hierarchy.len(),
        hierarchy.warnings().len()
    );
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Hierarchy formatting
// ============================================================================

/// Render a hierarchy as an indented tree rooted at the entry function.
///
/// A function is expanded at its first occurrence only. Later occurrences are marked `(see above)`, and a call back
/// into a function that is still open on the current path is marked `(recursive)`.
pub fn format_hierarchy(hierarchy: &CallHierarchy<'_>) -> String {
    enum Step<'a> {
        Enter(&'a str, usize),
        Leave,
    }

    let mut out = String::new();
    let mut expanded = IndexSet::new();
    let mut path: Vec<&str> = Vec::new();
    let mut steps = vec![Step::Enter(hierarchy.entry().id(), 0)];

    while let Some(step) = steps.pop() {
        let (id, depth) = match step {
            Step::Enter(id, depth) => (id, depth),
            Step::Leave => {
                path.pop();
                continue;
            }
        };

        let marker = if path.contains(&id) {
            " (recursive)"
        } else if !expanded.insert(id) {
            " (see above)"
        } else {
            ""
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(id);
        out.push_str(marker);
        out.push('\n');
        if !marker.is_empty() {
            continue;
        }

        path.push(id);
        steps.push(Step::Leave);
        let callees = hierarchy.callees(id).into_iter().rev();
        steps.extend(callees.map(|callee| Step::Enter(callee.id(), depth + 1)));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

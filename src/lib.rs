#![forbid(unsafe_code)]
//! Cellgen: Java code generation for robot-cell sequence programs
//!
//! A sequence program is a JSON tree of functions, control flow and operation calls on cell instances (robots,
//! grippers, positions). This crate resolves which functions are reachable from the program's entry point and emits
//! them as one Java class whose fields are inferred from the instances the program refers to.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod backend;
pub mod cli;
pub mod diagnostics;

pub use cellgen_syntax::ast;
pub use cellgen_syntax::document;

pub use backend::{EmitConfig, GeneratedSource, GenerationError, JavaCodegen};
pub use diagnostics::{Warning, WarningKind};

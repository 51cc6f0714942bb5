//! Cellgen Compiler Backend
//!
//! This module turns a decoded sequence program into the source of one Java class.
//!
//! The pipeline is:
//! 1. `Program` (from `cellgen_syntax`) → `CallHierarchy` (reachable functions, entry first)
//! 2. `CallHierarchy` → `ProgramEmitter` → Java source, with members inferred along the way
//!
//! ## Module Organization
//!
//! - `codegen.rs` - `JavaCodegen` entry point and `GenerationError`
//! - `hierarchy.rs` - call-hierarchy resolution from the entry point
//! - `emit/` - class, method and statement lowering
//! - `render.rs` - single-line expression rendering
//! - `context.rs` - run-scoped state (members, parameters, warnings, thread names)
//! - `config.rs` - emitter configuration
//! - `java_emitter.rs` - Low-level Java code string builder

pub mod codegen;
pub mod config;
pub mod context;
pub mod emit;
pub mod hierarchy;
pub mod java_emitter;
pub mod render;

pub use codegen::{GeneratedSource, GenerationError, JavaCodegen};
pub use config::{EmitConfig, IndentStyle};
pub use context::GenerationContext;
pub use emit::{EmitError, ProgramEmitter};
pub use hierarchy::{CallHierarchy, ResolveError};

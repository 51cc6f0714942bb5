//! Emit Java source code from a resolved sequence program.
//!
//! This module defines [`ProgramEmitter`] and wires together the submodules that implement the lowering. `mod.rs` is
//! intentionally thin.
//!
//! ## Notes
//! - Emission walks the tree directly with exhaustive matches; every statement kind has exactly one lowering.
//! - Expression text comes from [`crate::backend::render`]; member inference happens as a side effect of rendering
//!   and of call emission, recorded in the run's [`GenerationContext`](crate::backend::context::GenerationContext).
//!
//! ## See also
//! - [`program`]: class shell, fields, constructor and methods
//! - [`statements`]: control-flow lowering
//! - [`calls`]: call statements and their arguments

mod calls;
mod errors;
mod program;
mod statements;

pub use errors::EmitError;

use super::config::EmitConfig;

/// Emit one Java class per program.
///
/// The emitter only holds configuration; all per-run state lives in the context passed to
/// `emit_program()` (implemented in `program.rs`).
#[derive(Debug, Clone, Copy)]
pub struct ProgramEmitter<'a> {
    config: &'a EmitConfig,
}

impl<'a> ProgramEmitter<'a> {
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a EmitConfig {
        self.config
    }
}

//! Sequence-program to Java code generator.
//!
//! [`JavaCodegen`] is the single entry point of the backend. One run:
//!
//! 1. resolves the call hierarchy from the program's entry point (fails early if the entry point is unusable),
//! 2. creates a fresh [`GenerationContext`],
//! 3. emits the class, collecting members and warnings into that context.
//!
//! ## Error Handling
//!
//! The `try_generate*` methods return `Result<_, GenerationError>`. [`JavaCodegen::generate`] is a convenience wrapper
//! that returns an error comment on failure (useful for debugging, not for production).

use cellgen_syntax::SyntaxError;
use cellgen_syntax::ast::Program;
use cellgen_syntax::document;
use miette::Diagnostic;
use thiserror::Error;

use super::config::EmitConfig;
use super::context::GenerationContext;
use super::emit::{EmitError, ProgramEmitter};
use super::hierarchy::{CallHierarchy, ResolveError};
use crate::diagnostics::Warning;

/// Error during Java code generation.
///
/// ## Examples
///
/// ```rust,ignore
/// use cellgen::backend::{GenerationError, JavaCodegen};
///
/// match JavaCodegen::new().try_generate(&program) {
///     Ok(source) => println!("{}", source.code),
///     Err(GenerationError::Resolve(e)) => eprintln!("bad entry point: {e}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error(transparent)]
    #[diagnostic(
        code(cellgen::syntax::invalid_document),
        help("the document must be a JSON object with `id`, `entryPoint` and `definitions`")
    )]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emission(#[from] EmitError),
}

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub code: String,
    /// Non-fatal anomalies, resolver warnings first.
    pub warnings: Vec<Warning>,
}

/// Java code generator for sequence programs.
#[derive(Debug, Clone, Default)]
pub struct JavaCodegen {
    config: EmitConfig,
}

impl JavaCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Generate the Java class for `program`.
    ///
    /// ## Errors
    ///
    /// Returns `GenerationError::Resolve` if the entry point does not name a function, or
    /// `GenerationError::Emission` if a statement cannot be lowered.
    #[tracing::instrument(skip_all, fields(program = program.id()))]
    pub fn try_generate(&self, program: &Program) -> Result<GeneratedSource, GenerationError> {
        let hierarchy = CallHierarchy::resolve(program)?;
        let mut ctx = GenerationContext::new();
        let code = ProgramEmitter::new(&self.config).emit_program(program, &hierarchy, &mut ctx)?;

        let mut warnings = hierarchy.into_warnings();
        warnings.extend(ctx.take_warnings());
        tracing::debug!(warnings = warnings.len(), "generation finished");
        Ok(GeneratedSource { code, warnings })
    }

    /// Decode a JSON document and generate its Java class.
    pub fn try_generate_str(&self, json: &str) -> Result<GeneratedSource, GenerationError> {
        let program = document::from_str(json)?;
        self.try_generate(&program)
    }

    /// Generate Java code, rendering a failure as a `//` comment instead of an error.
    pub fn generate(&self, program: &Program) -> String {
        match self.try_generate(program) {
            Ok(source) => source.code,
            Err(e) => format!("// Generation error: {e}\n"),
        }
    }
}

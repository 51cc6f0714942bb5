//! Loading sequence documents from JSON.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::Program;

/// Failure to turn bytes into a [`Program`].
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid sequence document at line {}, column {}: {source}", source.line(), source.column())]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for SyntaxError {
    fn from(source: serde_json::Error) -> Self {
        SyntaxError::Json { source }
    }
}

/// Decode a program from JSON text.
///
/// ## Errors
/// - [`SyntaxError::Json`] for malformed JSON, missing required fields or an operator outside the DSL vocabulary.
///   Unknown node kinds are *not* errors; they decode to `Unknown` variants.
#[tracing::instrument(skip_all, fields(bytes = json.len()))]
pub fn from_str(json: &str) -> Result<Program, SyntaxError> {
    let program: Program = serde_json::from_str(json)?;
    tracing::debug!(
        program = %program.id(),
        definitions = program.definitions.len(),
        "decoded sequence document"
    );
    Ok(program)
}

/// Decode a program from raw bytes (must be UTF-8 JSON).
pub fn from_slice(bytes: &[u8]) -> Result<Program, SyntaxError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and decode a program from a file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn from_path(path: impl AsRef<Path>) -> Result<Program, SyntaxError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SyntaxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&json)
}

/// Encode a program back to pretty-printed JSON.
pub fn to_string_pretty(program: &Program) -> Result<String, SyntaxError> {
    Ok(serde_json::to_string_pretty(program)?)
}

//! Define error types for Java emission.
//!
//! These errors abort a run: no partial class text is returned when one is raised.

use miette::Diagnostic;
use thiserror::Error;

/// Error during Java emission.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    /// A statement kind the model declares but the emitter has no Java lowering for.
    #[error("`{kind}` statement `{node_id}` cannot be lowered to Java")]
    #[diagnostic(
        code(cellgen::emit::unsupported),
        help("assignments and value changes are not supported by the Java backend; express them as operation calls")
    )]
    Unsupported { kind: &'static str, node_id: String },

    /// The program id yields an empty class name and no override was configured.
    #[error("cannot derive a Java class name from program id `{program_id}`")]
    #[diagnostic(
        code(cellgen::emit::missing_class_name),
        help("give the program a dotted `id` or pass an explicit class name")
    )]
    MissingClassName { program_id: String },
}

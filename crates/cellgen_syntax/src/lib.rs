//! Node model and traversal for work-cell sequence documents.
//!
//! This crate is dependency-light and shared by the generator and its tooling (CLI, fuzzing).
//!
//! ## Notes
//! - This crate is "syntax-only": it decodes and walks trees, it does not resolve calls or emit code.
//! - Operator identity comes from the `cellgen_core::lang::operators` registry.
//!
//! ## Examples
//! ```rust
//! use cellgen_syntax::document;
//!
//! let program = document::from_str(
//!     r#"{"id":"cell.Main","entryPoint":"main","definitions":[{"kind":"function","id":"main","statements":[]}]}"#,
//! )
//! .unwrap();
//! assert_eq!(program.definitions.len(), 1);
//! ```

pub mod ast;
pub mod document;
pub mod visit;

pub use document::SyntaxError;

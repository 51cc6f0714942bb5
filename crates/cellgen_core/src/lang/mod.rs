//! Work-cell DSL vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`operators::OperatorId`]) and look up spellings/metadata via registry
//! tables instead of matching on raw strings scattered across the generator.
//!
//! ## Examples
//! ```rust
//! use cellgen_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("neq"), Some(OperatorId::NotEq));
//! assert_eq!(operators::java_spelling(OperatorId::NotEq), "!=");
//! ```

pub mod literals;
pub mod operators;

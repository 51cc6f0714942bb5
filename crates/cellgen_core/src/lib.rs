//! Provide the shared, pure vocabulary of the work-cell sequencing DSL for the cellgen generator.
//!
//! This crate is intentionally small and dependency-free. It holds the deterministic rules that both the syntax crate
//! (when decoding documents) and the generator (when emitting Java) must agree on:
//!
//! - [`lang::operators`]: the DSL operator spellings and their Java spellings,
//! - [`qualified_id`]: how dotted/aliased ids split into qualifier, unqualified path and simple name,
//! - [`lang::literals`]: literal text shared by renderer and tests.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no AST types.

pub mod lang;
pub mod qualified_id;

//! Operator vocabulary.
//!
//! This module defines the closed set of operators the sequencing DSL allows inside conditions, together with the
//! Java spelling each one lowers to.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - An operator may be written with several DSL spellings (`and` and `&` are the same operator). The Java spelling is
//!   a function of the [`OperatorId`] only, so translation never looks at surrounding text.
//! - `-` is the only arithmetic operator in the DSL and exists solely in prefix form.
//!
//! ## Examples
//! ```rust
//! use cellgen_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("and"), Some(OperatorId::And));
//! assert_eq!(operators::from_str("&"), Some(OperatorId::And));
//! assert_eq!(operators::java_spelling(OperatorId::And), "&&");
//! ```

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Logical
    And,
    Or,
    Not,

    // Comparison
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Arithmetic
    Negate,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings[0]` is the canonical DSL spelling; the rest are accepted synonyms.
/// - `java` is the single spelling emitted for this operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub java: &'static str,
    pub fixity: Fixity,
}

impl OperatorInfo {
    /// Canonical DSL spelling (used when re-serializing documents).
    pub fn canonical(&self) -> &'static str {
        self.spellings[0]
    }
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Logical (the single-character forms are legacy editor output)
    op(OperatorId::And, &["and", "&"], "&&", Fixity::Infix),
    op(OperatorId::Or, &["or", "|"], "||", Fixity::Infix),
    op(OperatorId::Not, &["not", "!"], "!", Fixity::Prefix),
    // Comparison
    op(OperatorId::Eq, &["eq", "=="], "==", Fixity::Infix),
    op(OperatorId::NotEq, &["neq", "!="], "!=", Fixity::Infix),
    op(OperatorId::Gt, &["gt", ">"], ">", Fixity::Infix),
    op(OperatorId::GtEq, &["gte", ">="], ">=", Fixity::Infix),
    op(OperatorId::Lt, &["lt", "<"], "<", Fixity::Infix),
    op(OperatorId::LtEq, &["lte", "<="], "<=", Fixity::Infix),
    // Arithmetic
    op(OperatorId::Negate, &["-"], "-", Fixity::Prefix),
];

/// Return the full metadata entry for an operator.
///
/// ## Parameters
/// - `id`: Operator identifier.
///
/// ## Returns
/// - The associated [`OperatorInfo`] from [`OPERATORS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve a DSL operator spelling to its identifier.
///
/// ## Parameters
/// - `spelling`: Candidate operator token as it appears in a document.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&spelling)
        })
        .map(|o| o.id)
}

/// Resolve a spelling, accepting it only when the operator has the requested fixity.
///
/// `-` is prefix-only, so `from_str_with_fixity("-", Fixity::Infix)` is `None`.
pub fn from_str_with_fixity(spelling: &str, fixity: Fixity) -> Option<OperatorId> {
    from_str(spelling).filter(|id| info_for(*id).fixity == fixity)
}

/// Return the Java spelling for an operator.
pub fn java_spelling(id: OperatorId) -> &'static str {
    info_for(id).java
}

/// Return the canonical DSL spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical()
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spellings: &'static [&'static str], java: &'static str, fixity: Fixity) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        java,
        fixity,
    }
}

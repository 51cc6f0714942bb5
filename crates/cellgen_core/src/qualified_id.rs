//! Qualified-id rules.
//!
//! Ids in a sequence document are dot-separated paths (`sqmain.SqMainParkPos__1`), optionally prefixed by an alias
//! that ends at the last `=` (`alias=Robot1.moveTo`). Every consumer (resolver, renderer, emitter) splits ids through
//! the helpers here so the rules stay in one place:
//!
//! | helper          | `a=pkg.Robot1.move` |
//! |-----------------|---------------------|
//! | [`unwrap_alias`]| `pkg.Robot1.move`   |
//! | [`qualifier`]   | `Some("pkg")`       |
//! | [`unqualified`] | `Robot1.move`       |
//! | [`simple_name`] | `move`              |
//!
//! ## Notes
//! - The qualifier is the **first** segment and the unqualified form drops only that segment; the simple name is the
//!   **last** segment. For two-segment ids the unqualified form and the simple name coincide.

/// Separates path segments.
pub const PATH_SEPARATOR: char = '.';

/// Ends an alias prefix.
pub const ALIAS_DELIMITER: char = '=';

/// Strip an alias prefix: everything up to and including the last `=`.
pub fn unwrap_alias(id: &str) -> &str {
    match id.rfind(ALIAS_DELIMITER) {
        Some(pos) => &id[pos + ALIAS_DELIMITER.len_utf8()..],
        None => id,
    }
}

/// The last path segment of the alias-unwrapped id.
pub fn simple_name(id: &str) -> &str {
    let id = unwrap_alias(id);
    match id.rfind(PATH_SEPARATOR) {
        Some(pos) => &id[pos + PATH_SEPARATOR.len_utf8()..],
        None => id,
    }
}

/// The first path segment of a dotted id, or `None` for undotted ids.
///
/// An empty leading segment (`.foo`) is not a qualifier.
pub fn qualifier(id: &str) -> Option<&str> {
    let id = unwrap_alias(id);
    match id.find(PATH_SEPARATOR) {
        Some(0) | None => None,
        Some(pos) => Some(&id[..pos]),
    }
}

/// The alias-unwrapped id without its first path segment (the id itself when undotted).
pub fn unqualified(id: &str) -> &str {
    let id = unwrap_alias(id);
    match id.find(PATH_SEPARATOR) {
        Some(pos) => &id[pos + PATH_SEPARATOR.len_utf8()..],
        None => id,
    }
}

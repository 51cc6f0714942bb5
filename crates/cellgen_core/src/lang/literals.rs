//! Literal text that the expression renderer emits and the tests assert against.

/// Rendered in place of a robot-at-position expression that has no instance attached.
pub const UNKNOWN_POSITION: &str = "<unknown position>";

/// Simple type names whose constants are emitted as quoted Java string literals.
pub const STRING_TYPE_NAMES: &[&str] = &["string", "String"];

/// Java spelling of a JSON `null` constant.
pub const NULL: &str = "null";

/// Whether a (simple) type name denotes a string type.
pub fn is_string_type(simple_name: &str) -> bool {
    STRING_TYPE_NAMES.contains(&simple_name)
}

/// Quote and escape `text` as a Java string literal.
///
/// Only the escapes Java requires for source text are produced (`\\`, `\"`, `\n`, `\r`, `\t`); other characters are
/// kept as-is because Java source is UTF-16 aware.
pub fn java_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_escapes_quotes_and_backslashes() {
        assert_eq!(java_string_literal(r#"a "b" \c"#), r#""a \"b\" \\c""#);
    }

    #[test]
    fn string_literal_escapes_control_whitespace() {
        assert_eq!(java_string_literal("x\ny\tz"), r#""x\ny\tz""#);
    }

    #[test]
    fn string_type_names_are_case_exact() {
        assert!(is_string_type("string"));
        assert!(is_string_type("String"));
        assert!(!is_string_type("STRING"));
    }
}

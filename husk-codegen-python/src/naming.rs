//! Python naming conventions.

use husk_codegen::Access;

/// Python keywords that cannot be used as identifiers.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Mangle a member name by access level: protected members gain a single
/// leading underscore, private members a double. Public and unrecognized
/// access levels leave the name unchanged.
pub fn mangle(access: &str, name: &str) -> String {
    match Access::parse(access) {
        Access::Public => name.to_string(),
        Access::Protected => format!("_{name}"),
        Access::Private => format!("__{name}"),
    }
}

/// Display name for a field list entry: public fields are shown with the
/// first character upper-cased, non-public fields mangle like methods.
/// The casing applies to fields only; method names are never capitalized.
pub fn field_display_name(access: &str, name: &str) -> String {
    match Access::parse(access) {
        Access::Public => capitalize(name),
        Access::Protected | Access::Private => mangle(access, name),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// True when `name` is a valid Python identifier and not a keyword.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !PYTHON_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mangle_by_access() {
        assert_eq!(mangle("public", "run"), "run");
        assert_eq!(mangle("protected", "run"), "_run");
        assert_eq!(mangle("private", "run"), "__run");
    }

    #[test]
    fn test_mangle_unrecognized_access_is_public() {
        assert_eq!(mangle("", "run"), "run");
        assert_eq!(mangle("internal", "run"), "run");
    }

    #[test]
    fn test_field_display_name() {
        assert_eq!(field_display_name("public", "x"), "X");
        assert_eq!(field_display_name("public", "width"), "Width");
        assert_eq!(field_display_name("protected", "y"), "_y");
        assert_eq!(field_display_name("private", "z"), "__z");
        assert_eq!(field_display_name("whatever", "x"), "X");
    }

    #[test]
    fn test_is_identifier_valid() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("__init__"));
        assert!(is_identifier("snake_case_2"));
    }

    #[test]
    fn test_is_identifier_invalid() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("kebab-case"));
        assert!(!is_identifier("class"));
        assert!(!is_identifier("lambda"));
    }
}

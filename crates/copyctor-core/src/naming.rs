//! Name derivation for generated constructor code.

/// Accessor name for a field: `is` + capitalized name for booleans,
/// `get` + capitalized name otherwise.
#[must_use]
pub fn accessor_name(field: &str, is_boolean: bool) -> String {
    let prefix = if is_boolean { "is" } else { "get" };

    format!("{prefix}{}", capitalize(field))
}

/// Constructor parameter name: the class name with its first character lower-cased.
#[must_use]
pub fn parameter_name(class: &str) -> String {
    let mut chars = class.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// upper-case the first character only; the rest is kept verbatim
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

///
/// TESTS
///

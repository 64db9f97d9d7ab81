//! Word splitting and case conversion for property names.
//!
//! A word boundary sits before an uppercase letter (never the first
//! character) when either:
//!
//! - the previous character is neither uppercase nor `_` (`fooBar`), or
//! - the previous character is uppercase and the next one is lowercase,
//!   which closes an acronym (`XMLParser` → `XML`, `Parser`).
//!
//! Digits and underscores never open a boundary, and existing underscores are
//! kept inside their word.

use heck::ToLowerCamelCase;

/// Split a property name into its camel case words.
///
/// The returned slices borrow from `name` and concatenate back to it.
pub fn split_camel_case(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, c) = chars[i];
        if !c.is_ascii_uppercase() {
            continue;
        }

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);
        if opens_word(prev, next) {
            parts.push(&name[start..offset]);
            start = offset;
        }
    }

    if start < name.len() {
        parts.push(&name[start..]);
    }

    parts
}

/// Whether an uppercase letter between `prev` and `next` starts a new word.
fn opens_word(prev: char, next: Option<char>) -> bool {
    if prev == '_' {
        false
    } else if prev.is_ascii_uppercase() {
        next.is_some_and(|n| n.is_ascii_lowercase())
    } else {
        true
    }
}

/// Convert a property name to snake_case.
///
/// Idempotent: the output has no uppercase letters, so converting it again
/// finds no boundaries.
pub fn to_snake_case(name: &str) -> String {
    split_camel_case(name)
        .iter()
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Re-join a delimited field name into a lowerCamelCase property name.
pub fn to_property_name(field_name: &str) -> String {
    field_name.to_lower_camel_case()
}

// ============================================================================
// Tests
// ============================================================================

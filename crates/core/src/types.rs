//! Core types used throughout the field naming crates

use crate::error::{NamingError, NamingResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Embedding Metadata
// ============================================================================

/// Metadata attached to an embedded property.
///
/// The prefix is used verbatim by strategies. It is expected to already be a
/// lowercase token; an empty prefix means the nested fields are not prefixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub prefix: String,
}

impl Embedded {
    /// Create embedding metadata with the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Embedding metadata without a prefix
    pub fn unprefixed() -> Self {
        Self::default()
    }

    /// Whether a non-empty prefix is set
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }
}

// ============================================================================
// Identifier Checks
// ============================================================================

/// Check if a string is a property identifier the strategies accept:
/// non-empty, ASCII letters, digits and underscores only.
pub fn is_valid_identifier(s: &str) -> bool {
    validate_identifier(s).is_ok()
}

/// Validate a property identifier, describing the first problem found.
pub fn validate_identifier(s: &str) -> NamingResult<()> {
    if s.is_empty() {
        return Err(NamingError::invalid_identifier(s, "name cannot be empty"));
    }

    match s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        Some(c) => Err(NamingError::invalid_identifier(
            s,
            format!("unexpected character '{}'", c),
        )),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================

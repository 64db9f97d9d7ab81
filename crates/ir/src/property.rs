//! Property definitions for entity fields
//!
//! A `Property` is the declared member of an entity. Its persisted field
//! name is derived by a naming strategy.

use fieldname_core::{Embedded, PersistentProperty, validate_identifier};
use fieldname_core::{NamingResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Property
// ============================================================================

/// A persistent property of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name as declared (any case style)
    pub name: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Embedding metadata, present for nested value properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}

impl Property {
    /// Create a plain property
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            embedded: None,
            description: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the property as embedded without a prefix
    pub fn embedded_unprefixed(mut self) -> Self {
        self.embedded = Some(Embedded::unprefixed());
        self
    }

    /// Mark the property as embedded with the given prefix
    pub fn embedded_with(mut self, prefix: impl Into<String>) -> Self {
        self.embedded = Some(Embedded::new(prefix));
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PersistentProperty for Property {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    fn embedded(&self) -> Option<&Embedded> {
        self.embedded.as_ref()
    }
}

impl Validatable for Property {
    fn validate(&self) -> NamingResult<()> {
        validate_identifier(&self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Entity definitions
//!
//! An `Entity` groups the properties of one persisted type and resolves
//! them to field names with a naming strategy.

use fieldname_core::{FieldNamingStrategy, NamingError, NamingResult, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::property::Property;

// ============================================================================
// Entity
// ============================================================================

/// A persisted type and its properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name (e.g. "Person")
    pub name: String,

    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A property paired with the field name a strategy derived for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub property: String,
    pub field: String,
}

impl Entity {
    /// Create an entity without properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Builder: append a property
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a property
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Find a property by its declared name
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Resolve every property to its field name.
    ///
    /// Fails when two properties end up with the same field name, which
    /// happens for pairs like `fooBar` and `foo_bar` under snake case.
    pub fn resolve(&self, strategy: &dyn FieldNamingStrategy) -> NamingResult<Vec<ResolvedField>> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut resolved = Vec::with_capacity(self.properties.len());

        for property in &self.properties {
            let field = strategy.field_name(property);

            if let Some(first) = seen.get(&field) {
                return Err(NamingError::DuplicateFieldName {
                    entity: self.name.clone(),
                    field,
                    first: first.to_string(),
                    second: property.name.clone(),
                });
            }

            tracing::debug!("{}.{} -> {}", self.name, property.name, field);
            seen.insert(field.clone(), &property.name);
            resolved.push(ResolvedField {
                property: property.name.clone(),
                field,
            });
        }

        Ok(resolved)
    }
}

impl Validatable for Entity {
    fn validate(&self) -> NamingResult<()> {
        if self.name.trim().is_empty() {
            return Err(NamingError::entity_validation(
                &self.name,
                "Entity name cannot be empty",
            ));
        }

        let mut names = HashSet::new();
        for property in &self.properties {
            property.validate()?;

            if !names.insert(property.name.as_str()) {
                return Err(NamingError::DuplicateProperty {
                    entity: self.name.clone(),
                    property: property.name.clone(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Mapping definitions
//!
//! A `MappingFile` is the root document: the naming configuration and the
//! entities it applies to.

use fieldname_core::{FieldNamingStrategy, NamingResult, Validatable};
use fieldname_naming::NamingStrategyKind;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ResolvedField};
use crate::{NamingError, SCHEMA_VERSION};

// ============================================================================
// Naming Configuration
// ============================================================================

/// Naming settings of a mapping file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Strategy applied to every entity
    #[serde(default)]
    pub strategy: NamingStrategyKind,
}

// ============================================================================
// MappingFile
// ============================================================================

/// Root of a mapping file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    /// Schema version for migration purposes
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub entities: Vec<Entity>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Field names of one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntity {
    pub entity: String,
    pub fields: Vec<ResolvedField>,
}

impl MappingFile {
    /// Create an empty mapping using the given strategy
    pub fn new(strategy: NamingStrategyKind) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            naming: NamingConfig { strategy },
            entities: Vec::new(),
        }
    }

    /// Builder: append an entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Find an entity by name
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Resolve every entity with the configured strategy
    pub fn resolve(&self) -> NamingResult<Vec<ResolvedEntity>> {
        self.resolve_with(self.naming.strategy.strategy().as_ref())
    }

    /// Resolve every entity with an explicit strategy
    pub fn resolve_with(
        &self,
        strategy: &dyn FieldNamingStrategy,
    ) -> NamingResult<Vec<ResolvedEntity>> {
        self.entities
            .iter()
            .map(|entity| {
                Ok(ResolvedEntity {
                    entity: entity.name.clone(),
                    fields: entity.resolve(strategy)?,
                })
            })
            .collect()
    }
}

impl Default for MappingFile {
    fn default() -> Self {
        Self::new(NamingStrategyKind::default())
    }
}

impl Validatable for MappingFile {
    fn validate(&self) -> NamingResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(NamingError::InvalidMappingFormat(format!(
                "Unsupported schema version {} (latest is {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        let mut names = std::collections::HashSet::new();
        for entity in &self.entities {
            entity.validate()?;
            if !names.insert(entity.name.as_str()) {
                return Err(NamingError::entity_validation(
                    &entity.name,
                    "Entity is declared more than once",
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Error types for the field naming crates
//!
//! Conversion itself is total and never fails. Errors come from the layers
//! around it: identifier validation, mapping files, and strategy selection.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for field naming
#[derive(Debug, Error)]
pub enum NamingError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A property name outside the accepted identifier alphabet
    #[error("Invalid property name '{name}': {message}")]
    InvalidIdentifier { name: String, message: String },

    /// Entity validation failed
    #[error("Entity validation failed for '{entity}': {message}")]
    EntityValidation { entity: String, message: String },

    /// Two properties with the same name in one entity
    #[error("Duplicate property name: '{property}' already exists in entity '{entity}'")]
    DuplicateProperty { entity: String, property: String },

    /// Two properties resolving to the same field name
    #[error(
        "Properties '{first}' and '{second}' of entity '{entity}' both map to field '{field}'"
    )]
    DuplicateFieldName {
        entity: String,
        field: String,
        first: String,
        second: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Strategy name not recognised
    #[error("Unknown naming strategy: '{0}'")]
    UnknownStrategy(String),

    // ========================================================================
    // Mapping File Errors
    // ========================================================================
    /// Mapping file does not exist
    #[error("Mapping file not found at path: {0}")]
    MappingNotFound(PathBuf),

    /// Mapping file read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// Mapping file write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Mapping file content could not be parsed or rendered
    #[error("Invalid mapping file format: {0}")]
    InvalidMappingFormat(String),

    /// Underlying IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl NamingError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(name: impl Into<String>, msg: impl Into<String>) -> Self {
        NamingError::InvalidIdentifier {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create an entity validation error
    pub fn entity_validation(entity: impl Into<String>, msg: impl Into<String>) -> Self {
        NamingError::EntityValidation {
            entity: entity.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NamingError::InvalidIdentifier { .. }
                | NamingError::EntityValidation { .. }
                | NamingError::DuplicateProperty { .. }
                | NamingError::DuplicateFieldName { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            NamingError::Io(_)
                | NamingError::MappingNotFound(_)
                | NamingError::FileRead { .. }
                | NamingError::FileWrite { .. }
        )
    }
}

/// Result type alias using NamingError
pub type NamingResult<T> = Result<T, NamingError>;

// ============================================================================
// Tests
// ============================================================================

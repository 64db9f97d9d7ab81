//! # Fieldname IR (Intermediate Representation)
//!
//! The mapping model the naming strategies are applied to.
//!
//! ## Core Concepts
//!
//! - **Property**: A declared member of an entity, optionally embedded
//! - **Entity**: A persisted type whose properties resolve to field names
//! - **MappingFile**: The root document, naming configuration plus entities
//!

// Module declarations
pub mod entity;
pub mod mapping;
pub mod property;
pub mod serialization;

// Re-export commonly used types at crate root
pub use entity::{Entity, ResolvedField};
pub use mapping::{MappingFile, NamingConfig, ResolvedEntity};
pub use property::Property;
pub use serialization::{
    MappingFormat, load_mapping, load_mapping_from_str, save_mapping, save_mapping_to_string,
};

// Re-export core types that are commonly used with IR
pub use fieldname_core::{Embedded, NamingError, NamingResult, Validatable};
pub use fieldname_naming::NamingStrategyKind;

/// Current schema version for mapping files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

//! # Fieldname Core
//!
//! Core types, traits, and error handling for the field naming crates.
//!
//! This crate provides the building blocks shared by the naming strategies,
//! the mapping model and the command line tool:
//!
//! - **Traits**: `PersistentProperty`, `FieldNamingStrategy` and `Validatable`
//! - **Types**: `Embedded` metadata and identifier checks
//! - **Errors**: Unified error handling with `NamingError` and `NamingResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{NamingError, NamingResult};
pub use traits::{FieldNamingStrategy, PersistentProperty, Validatable};
pub use types::{Embedded, is_valid_identifier, validate_identifier};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

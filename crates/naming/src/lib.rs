//! # Fieldname Naming
//!
//! Strategies that derive database field names from property names.
//!
//! ## Strategies
//!
//! - **Snake case**: `fooBar` → `foo_bar`, with embedded prefixes
//!   (`prefix_foo_bar`)
//! - **Camel case splitting**: the general form, any delimiter
//! - **Abbreviating**: first letter of every word (`fooBar` → `fb`)
//! - **Property name**: the declared name, unchanged
//!

// ============================================================================
// Modules
// ============================================================================

pub mod abbreviating;
pub mod case;
pub mod kind;
pub mod property_name;
pub mod snake_case;
pub mod splitting;

// ============================================================================
// Re-exports
// ============================================================================

pub use abbreviating::CamelCaseAbbreviatingFieldNamingStrategy;
pub use case::{split_camel_case, to_property_name, to_snake_case};
pub use kind::NamingStrategyKind;
pub use property_name::PropertyNameFieldNamingStrategy;
pub use snake_case::SnakeCaseFieldNamingStrategy;
pub use splitting::CamelCaseSplittingFieldNamingStrategy;

pub use fieldname_core::{Embedded, FieldNamingStrategy, PersistentProperty};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod test_support {
    use fieldname_core::{Embedded, PersistentProperty};
    use std::cell::Cell;

    /// In-memory property that counts lookups of its embedding metadata.
    pub struct StubProperty {
        pub name: &'static str,
        pub is_embedded: bool,
        pub embedded: Option<Embedded>,
        pub lookups: Cell<usize>,
    }

    impl StubProperty {
        pub fn plain(name: &'static str) -> Self {
            Self {
                name,
                is_embedded: false,
                embedded: None,
                lookups: Cell::new(0),
            }
        }

        pub fn embedded(name: &'static str, prefix: &str) -> Self {
            Self {
                name,
                is_embedded: true,
                embedded: Some(Embedded::new(prefix)),
                lookups: Cell::new(0),
            }
        }

        /// Flagged as embedded but carrying no metadata.
        pub fn embedded_without_metadata(name: &'static str) -> Self {
            Self {
                name,
                is_embedded: true,
                embedded: None,
                lookups: Cell::new(0),
            }
        }
    }

    impl PersistentProperty for StubProperty {
        fn name(&self) -> &str {
            self.name
        }

        fn is_embedded(&self) -> bool {
            self.is_embedded
        }

        fn embedded(&self) -> Option<&Embedded> {
            self.lookups.set(self.lookups.get() + 1);
            self.embedded.as_ref()
        }
    }
}

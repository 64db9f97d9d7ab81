//! Core traits for field naming
//!
//! `PersistentProperty` is the capability a mapping layer hands to a
//! strategy. `FieldNamingStrategy` turns such a property into the name it is
//! persisted under. `Validatable` is implemented by the mapping model.

use crate::error::NamingResult;
use crate::types::Embedded;

// ============================================================================
// PersistentProperty Trait
// ============================================================================

/// A single persistent property as seen by a naming strategy.
///
/// Implementations are owned by the surrounding mapping layer. Strategies
/// only read from them and never retain them.
pub trait PersistentProperty {
    /// The property name as declared, in any case style.
    fn name(&self) -> &str;

    /// Whether the property holds a nested, embedded value.
    fn is_embedded(&self) -> bool;

    /// Embedding metadata attached to the property, if any.
    ///
    /// Strategies only consult this when [`is_embedded`](Self::is_embedded)
    /// returns `true`.
    fn embedded(&self) -> Option<&Embedded>;
}

impl<P: PersistentProperty + ?Sized> PersistentProperty for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_embedded(&self) -> bool {
        (**self).is_embedded()
    }

    fn embedded(&self) -> Option<&Embedded> {
        (**self).embedded()
    }
}

// ============================================================================
// FieldNamingStrategy Trait
// ============================================================================

/// Derives the persisted field name of a property.
///
/// Implementations are stateless: the same property always yields the same
/// name, and nothing is cached between calls.
///
/// # Example
///
/// ```rust,ignore
/// use fieldname_core::{FieldNamingStrategy, PersistentProperty};
///
/// struct Upper;
///
/// impl FieldNamingStrategy for Upper {
///     fn field_name(&self, property: &dyn PersistentProperty) -> String {
///         property.name().to_uppercase()
///     }
/// }
/// ```
pub trait FieldNamingStrategy {
    /// Compute the field name for the given property.
    fn field_name(&self, property: &dyn PersistentProperty) -> String;
}

impl<S: FieldNamingStrategy + ?Sized> FieldNamingStrategy for Box<S> {
    fn field_name(&self, property: &dyn PersistentProperty) -> String {
        (**self).field_name(property)
    }
}

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `NamingError` describing the problem.
    fn validate(&self) -> NamingResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamingError;

    struct Named(&'static str);

    impl PersistentProperty for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn is_embedded(&self) -> bool {
            false
        }

        fn embedded(&self) -> Option<&Embedded> {
            None
        }
    }

    struct Upper;

    impl FieldNamingStrategy for Upper {
        fn field_name(&self, property: &dyn PersistentProperty) -> String {
            property.name().to_uppercase()
        }
    }

    #[test]
    fn test_strategy_through_reference_and_box() {
        let property = Named("fooBar");
        let by_ref = &property;
        let boxed: Box<dyn FieldNamingStrategy> = Box::new(Upper);

        assert_eq!(boxed.field_name(&by_ref), "FOOBAR");
        assert_eq!(by_ref.name(), "fooBar");
        assert!(!by_ref.is_embedded());
        assert!(by_ref.embedded().is_none());
    }

    struct AlwaysInvalid;

    impl Validatable for AlwaysInvalid {
        fn validate(&self) -> NamingResult<()> {
            Err(NamingError::entity_validation("Thing", "never valid"))
        }
    }

    #[test]
    fn test_is_valid_follows_validate() {
        assert!(!AlwaysInvalid.is_valid());
    }
}

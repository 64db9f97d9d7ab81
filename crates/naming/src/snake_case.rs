//! Snake case field naming
//!
//! `fooBar`, `FooBar`, `foo_bar` and `FOO_BAR` all become `foo_bar`. An
//! embedded property with a non-empty prefix becomes `prefix_foo_bar`; the
//! prefix itself is used as given.

use fieldname_core::{FieldNamingStrategy, PersistentProperty};

use crate::splitting::CamelCaseSplittingFieldNamingStrategy;

/// Field naming strategy producing lowercase, underscore separated names.
#[derive(Debug, Clone)]
pub struct SnakeCaseFieldNamingStrategy {
    inner: CamelCaseSplittingFieldNamingStrategy,
}

impl SnakeCaseFieldNamingStrategy {
    pub fn new() -> Self {
        Self {
            inner: CamelCaseSplittingFieldNamingStrategy::new("_"),
        }
    }

    /// Convert a raw property name, ignoring embedding.
    pub fn convert(&self, name: &str) -> String {
        self.inner.convert(name)
    }
}

impl Default for SnakeCaseFieldNamingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldNamingStrategy for SnakeCaseFieldNamingStrategy {
    fn field_name(&self, property: &dyn PersistentProperty) -> String {
        self.inner.field_name(property)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::to_snake_case;
    use crate::test_support::StubProperty;
    use fieldname_core::Embedded;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn assert_field_name_for_property_name(property_name: &'static str, field_name: &str) {
        let strategy = SnakeCaseFieldNamingStrategy::new();
        let property = StubProperty::plain(property_name);
        assert_eq!(strategy.field_name(&property), field_name);
    }

    #[test]
    fn test_renders_snake_case_field_names() {
        assert_field_name_for_property_name("fooBar", "foo_bar");
        assert_field_name_for_property_name("FooBar", "foo_bar");
        assert_field_name_for_property_name("foo_bar", "foo_bar");
        assert_field_name_for_property_name("FOO_BAR", "foo_bar");
    }

    #[test]
    fn test_embedded_without_prefix() {
        let strategy = SnakeCaseFieldNamingStrategy::new();
        let property = StubProperty::embedded("propertyName", "");
        assert_eq!(strategy.field_name(&property), "property_name");
    }

    #[test]
    fn test_embedded_with_prefix() {
        let strategy = SnakeCaseFieldNamingStrategy::new();
        let property = StubProperty::embedded("propertyName", "prefix");
        assert_eq!(strategy.field_name(&property), "prefix_property_name");
    }

    #[test]
    fn test_prefix_is_used_verbatim() {
        let strategy = SnakeCaseFieldNamingStrategy::new();
        let property = StubProperty::embedded("city", "homeAddress");
        assert_eq!(strategy.field_name(&property), "homeAddress_city");
    }

    #[test]
    fn test_non_embedded_never_looks_up_metadata() {
        let strategy = SnakeCaseFieldNamingStrategy::new();
        let property = StubProperty::plain("fooBar");
        strategy.field_name(&property);
        assert_eq!(property.lookups.get(), 0);

        let embedded = StubProperty::embedded("fooBar", "x");
        strategy.field_name(&embedded);
        assert_eq!(embedded.lookups.get(), 1);
    }

    #[test]
    fn test_matches_free_function() {
        let strategy = SnakeCaseFieldNamingStrategy::default();
        for name in ["fooBar", "XMLParser", "address2Line", "FOO_BAR"] {
            assert_eq!(strategy.convert(name), to_snake_case(name));
        }
    }

    #[test]
    fn test_is_idempotent() {
        let strategy = SnakeCaseFieldNamingStrategy::new();
        for name in ["fooBar", "FooBar", "foo_bar", "FOO_BAR", "propertyName"] {
            let once = strategy.convert(name);
            assert_eq!(strategy.convert(&once), once);
        }
    }

    struct EmbeddedProperty {
        name: String,
        embedded: Embedded,
    }

    impl PersistentProperty for EmbeddedProperty {
        fn name(&self) -> &str {
            &self.name
        }

        fn is_embedded(&self) -> bool {
            true
        }

        fn embedded(&self) -> Option<&Embedded> {
            Some(&self.embedded)
        }
    }

    proptest! {
        #[test]
        fn prop_prefix_joins_converted_name(
            name in "[A-Za-z][A-Za-z0-9_]*",
            prefix in "[a-z][a-z0-9_]*",
        ) {
            let strategy = SnakeCaseFieldNamingStrategy::new();
            let expected = format!("{}_{}", prefix, to_snake_case(&name));
            let property = EmbeddedProperty {
                name,
                embedded: Embedded::new(prefix),
            };
            prop_assert_eq!(strategy.field_name(&property), expected);
        }
    }
}

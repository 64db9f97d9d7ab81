//! Identity field naming.

use fieldname_core::{FieldNamingStrategy, PersistentProperty};

/// Uses the declared property name as the field name. Embedding prefixes
/// are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyNameFieldNamingStrategy;

impl FieldNamingStrategy for PropertyNameFieldNamingStrategy {
    fn field_name(&self, property: &dyn PersistentProperty) -> String {
        property.name().to_string()
    }
}

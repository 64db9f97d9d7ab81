//! Abbreviating field naming: the first letter of every camel case word.

use fieldname_core::{FieldNamingStrategy, PersistentProperty};

use crate::splitting::CamelCaseSplittingFieldNamingStrategy;

/// `fooBar` → `fb`, `streetNumberSuffix` → `sns`.
#[derive(Debug, Clone)]
pub struct CamelCaseAbbreviatingFieldNamingStrategy {
    inner: CamelCaseSplittingFieldNamingStrategy,
}

impl CamelCaseAbbreviatingFieldNamingStrategy {
    pub fn new() -> Self {
        Self {
            inner: CamelCaseSplittingFieldNamingStrategy::with_part_preparation("", first_char),
        }
    }
}

impl Default for CamelCaseAbbreviatingFieldNamingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldNamingStrategy for CamelCaseAbbreviatingFieldNamingStrategy {
    fn field_name(&self, property: &dyn PersistentProperty) -> String {
        self.inner.field_name(property)
    }
}

fn first_char(part: &str) -> String {
    part.chars().take(1).collect()
}

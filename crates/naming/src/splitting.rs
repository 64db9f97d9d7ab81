//! Camel case splitting strategy
//!
//! Splits the property name into words, prepares every word, drops empty
//! words and joins the rest with a delimiter. Embedded properties with a
//! prefix get `prefix + delimiter + name`.

use fieldname_core::{FieldNamingStrategy, PersistentProperty};

use crate::case::split_camel_case;

/// Field naming by camel case splitting and a configurable delimiter.
#[derive(Clone)]
pub struct CamelCaseSplittingFieldNamingStrategy {
    delimiter: String,
    prepare: fn(&str) -> String,
}

impl CamelCaseSplittingFieldNamingStrategy {
    /// Lowercase every word and join with `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self::with_part_preparation(delimiter, keep_part)
    }

    /// Use a custom transformation for each word.
    ///
    /// Words arrive lowercased. An empty result drops the word.
    pub fn with_part_preparation(delimiter: impl Into<String>, prepare: fn(&str) -> String) -> Self {
        Self {
            delimiter: delimiter.into(),
            prepare,
        }
    }

    /// The delimiter placed between words and after the embedded prefix
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Convert a raw property name, ignoring embedding.
    pub fn convert(&self, name: &str) -> String {
        split_camel_case(name)
            .into_iter()
            .map(|part| (self.prepare)(&part.to_ascii_lowercase()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(&self.delimiter)
    }
}

impl std::fmt::Debug for CamelCaseSplittingFieldNamingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CamelCaseSplittingFieldNamingStrategy")
            .field("delimiter", &self.delimiter)
            .finish_non_exhaustive()
    }
}

impl FieldNamingStrategy for CamelCaseSplittingFieldNamingStrategy {
    fn field_name(&self, property: &dyn PersistentProperty) -> String {
        let name = self.convert(property.name());

        if !property.is_embedded() {
            return name;
        }

        match property.embedded() {
            Some(embedded) if embedded.has_prefix() => {
                format!("{}{}{}", embedded.prefix, self.delimiter, name)
            }
            Some(_) => name,
            None => {
                tracing::warn!(
                    "Property '{}' is embedded but carries no embedding metadata",
                    property.name()
                );
                name
            }
        }
    }
}

fn keep_part(part: &str) -> String {
    part.to_string()
}

// ============================================================================
// Tests
// ============================================================================

//! Selectable naming strategies
//!
//! `NamingStrategyKind` is how mapping files and the command line pick a
//! strategy by name.

use fieldname_core::{FieldNamingStrategy, NamingError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    CamelCaseAbbreviatingFieldNamingStrategy, CamelCaseSplittingFieldNamingStrategy,
    PropertyNameFieldNamingStrategy, SnakeCaseFieldNamingStrategy,
};

/// Built-in naming strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum NamingStrategyKind {
    /// `fooBar` → `foo_bar`
    #[default]
    SnakeCase,
    /// `fooBar` → `foo-bar`
    KebabCase,
    /// `fooBar` → `fb`
    Abbreviating,
    /// `fooBar` → `fooBar`
    PropertyName,
}

impl NamingStrategyKind {
    /// Name used in mapping files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategyKind::SnakeCase => "snake_case",
            NamingStrategyKind::KebabCase => "kebab_case",
            NamingStrategyKind::Abbreviating => "abbreviating",
            NamingStrategyKind::PropertyName => "property_name",
        }
    }

    /// Build the strategy
    pub fn strategy(&self) -> Box<dyn FieldNamingStrategy> {
        match self {
            NamingStrategyKind::SnakeCase => Box::new(SnakeCaseFieldNamingStrategy::new()),
            NamingStrategyKind::KebabCase => Box::new(CamelCaseSplittingFieldNamingStrategy::new("-")),
            NamingStrategyKind::Abbreviating => {
                Box::new(CamelCaseAbbreviatingFieldNamingStrategy::new())
            }
            NamingStrategyKind::PropertyName => Box::new(PropertyNameFieldNamingStrategy),
        }
    }

    /// Get all strategy kinds
    pub fn all() -> &'static [NamingStrategyKind] {
        &[
            NamingStrategyKind::SnakeCase,
            NamingStrategyKind::KebabCase,
            NamingStrategyKind::Abbreviating,
            NamingStrategyKind::PropertyName,
        ]
    }
}

impl std::fmt::Display for NamingStrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStrategyKind {
    type Err = NamingError;

    /// Accepts the canonical names and their hyphenated spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| NamingError::UnknownStrategy(s.to_string()))
    }
}

impl TryFrom<String> for NamingStrategyKind {
    type Error = NamingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubProperty;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "snake_case".parse::<NamingStrategyKind>().unwrap(),
            NamingStrategyKind::SnakeCase
        );
        assert_eq!(
            "kebab-case".parse::<NamingStrategyKind>().unwrap(),
            NamingStrategyKind::KebabCase
        );
        assert_eq!(
            " Property_Name ".parse::<NamingStrategyKind>().unwrap(),
            NamingStrategyKind::PropertyName
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "camel".parse::<NamingStrategyKind>().unwrap_err();
        assert!(matches!(err, NamingError::UnknownStrategy(ref s) if s == "camel"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in NamingStrategyKind::all() {
            assert_eq!(kind.to_string().parse::<NamingStrategyKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        for kind in NamingStrategyKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_deserialize_accepts_command_line_spellings() {
        for (text, kind) in [
            ("\"kebab-case\"", NamingStrategyKind::KebabCase),
            ("\"property-name\"", NamingStrategyKind::PropertyName),
            ("\"SNAKE_CASE\"", NamingStrategyKind::SnakeCase),
        ] {
            assert_eq!(serde_json::from_str::<NamingStrategyKind>(text).unwrap(), kind);
        }

        let err = serde_json::from_str::<NamingStrategyKind>("\"camel\"").unwrap_err();
        assert!(err.to_string().contains("Unknown naming strategy"));
    }

    #[test]
    fn test_strategies() {
        let property = StubProperty::plain("fooBar");
        let names: Vec<String> = NamingStrategyKind::all()
            .iter()
            .map(|kind| kind.strategy().field_name(&property))
            .collect();
        assert_eq!(names, vec!["foo_bar", "foo-bar", "fb", "fooBar"]);
    }

    #[test]
    fn test_default_is_snake_case() {
        assert_eq!(NamingStrategyKind::default(), NamingStrategyKind::SnakeCase);
    }
}

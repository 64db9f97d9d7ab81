//! # Fieldname CLI
//!
//! Command-line interface for the field naming strategies.
//!
//! ## Commands
//!
//! - `convert` - Convert property names to field names
//! - `resolve` - Resolve every property of a mapping file
//! - `reverse` - Turn field names back into property names
//! - `strategies` - List the available strategies
//!

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use fieldname_naming::NamingStrategyKind;
use std::path::PathBuf;

// Re-export dependencies for use in main.rs
pub use fieldname_core;
pub use fieldname_ir;
pub use fieldname_naming;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Map property names to database field names
#[derive(Debug, Parser)]
#[command(name = "fieldname", version, about)]
pub struct Cli {
    /// Naming strategy (snake_case, kebab_case, abbreviating, property_name)
    #[arg(short, long, global = true, env = "FIELDNAME_STRATEGY")]
    pub strategy: Option<NamingStrategyKind>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert property names to field names
    Convert {
        /// Property names, e.g. fooBar
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Resolve every property of a mapping file (.toml or .json)
    Resolve {
        /// Path to the mapping file
        mapping: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Turn field names back into lowerCamelCase property names
    Reverse {
        /// Field names, e.g. foo_bar
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// List the available strategies
    Strategies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Run a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!("Starting {} v{}", NAME, VERSION);

    match cli.command {
        Command::Convert { names } => commands::convert(&names, cli.strategy.unwrap_or_default()),
        Command::Resolve { mapping, format } => commands::resolve(&mapping, cli.strategy, format),
        Command::Reverse { fields } => commands::reverse(&fields),
        Command::Strategies => commands::strategies(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["fieldname", "-s", "kebab-case", "convert", "fooBar"])
            .unwrap();
        assert_eq!(cli.strategy, Some(NamingStrategyKind::KebabCase));
        assert!(matches!(cli.command, Command::Convert { ref names } if names == &["fooBar"]));
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["fieldname", "--strategy", "camel", "convert", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["fieldname", "strategies", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

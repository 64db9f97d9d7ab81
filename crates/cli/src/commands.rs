//! Command implementations
//!
//! Each command renders its output lines first and prints them afterwards,
//! so the rendering can be tested without capturing stdout.

use anyhow::{Context, bail};
use colored::Colorize;
use fieldname_core::{NamingError, PersistentProperty, Validatable, validate_identifier};
use fieldname_ir::{MappingFile, ResolvedEntity, load_mapping};
use fieldname_naming::{NamingStrategyKind, to_property_name};
use std::path::Path;

use crate::OutputFormat;

/// A bare property name given on the command line
struct NamedProperty<'a>(&'a str);

impl PersistentProperty for NamedProperty<'_> {
    fn name(&self) -> &str {
        self.0
    }

    fn is_embedded(&self) -> bool {
        false
    }

    fn embedded(&self) -> Option<&fieldname_core::Embedded> {
        None
    }
}

// ============================================================================
// convert
// ============================================================================

/// Convert each name, collecting validation failures instead of stopping
pub fn convert_lines(names: &[String], kind: NamingStrategyKind) -> (Vec<String>, Vec<NamingError>) {
    let strategy = kind.strategy();
    let mut lines = Vec::new();
    let mut errors = Vec::new();

    for name in names {
        match validate_identifier(name) {
            Ok(()) => {
                let field = strategy.field_name(&NamedProperty(name));
                lines.push(format!("{} -> {}", name, field.green()));
            }
            Err(e) => errors.push(e),
        }
    }

    (lines, errors)
}

pub fn convert(names: &[String], kind: NamingStrategyKind) -> anyhow::Result<()> {
    tracing::debug!("Converting {} name(s) with {}", names.len(), kind);
    let (lines, errors) = convert_lines(names, kind);

    for line in &lines {
        println!("{}", line);
    }
    for error in &errors {
        eprintln!("{} {}", "error:".red().bold(), error);
    }

    if !errors.is_empty() {
        bail!("{} invalid property name(s)", errors.len());
    }
    Ok(())
}

// ============================================================================
// resolve
// ============================================================================

/// Validate and resolve a mapping, the CLI strategy taking precedence
pub fn resolve_mapping(
    mapping: &MappingFile,
    strategy: Option<NamingStrategyKind>,
) -> anyhow::Result<Vec<ResolvedEntity>> {
    mapping.validate()?;

    match strategy {
        Some(kind) if kind != mapping.naming.strategy => {
            tracing::info!(
                "Overriding mapping strategy {} with {}",
                mapping.naming.strategy,
                kind
            );
            Ok(mapping.resolve_with(kind.strategy().as_ref())?)
        }
        _ => Ok(mapping.resolve()?),
    }
}

pub fn resolve_lines(resolved: &[ResolvedEntity]) -> Vec<String> {
    resolved
        .iter()
        .flat_map(|entity| {
            entity.fields.iter().map(move |f| {
                format!(
                    "{}.{} -> {}",
                    entity.entity.cyan(),
                    f.property,
                    f.field.green()
                )
            })
        })
        .collect()
}

pub fn resolve(
    path: &Path,
    strategy: Option<NamingStrategyKind>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mapping = load_mapping(path)
        .with_context(|| format!("Failed to load mapping {}", path.display()))?;
    let resolved = resolve_mapping(&mapping, strategy)?;

    match format {
        OutputFormat::Text => {
            for line in resolve_lines(&resolved) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
    }
    Ok(())
}

// ============================================================================
// reverse / strategies
// ============================================================================

pub fn reverse_lines(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|f| format!("{} -> {}", f, to_property_name(f).green()))
        .collect()
}

pub fn reverse(fields: &[String]) -> anyhow::Result<()> {
    for line in reverse_lines(fields) {
        println!("{}", line);
    }
    Ok(())
}

pub fn strategies() -> anyhow::Result<()> {
    let sample = NamedProperty("streetNumber");
    for kind in NamingStrategyKind::all() {
        let example = kind.strategy().field_name(&sample);
        println!("{:<14} {} -> {}", kind.to_string().bold(), sample.0, example);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

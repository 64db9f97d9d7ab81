//! Loading and saving mapping files
//!
//! Mapping files are JSON or TOML, chosen by file extension. Files without
//! a recognised extension are read as TOML.

use crate::MappingFile;
use fieldname_core::{NamingError, NamingResult};
use std::path::Path;

// ============================================================================
// Formats
// ============================================================================

/// On-disk format of a mapping file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    Json,
    Toml,
}

impl MappingFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path.as_ref().extension().and_then(|e| e.to_str());
        [MappingFormat::Json, MappingFormat::Toml]
            .into_iter()
            .find(|format| ext.is_some_and(|e| e.eq_ignore_ascii_case(format.extension())))
            .unwrap_or(MappingFormat::Toml)
    }

    /// Default file extension
    pub fn extension(&self) -> &'static str {
        match self {
            MappingFormat::Json => "json",
            MappingFormat::Toml => "toml",
        }
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Render a mapping in the given format
pub fn save_mapping_to_string(mapping: &MappingFile, format: MappingFormat) -> NamingResult<String> {
    match format {
        MappingFormat::Json => Ok(serde_json::to_string_pretty(mapping)?),
        MappingFormat::Toml => toml::to_string_pretty(mapping).map_err(|e| {
            NamingError::InvalidMappingFormat(format!("Failed to render TOML: {}", e))
        }),
    }
}

/// Save a mapping to a file, creating parent directories as needed
pub fn save_mapping(mapping: &MappingFile, path: impl AsRef<Path>) -> NamingResult<()> {
    let path = path.as_ref();
    let text = save_mapping_to_string(mapping, MappingFormat::from_path(path))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| NamingError::FileWrite {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, text).map_err(|e| NamingError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Saved mapping to {}", path.display());
    Ok(())
}

// ============================================================================
// Load Functions
// ============================================================================

/// Parse a mapping from text in the given format
pub fn load_mapping_from_str(text: &str, format: MappingFormat) -> NamingResult<MappingFile> {
    match format {
        MappingFormat::Json => Ok(serde_json::from_str(text)?),
        MappingFormat::Toml => toml::from_str(text)
            .map_err(|e| NamingError::InvalidMappingFormat(e.message().to_string())),
    }
}

/// Load a mapping from a file
pub fn load_mapping(path: impl AsRef<Path>) -> NamingResult<MappingFile> {
    let path = path.as_ref();
    if !path.try_exists()? {
        return Err(NamingError::MappingNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| NamingError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mapping =
        load_mapping_from_str(&text, MappingFormat::from_path(path)).map_err(|e| match e {
            NamingError::JsonSerialization(je) => NamingError::FileRead {
                path: path.to_path_buf(),
                message: format!("Invalid mapping file format: {}", je),
            },
            NamingError::InvalidMappingFormat(message) => NamingError::FileRead {
                path: path.to_path_buf(),
                message: format!("Invalid mapping file format: {}", message.trim_end()),
            },
            other => other,
        })?;

    tracing::debug!(
        "Loaded {} entities from {}",
        mapping.entities.len(),
        path.display()
    );
    Ok(mapping)
}

// ============================================================================
// Tests
// ============================================================================

//! Reading specifications from disk
//!
//! The file format is picked from the extension: `.json`, `.json5` or `.toml`.

use super::Specification;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error loading a naming specification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpecError {
    /// File I/O error
    #[error("Failed to read specification: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse error
    #[error("Failed to parse specification JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON5 parse error
    #[error("Failed to parse specification JSON5: {0}")]
    Json5(#[from] json5::Error),
    /// TOML parse error
    #[error("Failed to parse specification TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// Extension is not one of the supported formats
    #[error("Unsupported specification format '{0}' (expected .json, .json5 or .toml)")]
    UnsupportedFormat(String),
}

/// Supported specification file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Json5,
    Toml,
}

impl SpecFormat {
    /// Detect the format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, SpecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "json5" => Ok(Self::Json5),
            "toml" => Ok(Self::Toml),
            _ => Err(SpecError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a specification from a string in the given format.
///
/// # Examples
///
/// ```
/// use sprite_composer::naming::{parse_specification, SpecFormat};
///
/// let toml = r#"
/// [[rows]]
/// category = "Walk"
/// sub_categories = ["Up", "Down"]
/// "#;
/// let spec = parse_specification(toml, SpecFormat::Toml).unwrap();
/// assert_eq!(spec.declared_row_count(), 2);
/// ```
pub fn parse_specification(content: &str, format: SpecFormat) -> Result<Specification, SpecError> {
    let spec = match format {
        SpecFormat::Json => serde_json::from_str(content)?,
        SpecFormat::Json5 => json5::from_str(content)?,
        SpecFormat::Toml => toml::from_str(content)?,
    };
    Ok(spec)
}

/// Load a specification file.
pub fn load_specification(path: &Path) -> Result<Specification, SpecError> {
    let format = SpecFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let spec = parse_specification(&content, format)?;
    log::debug!(
        "loaded specification {} ({} entries, {} declared rows)",
        path.display(),
        spec.rows.len(),
        spec.declared_row_count()
    );
    Ok(spec)
}

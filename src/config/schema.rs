//! Configuration schema types for `sprcomp.toml`
//!
//! Defines the structure and validation rules for slicer configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::export::UnityFilterMode;
use crate::slicer::CellSize;

/// Output format for sliced sheet metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Generic JSON
    #[default]
    Json,
    /// Unity sprite metadata
    Unity,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Unity => "unity",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "unity" => Ok(ExportFormat::Unity),
            other => Err(format!("unknown export format '{}' (expected json or unity)", other)),
        }
    }
}

/// Slicing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Cell width in pixels
    #[serde(default = "default_cell")]
    pub cell_width: u32,
    /// Cell height in pixels
    #[serde(default = "default_cell")]
    pub cell_height: u32,
    /// Naming specification file (.json, .json5, .toml)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<PathBuf>,
    /// Treat warnings as errors
    #[serde(default)]
    pub strict: bool,
}

fn default_cell() -> u32 {
    64
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self { cell_width: default_cell(), cell_height: default_cell(), spec: None, strict: false }
    }
}

impl SliceConfig {
    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width, self.cell_height)
    }
}

/// Unity export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnityExportConfig {
    /// Pixels per unit
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: u32,
    /// Pivot point shared by all sprites, normalized to 0-1
    #[serde(default = "default_pivot")]
    pub pivot: [f32; 2],
    /// Texture filter mode
    #[serde(default)]
    pub filter_mode: UnityFilterMode,
}

fn default_pixels_per_unit() -> u32 {
    100
}

fn default_pivot() -> [f32; 2] {
    [0.5, 0.5]
}

impl Default for UnityExportConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: default_pixels_per_unit(),
            pivot: default_pivot(),
            filter_mode: UnityFilterMode::default(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format
    #[serde(default)]
    pub format: ExportFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Unity-specific settings
    #[serde(default)]
    pub unity: UnityExportConfig,
}

fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { format: ExportFormat::default(), pretty: true, unity: UnityExportConfig::default() }
    }
}

/// Complete sprcomp.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Slicing settings
    #[serde(default)]
    pub slice: SliceConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "slice.cell_width")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sprcomp.toml: '{}' {}", self.field, self.message)
    }
}

impl ComposerConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.slice.cell_width == 0 {
            errors.push(ConfigValidationError {
                field: "slice.cell_width".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.slice.cell_height == 0 {
            errors.push(ConfigValidationError {
                field: "slice.cell_height".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.export.unity.pixels_per_unit == 0 {
            errors.push(ConfigValidationError {
                field: "export.unity.pixels_per_unit".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.export.unity.pivot.iter().any(|v| !(0.0..=1.0).contains(v)) {
            errors.push(ConfigValidationError {
                field: "export.unity.pivot".to_string(),
                message: "components must be between 0 and 1".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComposerConfig::default();
        assert_eq!(config.slice.cell_size(), CellSize::new(64, 64));
        assert!(config.slice.spec.is_none());
        assert!(!config.slice.strict);
        assert_eq!(config.export.format, ExportFormat::Json);
        assert!(config.export.pretty);
        assert_eq!(config.export.unity.pixels_per_unit, 100);
        assert_eq!(config.export.unity.filter_mode, UnityFilterMode::Point);
        assert!(config.is_valid());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [slice]
            cell_width = 32
            cell_height = 48
            spec = "naming/hero.json"
            strict = true

            [export]
            format = "unity"
            pretty = false

            [export.unity]
            pixels_per_unit = 32
            pivot = [0.5, 0.0]
            filter_mode = "bilinear"
        "#;
        let config: ComposerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.slice.cell_size(), CellSize::new(32, 48));
        assert_eq!(config.slice.spec, Some(PathBuf::from("naming/hero.json")));
        assert!(config.slice.strict);
        assert_eq!(config.export.format, ExportFormat::Unity);
        assert!(!config.export.pretty);
        assert_eq!(config.export.unity.pivot, [0.5, 0.0]);
        assert_eq!(config.export.unity.filter_mode, UnityFilterMode::Bilinear);
        assert!(config.is_valid());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: ComposerConfig = toml::from_str("[slice]\ncell_width = 16\n").unwrap();
        assert_eq!(config.slice.cell_size(), CellSize::new(16, 64));
        assert_eq!(config.export.format, ExportFormat::Json);
    }

    #[test]
    fn test_validate_errors() {
        let mut config = ComposerConfig::default();
        config.slice.cell_width = 0;
        config.export.unity.pixels_per_unit = 0;
        config.export.unity.pivot = [1.5, 0.5];

        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["slice.cell_width", "export.unity.pixels_per_unit", "export.unity.pivot"]);
        assert!(errors[0].to_string().starts_with("sprcomp.toml: 'slice.cell_width'"));
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("Unity".parse::<ExportFormat>(), Ok(ExportFormat::Unity));
        assert!("godot".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Unity.as_str(), "unity");
    }
}

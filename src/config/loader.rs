//! Configuration loading and discovery for `sprcomp.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{ComposerConfig, ExportFormat};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "sprcomp.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse sprcomp.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override cell width
    pub cell_width: Option<u32>,
    /// Override cell height
    pub cell_height: Option<u32>,
    /// Override naming specification path
    pub spec: Option<PathBuf>,
    /// Override export format
    pub format: Option<ExportFormat>,
    /// Enable strict mode
    pub strict: Option<bool>,
    /// Override pretty printing
    pub pretty: Option<bool>,
}

/// Find sprcomp.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for sprcomp.toml
/// 2. Check XDG_CONFIG_HOME/sprite-composer/sprcomp.toml (or ~/.config/sprite-composer/sprcomp.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find sprcomp.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("sprite-composer").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find sprcomp.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses [`find_config`]
/// to locate the config file. If no config file is found, returns the defaults.
///
/// A relative `slice.spec` path is resolved against the config file's directory.
pub fn load_config(path: Option<&Path>) -> Result<ComposerConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(ComposerConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<ComposerConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: ComposerConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let (Some(spec), Some(dir)) = (config.slice.spec.as_ref(), path.parent()) {
        if spec.is_relative() {
            config.slice.spec = Some(dir.join(spec));
        }
    }

    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut ComposerConfig, overrides: &CliOverrides) {
    if let Some(width) = overrides.cell_width {
        config.slice.cell_width = width;
    }

    if let Some(height) = overrides.cell_height {
        config.slice.cell_height = height;
    }

    if let Some(ref spec) = overrides.spec {
        config.slice.spec = Some(spec.clone());
    }

    if let Some(format) = overrides.format {
        config.export.format = format;
    }

    if let Some(strict) = overrides.strict {
        config.slice.strict = strict;
    }

    if let Some(pretty) = overrides.pretty {
        config.export.pretty = pretty;
    }
}

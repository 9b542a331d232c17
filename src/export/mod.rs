//! Export formats for sliced sheet metadata.
//!
//! The slicer itself never writes files. These exporters turn a
//! [`SliceOutput`] into the metadata an asset importer consumes: a list of
//! named sub-rectangles of the sheet.
//!
//! # Supported Formats
//!
//! - **JSON**: Generic JSON with frame names and rectangles in emission order
//! - **Unity**: Unity `TextureImporter` sprite metadata (`spriteMode: Multiple`)
//!
//! # Example
//!
//! ```ignore
//! use sprite_composer::export::{JsonExporter, ExportOptions, Exporter, SheetMetadata};
//!
//! let metadata = SheetMetadata::from_slice("hero.png", (256, 128), &output);
//! JsonExporter::new().export(&metadata, Path::new("hero.json"), &ExportOptions::default())?;
//! ```

pub mod json;
pub mod unity;

pub use json::*;
pub use unity::*;

use crate::config::{ExportConfig, ExportFormat};
use crate::sheet::CellRect;
use crate::slicer::{CellSize, SliceOutput};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Common error type for export operations.
#[derive(Debug)]
pub enum ExportError {
    /// IO error during file writing
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
    /// Invalid configuration
    Config(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Serialization(e) => write!(f, "Serialization error: {}", e),
            ExportError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Options for export operations.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty print output (with indentation)
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// A named frame rectangle. `y` is measured from the bottom of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameEntry {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl FrameEntry {
    pub fn rect(&self) -> CellRect {
        CellRect::new(self.x, self.y, self.w, self.h)
    }
}

/// Everything an exporter needs to describe one sliced sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMetadata {
    /// Sheet image file name
    pub image: String,
    /// Sheet dimensions `[width, height]`
    pub size: [u32; 2],
    /// Cell dimensions `[width, height]`
    pub cell: [u32; 2],
    /// Frames in slice order
    pub frames: Vec<FrameEntry>,
}

impl SheetMetadata {
    /// Collect metadata from a slice result.
    pub fn from_slice(image: impl Into<String>, size: (u32, u32), output: &SliceOutput) -> Self {
        let CellSize { width, height } = output.grid.cell;
        Self {
            image: image.into(),
            size: [size.0, size.1],
            cell: [width, height],
            frames: output
                .frames
                .iter()
                .map(|frame| FrameEntry {
                    name: frame.name.clone(),
                    x: frame.rect.x,
                    y: frame.rect.y,
                    w: frame.rect.width,
                    h: frame.rect.height,
                })
                .collect(),
        }
    }

    pub fn frame_names(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|f| f.name.as_str())
    }
}

/// Trait for export format implementations.
pub trait Exporter {
    /// Export sheet metadata to the specified path.
    fn export(
        &self,
        metadata: &SheetMetadata,
        output_path: &Path,
        options: &ExportOptions,
    ) -> Result<()>;

    /// Render sheet metadata to a string.
    fn export_to_string(&self, metadata: &SheetMetadata, options: &ExportOptions) -> Result<String>;

    /// Get the format name for this exporter.
    fn format_name(&self) -> &'static str;

    /// Get the default file extension for this format.
    fn extension(&self) -> &'static str;
}

/// Write an exporter's output, creating parent directories as needed.
pub(crate) fn write_output(output_path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, contents)?;
    Ok(())
}

pub(crate) fn to_json<T: Serialize>(value: &T, options: &ExportOptions) -> Result<String> {
    let json = if options.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Build the exporter selected by `[export]`, with the Unity settings applied.
pub fn exporter_for(config: &ExportConfig) -> Box<dyn Exporter> {
    match config.format {
        ExportFormat::Json => Box::new(JsonExporter::new()),
        ExportFormat::Unity => Box::new(
            UnityExporter::new()
                .with_pixels_per_unit(config.unity.pixels_per_unit)
                .with_pivot(config.unity.pivot)
                .with_filter_mode(config.unity.filter_mode),
        ),
    }
}

//! Unity engine export format.
//!
//! Exports sliced sheet metadata as the sprite-rect list Unity's
//! `TextureImporter` needs for a sheet in `Multiple` sprite mode.
//!
//! # Output Format
//!
//! ```json
//! {
//!   "texture": "hero.png",
//!   "textureSize": { "x": 256, "y": 128 },
//!   "pixelsPerUnit": 100,
//!   "spriteMode": "Multiple",
//!   "filterMode": "Point",
//!   "sprites": [
//!     {
//!       "name": "Walk_Down_0",
//!       "rect": { "x": 0, "y": 64, "w": 64, "h": 64 },
//!       "alignment": "Center",
//!       "pivot": { "x": 0.5, "y": 0.5 },
//!       "border": { "x": 0, "y": 0, "z": 0, "w": 0 }
//!     }
//!   ]
//! }
//! ```
//!
//! Unity rects have a bottom-left origin, the same convention the slicer
//! uses, so rectangles are written unchanged and in slice order.

use crate::export::{to_json, write_output, ExportOptions, Exporter, Result, SheetMetadata};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unity texture filter mode.
///
/// Written as `Point`/`Bilinear` in the metadata; `sprcomp.toml` also
/// accepts the lowercase spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnityFilterMode {
    /// Point (nearest neighbor) filtering - pixel perfect
    #[default]
    #[serde(alias = "point")]
    Point,
    /// Bilinear filtering - smooth
    #[serde(alias = "bilinear")]
    Bilinear,
}

/// Unity sprite alignment preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnityAlignment {
    Center,
    Custom,
}

/// Unity export options.
#[derive(Debug, Clone)]
pub struct UnityExportOptions {
    /// Base export options
    pub base: ExportOptions,
    /// Pixels per unit for Unity sprite import
    pub pixels_per_unit: u32,
    /// Pivot point (0-1 normalized)
    pub pivot: [f32; 2],
    /// Texture filter mode
    pub filter_mode: UnityFilterMode,
}

impl Default for UnityExportOptions {
    fn default() -> Self {
        Self {
            base: ExportOptions::default(),
            pixels_per_unit: 100,
            pivot: [0.5, 0.5],
            filter_mode: UnityFilterMode::Point,
        }
    }
}

/// Unity sprite definition.
#[derive(Debug, Clone, Serialize)]
pub struct UnitySprite {
    /// Sprite name
    pub name: String,
    /// Rectangle in texture (x, y from bottom-left in Unity)
    pub rect: UnityRect,
    pub alignment: UnityAlignment,
    /// Pivot point (0-1 normalized)
    pub pivot: UnityVector2,
    /// Border for 9-slice (left, bottom, right, top)
    pub border: UnityVector4,
}

/// Unity rectangle.
#[derive(Debug, Clone, Serialize)]
pub struct UnityRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Unity 2D vector.
#[derive(Debug, Clone, Serialize)]
pub struct UnityVector2 {
    pub x: f32,
    pub y: f32,
}

/// Unity 4D vector (used for borders).
#[derive(Debug, Clone, Serialize)]
pub struct UnityVector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Complete Unity export data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitySheetData {
    /// Texture filename
    pub texture: String,
    /// Texture dimensions
    pub texture_size: UnityVector2,
    /// Pixels per unit setting
    pub pixels_per_unit: u32,
    /// Always "Multiple" for sliced sheets
    pub sprite_mode: &'static str,
    /// Filter mode
    pub filter_mode: UnityFilterMode,
    /// Sprite definitions
    pub sprites: Vec<UnitySprite>,
}

/// Unity format exporter.
#[derive(Debug, Clone)]
pub struct UnityExporter {
    pixels_per_unit: u32,
    pivot: [f32; 2],
    filter_mode: UnityFilterMode,
}

impl Default for UnityExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnityExporter {
    /// Create a new Unity exporter with default settings.
    pub fn new() -> Self {
        let defaults = UnityExportOptions::default();
        Self {
            pixels_per_unit: defaults.pixels_per_unit,
            pivot: defaults.pivot,
            filter_mode: defaults.filter_mode,
        }
    }

    /// Set pixels per unit.
    pub fn with_pixels_per_unit(mut self, ppu: u32) -> Self {
        self.pixels_per_unit = ppu;
        self
    }

    /// Set the pivot shared by every sprite.
    pub fn with_pivot(mut self, pivot: [f32; 2]) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set filter mode.
    pub fn with_filter_mode(mut self, mode: UnityFilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    fn options(&self, base: &ExportOptions) -> UnityExportOptions {
        UnityExportOptions {
            base: base.clone(),
            pixels_per_unit: self.pixels_per_unit,
            pivot: self.pivot,
            filter_mode: self.filter_mode,
        }
    }

    /// Build Unity sheet data from metadata.
    pub fn build_sheet_data(
        &self,
        metadata: &SheetMetadata,
        options: &UnityExportOptions,
    ) -> UnitySheetData {
        let alignment = if options.pivot == [0.5, 0.5] {
            UnityAlignment::Center
        } else {
            UnityAlignment::Custom
        };

        let sprites = metadata
            .frames
            .iter()
            .map(|frame| UnitySprite {
                name: frame.name.clone(),
                rect: UnityRect {
                    x: frame.x as f32,
                    y: frame.y as f32,
                    w: frame.w as f32,
                    h: frame.h as f32,
                },
                alignment,
                pivot: UnityVector2 { x: options.pivot[0], y: options.pivot[1] },
                border: UnityVector4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 },
            })
            .collect();

        UnitySheetData {
            texture: metadata.image.clone(),
            texture_size: UnityVector2 { x: metadata.size[0] as f32, y: metadata.size[1] as f32 },
            pixels_per_unit: options.pixels_per_unit,
            sprite_mode: "Multiple",
            filter_mode: options.filter_mode,
            sprites,
        }
    }
}

impl Exporter for UnityExporter {
    fn export(
        &self,
        metadata: &SheetMetadata,
        output_path: &Path,
        options: &ExportOptions,
    ) -> Result<()> {
        let json = self.export_to_string(metadata, options)?;
        write_output(output_path, &json)
    }

    fn export_to_string(&self, metadata: &SheetMetadata, options: &ExportOptions) -> Result<String> {
        let unity_options = self.options(options);
        let data = self.build_sheet_data(metadata, &unity_options);
        to_json(&data, &unity_options.base)
    }

    fn format_name(&self) -> &'static str {
        "unity"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Export sheet metadata to Unity format.
///
/// Convenience function for simple export use cases.
pub fn export_unity(metadata: &SheetMetadata, output_path: &Path, pixels_per_unit: u32) -> Result<()> {
    UnityExporter::new()
        .with_pixels_per_unit(pixels_per_unit)
        .export(metadata, output_path, &ExportOptions::default())
}

//! Generic JSON export format.
//!
//! # Output Format
//!
//! - `image`: Sheet image file name
//! - `size`: Sheet dimensions `[width, height]`
//! - `cell`: Cell dimensions `[width, height]`
//! - `frames`: Frames in slice order (top row first, columns ascending)
//!   - `name`: Synthesized frame name
//!   - `x`, `y`: Position, `y` measured from the bottom edge
//!   - `w`, `h`: Frame dimensions
//!
//! # Example Output
//!
//! ```json
//! {
//!   "image": "hero.png",
//!   "size": [256, 128],
//!   "cell": [64, 64],
//!   "frames": [
//!     { "name": "Walk_Down_0", "x": 0, "y": 64, "w": 64, "h": 64 }
//!   ]
//! }
//! ```
//!
//! The same document is read back by `sprcomp populate`.

use crate::export::{to_json, write_output, ExportError, ExportOptions, Exporter, Result, SheetMetadata};
use std::path::Path;

/// JSON format exporter.
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
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
        to_json(metadata, options)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Export sheet metadata to a JSON file.
///
/// Convenience function for simple export use cases.
pub fn export_json(metadata: &SheetMetadata, output_path: &Path, pretty: bool) -> Result<()> {
    JsonExporter::new().export(metadata, output_path, &ExportOptions { pretty })
}

/// Read sheet metadata previously written by [`JsonExporter`].
pub fn read_json(path: &Path) -> Result<SheetMetadata> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ExportError::Serialization(e.to_string()))
}

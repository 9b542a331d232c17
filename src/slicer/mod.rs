//! Grid sprite-sheet slicing with declarative frame naming
//!
//! A sheet is cut into equally sized cells. Each grid row is mapped to a row
//! of the naming [`Specification`] (or treated as an overflow row past its
//! end), each column is classified against the row's special window, and
//! every non-transparent cell is emitted as a named [`Frame`].
//!
//! Transparent cells are skipped but still advance the row's column counter,
//! so the frames around a gap keep their positional index.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use sprite_composer::naming::{RowSpec, Specification};
//! use sprite_composer::slicer::{CellSize, Slicer};
//!
//! let spec = Specification::new(vec![RowSpec::new("Walk").with_sub_categories(["Down", "Up"]).into()]);
//! let sheet = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
//!
//! let output = Slicer::new(&spec).with_cell_size(CellSize::new(4, 4)).slice(&sheet).unwrap();
//! let names: Vec<_> = output.frames.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["Walk_Down_0", "Walk_Down_1", "Walk_Up_0", "Walk_Up_1"]);
//! ```

pub mod classify;
pub mod error;
pub mod grid;
pub mod names;
pub mod rows;

pub use classify::{classify, FrameClass};
pub use error::SliceError;
pub use grid::{CellSize, GridLayout};
pub use names::frame_name;
pub use rows::{resolve_row, RowMatch};

use crate::naming::Specification;
use crate::sheet::{is_rect_transparent, CellRect, Sheet};
use crate::warning::Warning;
use serde::Serialize;
use std::collections::HashSet;

/// A named cell of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub name: String,
    pub rect: CellRect,
}

/// Whether a grid row was covered by the specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Declared,
    Overflow,
}

/// Scan statistics for one grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSummary {
    pub row: u32,
    pub kind: RowKind,
    /// Final value of the running column counter
    pub scanned: u32,
    /// Frames emitted (scanned minus transparent cells)
    pub emitted: u32,
}

/// Result of slicing one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceOutput {
    pub grid: GridLayout,
    /// Frames in row-major order, top row first, columns ascending
    pub frames: Vec<Frame>,
    pub rows: Vec<RowSummary>,
    pub warnings: Vec<Warning>,
}

impl SliceOutput {
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Slices sheets against a naming specification.
#[derive(Debug, Clone)]
pub struct Slicer<'a> {
    spec: &'a Specification,
    cell: CellSize,
    sheet_name: String,
}

impl<'a> Slicer<'a> {
    /// Create a slicer with 64x64 cells and the sheet name `sheet`.
    pub fn new(spec: &'a Specification) -> Self {
        Self { spec, cell: CellSize::default(), sheet_name: "sheet".to_string() }
    }

    pub fn with_cell_size(mut self, cell: CellSize) -> Self {
        self.cell = cell;
        self
    }

    /// Set the base name used for overflow rows (usually the file stem).
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    /// Slice a sheet.
    ///
    /// Fails only on configuration errors, in which case nothing is emitted.
    /// Malformed specification entries are reported through
    /// [`SliceOutput::warnings`].
    pub fn slice<S: Sheet + ?Sized>(&self, sheet: &S) -> Result<SliceOutput, SliceError> {
        let (width, height) = sheet.dimensions();
        let grid = GridLayout::compute(width, height, self.cell)?;
        log::debug!(
            "slicing '{}' ({}x{}): {} rows x {} cols of {}, bottom padding {}",
            self.sheet_name,
            width,
            height,
            grid.rows,
            grid.cols,
            grid.cell,
            grid.bottom_padding
        );

        let mut warnings = self.spec.lint(Some(grid.cols));
        let mut frames = Vec::new();
        let mut rows = Vec::with_capacity(grid.rows as usize);

        for row in 0..grid.rows {
            let matched = resolve_row(row, self.spec);
            let mut counter = 0u32;
            let mut emitted = 0u32;

            for col in 0..grid.cols {
                let rect = grid.cell_rect(row, col);
                let position = counter;
                counter += 1;

                if is_rect_transparent(sheet, &rect) {
                    continue;
                }

                let class = classify(&matched, position);
                frames.push(Frame { name: frame_name(&self.sheet_name, &class), rect });
                emitted += 1;
            }

            let kind = if matched.is_overflow() { RowKind::Overflow } else { RowKind::Declared };
            log::debug!("row {} ({:?}): {} scanned, {} emitted", row, kind, counter, emitted);
            rows.push(RowSummary { row, kind, scanned: counter, emitted });
        }

        warnings.extend(duplicate_name_warnings(&frames));

        Ok(SliceOutput { grid, frames, rows, warnings })
    }
}

/// Slice a sheet with the given specification and cell size.
///
/// Convenience wrapper around [`Slicer`].
pub fn slice_sheet<S: Sheet + ?Sized>(
    sheet: &S,
    spec: &Specification,
    cell: CellSize,
    sheet_name: &str,
) -> Result<SliceOutput, SliceError> {
    Slicer::new(spec).with_cell_size(cell).with_sheet_name(sheet_name).slice(sheet)
}

fn duplicate_name_warnings(frames: &[Frame]) -> Vec<Warning> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut warnings = Vec::new();

    for frame in frames {
        if !seen.insert(frame.name.as_str()) && reported.insert(frame.name.as_str()) {
            warnings.push(Warning::logged(format!(
                "frame name '{}' is emitted more than once",
                frame.name
            )));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{RowEntry, RowSpec, SpecialWindow};
    use image::{Rgba, RgbaImage};

    const OPAQUE: Rgba<u8> = Rgba([200, 100, 50, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    /// Sheet of `cols` x `rows` cells of `cell` pixels, all opaque.
    fn opaque_sheet(cols: u32, rows: u32, cell: u32) -> RgbaImage {
        RgbaImage::from_pixel(cols * cell, rows * cell, OPAQUE)
    }

    /// Clear a cell addressed by grid row (0 = top) and column.
    fn clear_cell(img: &mut RgbaImage, row: u32, col: u32, cell: u32) {
        for y in row * cell..(row + 1) * cell {
            for x in col * cell..(col + 1) * cell {
                img.put_pixel(x, y, CLEAR);
            }
        }
    }

    fn walk_spec() -> Specification {
        Specification::new(vec![RowSpec::new("Walk").with_sub_categories(["Down", "Up"]).into()])
    }

    #[test]
    fn test_walk_row_names() {
        let spec = walk_spec();
        let sheet = opaque_sheet(4, 2, 64);
        let output = slice_sheet(&sheet, &spec, CellSize::new(64, 64), "hero").unwrap();

        assert_eq!(
            output.names(),
            vec![
                "Walk_Down_0",
                "Walk_Down_1",
                "Walk_Down_2",
                "Walk_Down_3",
                "Walk_Up_0",
                "Walk_Up_1",
                "Walk_Up_2",
                "Walk_Up_3",
            ]
        );
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_transparent_cell_keeps_index() {
        let spec = walk_spec();
        let mut sheet = opaque_sheet(4, 2, 64);
        clear_cell(&mut sheet, 0, 2, 64);

        let output = slice_sheet(&sheet, &spec, CellSize::new(64, 64), "hero").unwrap();
        assert_eq!(
            &output.names()[..3],
            &["Walk_Down_0", "Walk_Down_1", "Walk_Down_3"]
        );
        assert_eq!(output.frame("Walk_Down_3").unwrap().rect.x, 192);
        assert_eq!(output.rows[0].scanned, 4);
        assert_eq!(output.rows[0].emitted, 3);
    }

    #[test]
    fn test_row_zero_is_top_of_image() {
        let spec = walk_spec();
        let mut sheet = opaque_sheet(1, 2, 4);
        // make the bottom row transparent; only the top (row 0) remains
        clear_cell(&mut sheet, 1, 0, 4);

        let output = slice_sheet(&sheet, &spec, CellSize::new(4, 4), "hero").unwrap();
        assert_eq!(output.names(), vec!["Walk_Down_0"]);
        assert_eq!(output.frames[0].rect, CellRect::new(0, 4, 4, 4));
    }

    #[test]
    fn test_counter_reaches_column_count_on_every_row() {
        let spec = walk_spec();
        let mut sheet = opaque_sheet(5, 3, 2);
        clear_cell(&mut sheet, 0, 0, 2);
        clear_cell(&mut sheet, 1, 4, 2);
        for col in 0..5 {
            clear_cell(&mut sheet, 2, col, 2);
        }

        let output = slice_sheet(&sheet, &spec, CellSize::new(2, 2), "hero").unwrap();
        assert_eq!(output.rows.len(), 3);
        for summary in &output.rows {
            assert_eq!(summary.scanned, 5);
        }
        assert_eq!(output.rows[2].emitted, 0);
        assert_eq!(output.rows[2].kind, RowKind::Overflow);
    }

    #[test]
    fn test_overflow_rows() {
        let spec = Specification::new(vec![
            RowSpec::new("Walk").with_sub_categories(["Down", "Up"]).into(),
            RowSpec::new("Hurt").into(),
        ]);
        let sheet = opaque_sheet(2, 5, 4);
        let output = slice_sheet(&sheet, &spec, CellSize::new(4, 4), "knight").unwrap();

        let names = output.names();
        assert_eq!(&names[4..6], &["Hurt_0", "Hurt_1"]);
        assert_eq!(&names[6..], &["knight_0_0", "knight_0_1", "knight_1_0", "knight_1_1"]);
    }

    #[test]
    fn test_special_window_in_middle() {
        let spec = Specification::new(vec![RowEntry::new(RowSpec::new("Attack"))
            .with_special(SpecialWindow::new("Windup", 2, 2))]);
        let sheet = opaque_sheet(7, 1, 4);
        let output = slice_sheet(&sheet, &spec, CellSize::new(4, 4), "hero").unwrap();

        // pre-window frames keep their absolute index, post-window frames restart at 0
        assert_eq!(
            output.names(),
            vec!["Attack_0", "Attack_1", "Windup_0", "Windup_1", "Attack_0", "Attack_1", "Attack_2"]
        );
        // the restarted indices collide with the leading frames and get reported
        assert_eq!(output.warnings.len(), 2);
    }

    #[test]
    fn test_special_window_with_transparent_cells() {
        let spec = Specification::new(vec![RowEntry::new(RowSpec::new("Walk"))
            .with_special(SpecialWindow::new("Idle", 0, 1))]);
        let mut sheet = opaque_sheet(4, 1, 4);
        clear_cell(&mut sheet, 0, 0, 4);
        clear_cell(&mut sheet, 0, 2, 4);

        let output = slice_sheet(&sheet, &spec, CellSize::new(4, 4), "hero").unwrap();
        // Idle (col 0) and Walk_1 (col 2) are gone; col 3 stays Walk_2
        assert_eq!(output.names(), vec!["Walk_0", "Walk_2"]);
    }

    #[test]
    fn test_fully_transparent_sheet() {
        let spec = walk_spec();
        let sheet = RgbaImage::from_pixel(128, 128, CLEAR);
        let output = slice_sheet(&sheet, &spec, CellSize::new(64, 64), "hero").unwrap();
        assert!(output.frames.is_empty());
        assert_eq!(output.rows.len(), 2);
    }

    #[test]
    fn test_zero_cell_size_aborts() {
        let spec = walk_spec();
        let sheet = opaque_sheet(2, 2, 4);
        let result = slice_sheet(&sheet, &spec, CellSize::new(4, 0), "hero");
        assert_eq!(result, Err(SliceError::InvalidCellSize { width: 4, height: 0 }));
    }

    #[test]
    fn test_bottom_padding() {
        let spec = walk_spec();
        // 2 rows of 4px cells plus 3px of padding at the bottom
        let mut sheet = RgbaImage::from_pixel(4, 11, CLEAR);
        for x in 0..4 {
            sheet.put_pixel(x, 0, OPAQUE); // top row of cell row 0
            sheet.put_pixel(x, 7, OPAQUE); // bottom row of cell row 1
        }

        let output = slice_sheet(&sheet, &spec, CellSize::new(4, 4), "hero").unwrap();
        assert_eq!(output.grid.bottom_padding, 3);
        assert_eq!(output.names(), vec!["Walk_Down_0", "Walk_Up_0"]);
        assert_eq!(output.frames[0].rect.y, 7);
        assert_eq!(output.frames[1].rect.y, 3);
    }

    #[test]
    fn test_duplicate_names_are_reported_not_removed() {
        let spec = Specification::new(vec![RowSpec::new("Idle").into(), RowSpec::new("Idle").into()]);
        let sheet = opaque_sheet(2, 2, 4);
        let output = slice_sheet(&sheet, &spec, CellSize::new(4, 4), "hero").unwrap();

        assert_eq!(output.frames.len(), 4);
        let dupes: Vec<_> =
            output.warnings.iter().filter(|w| w.message.contains("emitted more than once")).collect();
        assert_eq!(dupes.len(), 2);
    }

    #[test]
    fn test_names_unique_for_well_formed_spec() {
        let spec = Specification::new(vec![
            RowEntry::new(RowSpec::new("Walk").with_sub_categories(["Up", "Left", "Down", "Right"]))
                .with_special(
                    SpecialWindow::new("Idle", 0, 1).with_sub_categories(["Up", "Left", "Down", "Right"]),
                ),
            RowEntry::new(RowSpec::new("Cast")).with_special(SpecialWindow::new("Charge", 0, 2)),
        ]);
        let sheet = opaque_sheet(9, 7, 2);
        let output = slice_sheet(&sheet, &spec, CellSize::new(2, 2), "mage").unwrap();

        let unique: HashSet<_> = output.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(unique.len(), output.frames.len());
        assert_eq!(output.frames.len(), 63);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_default_slicer_settings() {
        let spec = walk_spec();
        let slicer = Slicer::new(&spec);
        assert_eq!(slicer.cell_size(), CellSize::new(64, 64));
    }
}

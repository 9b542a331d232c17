//! Grid geometry: row/column counts and bottom padding

use super::error::SliceError;
use crate::sheet::CellRect;
use serde::{Deserialize, Serialize};

/// Fixed size of every frame in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `WIDTHxHEIGHT` string such as `"64x64"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.trim().split_once(|c: char| c == 'x' || c == 'X')?;
        Some(Self::new(w.trim().parse().ok()?, h.trim().parse().ok()?))
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(64, 64)
    }
}

impl std::fmt::Display for CellSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Partition of a sheet into equally sized cells.
///
/// Leftover pixels at the right edge are ignored. Leftover pixels on the
/// vertical axis are padding below the last row: every row is shifted up by
/// `bottom_padding`, so sprites must be aligned to the top of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub cell: CellSize,
    pub rows: u32,
    pub cols: u32,
    pub bottom_padding: u32,
}

impl GridLayout {
    /// Compute the grid for a sheet of `width` x `height` pixels.
    pub fn compute(width: u32, height: u32, cell: CellSize) -> Result<Self, SliceError> {
        if cell.width == 0 || cell.height == 0 {
            return Err(SliceError::InvalidCellSize { width: cell.width, height: cell.height });
        }

        Ok(Self {
            cell,
            rows: height / cell.height,
            cols: width / cell.width,
            bottom_padding: height % cell.height,
        })
    }

    /// Pixel rectangle of a cell. Row 0 is the topmost row of the sheet.
    pub fn cell_rect(&self, row: u32, col: u32) -> CellRect {
        let y = self.bottom_padding + (self.rows - 1 - row) * self.cell.height;
        CellRect::new(col * self.cell.width, y, self.cell.width, self.cell.height)
    }

    pub fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }
}

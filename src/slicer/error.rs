//! Error types for grid slicing

use thiserror::Error;

/// Configuration error that aborts a slice before any frame is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// Cell width or height is zero
    #[error("Cell size must be positive, got {width}x{height}")]
    InvalidCellSize { width: u32, height: u32 },
}

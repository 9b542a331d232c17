//! Sprite Composer - grid sprite-sheet slicing and frame naming
//!
//! This library provides functionality to:
//! - Partition a sprite sheet into fixed-size cells, skipping empty ones
//! - Name every frame from a row-oriented naming specification
//! - Export frame rectangles as generic JSON or Unity sprite metadata
//! - Select and populate sprite libraries for modular characters
//!
//! Recoverable problems are returned as [`warning::Warning`] values next to
//! results. Configuration errors abort the operation and produce no output.

pub mod cli;
pub mod config;
pub mod export;
pub mod library;
pub mod naming;
pub mod sheet;
pub mod slicer;
pub mod warning;

//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod populate;
mod slice;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::warning::Warning;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Check if a path looks like a PNG sprite sheet.
pub fn is_sheet_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Find the PNG sheets directly inside a directory, sorted by path.
pub fn find_sheet_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match glob(&format!("{}/*", dir.display())) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| is_sheet_file(p)).collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// Print warnings to stderr, prefixed with their source.
pub(crate) fn print_warnings(source: &str, warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("Warning: {}: {}", source, warning);
    }
}

/// Sprite Composer - slice grid sprite sheets into named frames
#[derive(Parser)]
#[command(name = "sprcomp")]
#[command(about = "Sprite Composer - slice grid sprite sheets into named frames")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Slice a sprite sheet (or every PNG in a directory) into named frames
    Slice {
        /// Input PNG sheet, or a directory of PNG sheets
        input: PathBuf,

        /// Naming specification (.json, .json5 or .toml)
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Cell size as WIDTHxHEIGHT (default: 64x64)
        #[arg(long)]
        cell: Option<String>,

        /// Output format: json, unity
        #[arg(long)]
        format: Option<String>,

        /// Output file (single sheet) or directory (batch).
        /// If omitted: single sheet prints to stdout, batch writes next to each sheet
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Path to sprcomp.toml (default: search upward from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load and lint a naming specification
    Check {
        /// Naming specification (.json, .json5 or .toml)
        #[arg(long)]
        spec: PathBuf,

        /// Sheet width in columns, enables window range checks
        #[arg(long)]
        cols: Option<u32>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Build a sprite library for a sliced sheet from a template library
    Populate {
        /// Template library JSON
        #[arg(long)]
        template: PathBuf,

        /// JSON frame list written by `sprcomp slice --format json`
        #[arg(long)]
        frames: PathBuf,

        /// Sheet name used in sprite references (default: image stem from the frame list)
        #[arg(long)]
        sheet: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slice { input, spec, cell, format, output, strict, compact, config } => {
            slice::run_slice(
                &input,
                spec.as_deref(),
                cell.as_deref(),
                format.as_deref(),
                output.as_deref(),
                strict,
                compact,
                config.as_deref(),
            )
        }
        Commands::Check { spec, cols, strict } => check::run_check(&spec, cols, strict),
        Commands::Populate { template, frames, sheet, output } => {
            populate::run_populate(&template, &frames, sheet.as_deref(), output.as_deref())
        }
    }
}

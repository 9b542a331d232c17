//! Slice command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rayon::prelude::*;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, ComposerConfig, ExportFormat};
use crate::export::{exporter_for, ExportOptions, Exporter, SheetMetadata};
use crate::naming::{load_specification, Specification};
use crate::slicer::{CellSize, Slicer};
use crate::warning::Warning;

use super::{find_sheet_files, print_warnings, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// One sliced sheet, ready to export.
struct SlicedSheet {
    path: PathBuf,
    metadata: SheetMetadata,
    warnings: Vec<Warning>,
}

/// Execute the slice command
pub fn run_slice(
    input: &Path,
    spec: Option<&Path>,
    cell: Option<&str>,
    format: Option<&str>,
    output: Option<&Path>,
    strict: bool,
    compact: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let cell = match cell.map(|c| (c, CellSize::parse(c))) {
        Some((_, Some(size))) => Some(size),
        Some((raw, None)) => {
            eprintln!("Error: Invalid --cell '{}' (expected WIDTHxHEIGHT, e.g. 64x64)", raw);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        None => None,
    };

    let format = match format.map(str::parse::<ExportFormat>).transpose() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let overrides = CliOverrides {
        cell_width: cell.map(|c| c.width),
        cell_height: cell.map(|c| c.height),
        spec: spec.map(Path::to_path_buf),
        format,
        strict: strict.then_some(true),
        pretty: compact.then_some(false),
    };
    merge_cli_overrides(&mut config, &overrides);

    let specification = match &config.slice.spec {
        Some(path) => match load_specification(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => {
            eprintln!(
                "Error: no naming specification given (use --spec or [slice] spec in sprcomp.toml)"
            );
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let batch = input.is_dir();
    let sheets = if batch {
        let files = find_sheet_files(input);
        if files.is_empty() {
            eprintln!("Error: No PNG sheets found in {}", input.display());
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        files
    } else {
        vec![input.to_path_buf()]
    };

    // Each sheet is sliced independently; results keep input order.
    let results: Vec<Result<SlicedSheet, String>> =
        sheets.par_iter().map(|path| slice_file(path, &specification, &config)).collect();

    let mut sliced = Vec::with_capacity(results.len());
    let mut failed = false;
    for result in results {
        match result {
            Ok(sheet) => sliced.push(sheet),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }
    if failed {
        return ExitCode::from(EXIT_ERROR);
    }

    let warning_count: usize = sliced.iter().map(|s| s.warnings.len()).sum();
    if config.slice.strict && warning_count > 0 {
        for sheet in &sliced {
            for warning in &sheet.warnings {
                eprintln!("Error: {}: {}", sheet.path.display(), warning);
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }
    for sheet in &sliced {
        print_warnings(&sheet.path.display().to_string(), &sheet.warnings);
    }

    let exporter = exporter_for(&config.export);
    let options = ExportOptions { pretty: config.export.pretty };

    if !batch {
        let Some(sheet) = sliced.first() else {
            return ExitCode::from(EXIT_ERROR);
        };
        return match output {
            Some(path) => exit_code(write_export(exporter.as_ref(), sheet, path, &options)),
            None => match exporter.export_to_string(&sheet.metadata, &options) {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::from(EXIT_SUCCESS)
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_ERROR)
                }
            },
        };
    }

    let out_dir = output.unwrap_or(input);
    for sheet in &sliced {
        let path = out_dir.join(batch_file_name(&sheet.path, exporter.as_ref()));
        if !write_export(exporter.as_ref(), sheet, &path, &options) {
            return ExitCode::from(EXIT_ERROR);
        }
    }
    println!("Sliced {} sheets into {}", sliced.len(), out_dir.display());

    ExitCode::from(EXIT_SUCCESS)
}

/// Open and slice one sheet. Errors are rendered with the sheet's path.
fn slice_file(
    path: &Path,
    spec: &Specification,
    config: &ComposerConfig,
) -> Result<SlicedSheet, String> {
    let image = image::open(path)
        .map_err(|e| format!("Cannot open image {}: {}", path.display(), e))?
        .to_rgba8();

    let output = Slicer::new(spec)
        .with_cell_size(config.slice.cell_size())
        .with_sheet_name(sheet_name(path))
        .slice(&image)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let metadata = SheetMetadata::from_slice(file_name, image.dimensions(), &output);

    Ok(SlicedSheet { path: path.to_path_buf(), metadata, warnings: output.warnings })
}

fn write_export(
    exporter: &dyn Exporter,
    sheet: &SlicedSheet,
    path: &Path,
    options: &ExportOptions,
) -> bool {
    match exporter.export(&sheet.metadata, path, options) {
        Ok(()) => {
            eprintln!(
                "Wrote {} frames ({}) to {}",
                sheet.metadata.frames.len(),
                exporter.format_name(),
                path.display()
            );
            true
        }
        Err(e) => {
            eprintln!("Error: Failed to write '{}': {}", path.display(), e);
            false
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    ExitCode::from(if ok { EXIT_SUCCESS } else { EXIT_ERROR })
}

/// `hero.png` becomes `hero.json`, or `hero.unity.json` for formats that
/// share the `json` extension.
fn batch_file_name(sheet: &Path, exporter: &dyn Exporter) -> String {
    let stem = sheet_name(sheet);
    if exporter.format_name() == exporter.extension() {
        format!("{}.{}", stem, exporter.extension())
    } else {
        format!("{}.{}.{}", stem, exporter.format_name(), exporter.extension())
    }
}

/// Sheet name used for overflow frames: the file stem.
fn sheet_name(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "sheet".to_string())
}

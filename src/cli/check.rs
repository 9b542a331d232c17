//! Check command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::naming::load_specification;

use super::{print_warnings, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the check command
pub fn run_check(spec_path: &Path, cols: Option<u32>, strict: bool) -> ExitCode {
    let spec = match load_specification(spec_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}: {}", spec_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let warnings = spec.lint(cols);
    let source = spec_path.display().to_string();

    println!(
        "{}: {} entries covering {} rows",
        source,
        spec.rows.len(),
        spec.declared_row_count()
    );
    for entry in &spec.rows {
        let row = &entry.row;
        match &entry.special {
            Some(window) => println!(
                "  {} x{} (special {} at {}..{})",
                row.category,
                row.row_span(),
                window.category,
                window.start_index,
                window.end()
            ),
            None => println!("  {} x{}", row.category, row.row_span()),
        }
    }

    if warnings.is_empty() {
        return ExitCode::from(EXIT_SUCCESS);
    }

    if strict {
        for warning in &warnings {
            eprintln!("Error: {}: {}", source, warning);
        }
        return ExitCode::from(EXIT_ERROR);
    }

    print_warnings(&source, &warnings);
    ExitCode::from(EXIT_SUCCESS)
}

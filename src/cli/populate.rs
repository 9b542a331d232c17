//! Populate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::export::read_json;
use crate::library::{populate, SpriteLibrary};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the populate command
pub fn run_populate(
    template_path: &Path,
    frames_path: &Path,
    sheet: Option<&str>,
    output: Option<&Path>,
) -> ExitCode {
    let template = match SpriteLibrary::load(template_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}: {}", template_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let metadata = match read_json(frames_path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}: {}", frames_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let sheet = match sheet {
        Some(name) => name.to_string(),
        None => Path::new(&metadata.image)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| metadata.image.clone()),
    };

    let (library, stats) = populate(&template, metadata.frame_names(), &sheet);

    match output {
        Some(path) => {
            if let Err(e) = library.save(path, true) {
                eprintln!("Error: Failed to write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        None => match serde_json::to_string_pretty(&library) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    eprintln!(
        "Populated '{}': {} labels replaced, {} kept from template",
        sheet, stats.replaced, stats.kept
    );
    ExitCode::from(EXIT_SUCCESS)
}

//! Config discovery tests.
//!
//! These change the process working directory and environment, so every
//! test runs serially.

use serial_test::serial;
use sprite_composer::config::{find_config, load_config, ExportFormat, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Run `f` with `dir` as the working directory and `xdg` as XDG_CONFIG_HOME.
fn in_dir<F, R>(dir: &Path, xdg: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original_dir = std::env::current_dir().unwrap();
    let original_xdg = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_current_dir(dir).unwrap();
    std::env::set_var("XDG_CONFIG_HOME", xdg);

    let result = f();

    std::env::set_current_dir(original_dir).unwrap();
    match original_xdg {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    result
}

#[test]
#[serial]
fn test_discovers_config_in_parent_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let nested = project.join("art").join("characters");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        project.join(CONFIG_FILE_NAME),
        "[slice]\ncell_width = 48\nspec = \"naming/rows.json\"\n\n[export]\nformat = \"unity\"\n",
    )
    .unwrap();

    let config = in_dir(&nested, &temp.path().join("xdg"), || load_config(None)).unwrap();

    assert_eq!(config.slice.cell_width, 48);
    assert_eq!(config.slice.cell_height, 64);
    assert_eq!(config.export.format, ExportFormat::Unity);
    let spec = config.slice.spec.unwrap();
    assert!(spec.ends_with(PathBuf::from("project").join("naming").join("rows.json")));
}

#[test]
#[serial]
fn test_falls_back_to_xdg_config() {
    let temp = TempDir::new().unwrap();
    let work = temp.path().join("work");
    let xdg = temp.path().join("xdg");
    fs::create_dir_all(&work).unwrap();
    fs::create_dir_all(xdg.join("sprite-composer")).unwrap();
    fs::write(xdg.join("sprite-composer").join(CONFIG_FILE_NAME), "[slice]\nstrict = true\n").unwrap();

    let (found, config) = in_dir(&work, &xdg, || (find_config(), load_config(None)));

    assert_eq!(found, Some(xdg.join("sprite-composer").join(CONFIG_FILE_NAME)));
    assert!(config.unwrap().slice.strict);
}

#[test]
#[serial]
fn test_defaults_without_config() {
    let temp = TempDir::new().unwrap();
    let config = in_dir(temp.path(), &temp.path().join("xdg"), || load_config(None)).unwrap();

    assert_eq!(config.slice.cell_width, 64);
    assert!(config.slice.spec.is_none());
    assert_eq!(config.export.format, ExportFormat::Json);
}

//! Sprite libraries and populating them from a freshly sliced sheet
//!
//! A sprite library maps `category -> label -> sprite`. Populating copies the
//! structure of a template library and points every label whose name matches
//! a frame of the new sheet at that frame.

use super::LibraryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One label within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryLabel {
    pub name: String,
    /// Sprite reference, `"{sheet}#{frame}"` for sprites taken from a sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

/// A named group of labels, usually one animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryCategory {
    pub name: String,
    #[serde(default)]
    pub labels: Vec<LibraryLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteLibrary {
    #[serde(default)]
    pub categories: Vec<LibraryCategory>,
}

/// Counts reported by [`populate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateStats {
    pub replaced: usize,
    pub kept: usize,
}

/// Reference to a frame of a sheet.
pub fn sprite_ref(sheet: &str, frame: &str) -> String {
    format!("{}#{}", sheet, frame)
}

impl SpriteLibrary {
    pub fn load(path: &Path) -> Result<Self, LibraryError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), LibraryError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        fs::write(path, json)?;
        Ok(())
    }

    /// Look up the sprite of a label.
    pub fn sprite(&self, category: &str, label: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.name == category)?
            .labels
            .iter()
            .find(|l| l.name == label)?
            .sprite
            .as_deref()
    }

    pub fn label_count(&self) -> usize {
        self.categories.iter().map(|c| c.labels.len()).sum()
    }
}

/// Build a library for `sheet` using `template`'s categories and labels.
///
/// Labels named after one of `frames` point to that frame of `sheet`. All
/// other labels keep the template's sprite.
pub fn populate<'a, I>(template: &SpriteLibrary, frames: I, sheet: &str) -> (SpriteLibrary, PopulateStats)
where
    I: IntoIterator<Item = &'a str>,
{
    let frames: HashSet<&str> = frames.into_iter().collect();
    let mut stats = PopulateStats::default();

    let categories = template
        .categories
        .iter()
        .map(|category| LibraryCategory {
            name: category.name.clone(),
            labels: category
                .labels
                .iter()
                .map(|label| {
                    let sprite = if frames.contains(label.name.as_str()) {
                        stats.replaced += 1;
                        Some(sprite_ref(sheet, &label.name))
                    } else {
                        stats.kept += 1;
                        label.sprite.clone()
                    };
                    LibraryLabel { name: label.name.clone(), sprite }
                })
                .collect(),
        })
        .collect();

    log::debug!(
        "populated library for '{}': {} replaced, {} kept",
        sheet,
        stats.replaced,
        stats.kept
    );
    (SpriteLibrary { categories }, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn label(name: &str, sprite: &str) -> LibraryLabel {
        LibraryLabel { name: name.to_string(), sprite: Some(sprite.to_string()) }
    }

    fn template() -> SpriteLibrary {
        SpriteLibrary {
            categories: vec![
                LibraryCategory {
                    name: "Walk".to_string(),
                    labels: vec![
                        label("Walk_Down_0", "dummy#Walk_Down_0"),
                        label("Walk_Down_1", "dummy#Walk_Down_1"),
                    ],
                },
                LibraryCategory {
                    name: "Hurt".to_string(),
                    labels: vec![label("Hurt", "dummy#Hurt")],
                },
            ],
        }
    }

    #[test]
    fn test_populate_replaces_matching_labels() {
        let (library, stats) = populate(&template(), ["Walk_Down_0", "Walk_Down_1", "Idle_Down"], "hero");

        assert_eq!(stats, PopulateStats { replaced: 2, kept: 1 });
        assert_eq!(library.sprite("Walk", "Walk_Down_0"), Some("hero#Walk_Down_0"));
        assert_eq!(library.sprite("Walk", "Walk_Down_1"), Some("hero#Walk_Down_1"));
        assert_eq!(library.sprite("Hurt", "Hurt"), Some("dummy#Hurt"));
    }

    #[test]
    fn test_populate_keeps_structure() {
        let template = template();
        let (library, _) = populate(&template, std::iter::empty(), "hero");
        assert_eq!(library, template);
        assert_eq!(library.label_count(), 3);
    }

    #[test]
    fn test_populate_label_without_sprite() {
        let template = SpriteLibrary {
            categories: vec![LibraryCategory {
                name: "Idle".to_string(),
                labels: vec![LibraryLabel { name: "Idle_Up".to_string(), sprite: None }],
            }],
        };
        let (library, stats) = populate(&template, ["Idle_Down"], "hero");
        assert_eq!(stats.kept, 1);
        assert_eq!(library.sprite("Idle", "Idle_Up"), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hero_library.json");

        let (library, _) = populate(&template(), ["Hurt"], "hero");
        library.save(&path, true).unwrap();

        let loaded = SpriteLibrary::load(&path).unwrap();
        assert_eq!(loaded, library);
        assert_eq!(loaded.sprite("Hurt", "Hurt"), Some("hero#Hurt"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ categories: ").unwrap();
        assert!(matches!(SpriteLibrary::load(&path), Err(LibraryError::Json(_))));
    }
}

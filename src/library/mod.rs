//! Sprite library selection and population
//!
//! - [`id`]: identifier parts and selectors for gender, race, color and part
//! - [`definition`]: which characters a library applies to
//! - [`resolver`]: picks a library per part slot for one character
//! - [`populate`]: builds a library for a new sheet from a template

pub mod definition;
pub mod id;
pub mod populate;
pub mod resolver;

pub use definition::{LibraryDefinition, Mismatch};
pub use id::{normalize_id_part, ColorPermutation, Gender, IdPart, Race, Selector};
pub use populate::{populate, sprite_ref, LibraryCategory, LibraryLabel, PopulateStats, SpriteLibrary};
pub use resolver::{Assignment, CharacterResolver, Resolution};

use thiserror::Error;

/// Error reading or writing a sprite library file
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("Failed to read library: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid library JSON: {0}")]
    Json(#[from] serde_json::Error),
}

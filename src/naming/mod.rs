//! Row naming specification
//!
//! A [`Specification`] is an ordered list of [`RowEntry`] values. Each entry
//! declares one logical animation row (e.g. "Walk") and expands to one grid
//! row per sub-category ("Up", "Left", "Down", "Right"), or to a single grid
//! row when it has no sub-categories. Declaration order assigns grid rows from
//! the top of the sheet down.
//!
//! An entry may carry a [`SpecialWindow`]: a contiguous column range inside
//! each of its rows that is named after a different category (e.g. the
//! standing "Idle" frame at the start of every "Walk" row).

mod lint;
mod loader;

pub use loader::{load_specification, parse_specification, SpecError, SpecFormat};

use serde::{Deserialize, Serialize};

/// A declared animation row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    /// Category name, e.g. "Walk"
    pub category: String,
    /// Sub-category names, one grid row each. Empty means a single implicit row.
    #[serde(default)]
    pub sub_categories: Vec<String>,
}

impl RowSpec {
    pub fn new(category: impl Into<String>) -> Self {
        Self { category: category.into(), sub_categories: Vec::new() }
    }

    pub fn with_sub_categories<I, S>(mut self, sub_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_categories = sub_categories.into_iter().map(Into::into).collect();
        self
    }

    /// Number of grid rows this entry occupies.
    pub fn row_span(&self) -> usize {
        self.sub_categories.len().max(1)
    }

    /// Sub-category for a local row index, or `""` when there is none.
    pub fn sub_category(&self, index: usize) -> &str {
        self.sub_categories.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Column range of a row that is named with an alternate category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialWindow {
    /// Category used for frames inside the window, e.g. "Idle"
    pub category: String,
    /// Sub-categories, indexed by the owning row's local sub-category index
    #[serde(default)]
    pub sub_categories: Vec<String>,
    /// First column of the window
    #[serde(default)]
    pub start_index: u32,
    /// Number of columns in the window
    #[serde(default)]
    pub size: u32,
}

impl SpecialWindow {
    pub fn new(category: impl Into<String>, start_index: u32, size: u32) -> Self {
        Self { category: category.into(), sub_categories: Vec::new(), start_index, size }
    }

    pub fn with_sub_categories<I, S>(mut self, sub_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_categories = sub_categories.into_iter().map(Into::into).collect();
        self
    }

    /// One past the last column of the window.
    pub fn end(&self) -> u32 {
        self.start_index.saturating_add(self.size)
    }

    /// Whether a column counter value falls inside the window.
    pub fn contains(&self, counter: u32) -> bool {
        counter >= self.start_index && counter < self.end()
    }

    pub fn sub_category(&self, index: usize) -> &str {
        self.sub_categories.get(index).map(String::as_str).unwrap_or("")
    }
}

/// One specification entry: a row definition plus its optional special window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEntry {
    #[serde(flatten)]
    pub row: RowSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialWindow>,
}

impl RowEntry {
    pub fn new(row: RowSpec) -> Self {
        Self { row, special: None }
    }

    pub fn with_special(mut self, special: SpecialWindow) -> Self {
        self.special = Some(special);
        self
    }
}

impl From<RowSpec> for RowEntry {
    fn from(row: RowSpec) -> Self {
        Self::new(row)
    }
}

/// Ordered list of row entries describing a sprite sheet's layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(default)]
    pub rows: Vec<RowEntry>,
}

impl Specification {
    pub fn new(rows: Vec<RowEntry>) -> Self {
        Self { rows }
    }

    /// Number of grid rows covered by the specification.
    ///
    /// Entries without sub-categories still occupy one row.
    pub fn declared_row_count(&self) -> usize {
        self.rows.iter().map(|entry| entry.row.row_span()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

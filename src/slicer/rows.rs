//! Mapping grid rows to specification entries

use crate::naming::{RowEntry, Specification};

/// What a grid row resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMatch<'a> {
    /// The row is covered by a specification entry.
    Declared {
        entry: &'a RowEntry,
        /// Index of the row among the entry's sub-category rows
        local_index: usize,
    },
    /// The row lies past every declared row.
    Overflow {
        /// `row - declared_row_count`
        ordinal: u32,
    },
}

impl<'a> RowMatch<'a> {
    /// Sub-category name of a declared row, `""` for overflow rows or
    /// entries without sub-categories.
    pub fn sub_category(&self) -> &'a str {
        match *self {
            RowMatch::Declared { entry, local_index } => entry.row.sub_category(local_index),
            RowMatch::Overflow { .. } => "",
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, RowMatch::Overflow { .. })
    }
}

/// Resolve grid row `row` against the specification.
///
/// Entries are walked in declaration order; each one covers
/// `max(1, sub_categories.len())` consecutive rows.
pub fn resolve_row(row: u32, spec: &Specification) -> RowMatch<'_> {
    let row = row as usize;
    let mut start = 0usize;

    for entry in &spec.rows {
        let span = entry.row.row_span();
        if row < start + span {
            return RowMatch::Declared { entry, local_index: row - start };
        }
        start += span;
    }

    RowMatch::Overflow { ordinal: (row - start) as u32 }
}

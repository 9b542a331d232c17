//! Static checks for malformed specification entries
//!
//! None of these problems stop a slice. Each one has a defined fallback
//! (empty sub-category, clamped window) and is reported as a [`Warning`].

use super::Specification;
use crate::warning::Warning;
use std::collections::HashSet;

impl Specification {
    /// Report malformed entries.
    ///
    /// `total_cols` is the sheet's column count when known; it enables the
    /// check for special windows that run past the end of the row.
    pub fn lint(&self, total_cols: Option<u32>) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        for (index, entry) in self.rows.iter().enumerate() {
            let row = &entry.row;
            let label = describe(index, &row.category);

            if row.category.trim().is_empty() {
                warnings.push(Warning::logged(format!("{}: category is empty", label)));
            }

            for local in 0..row.row_span() {
                let key = (row.category.as_str(), row.sub_category(local));
                if !seen.insert(key) {
                    warnings.push(Warning::logged(format!(
                        "{}: row '{}' is declared more than once; frame names will collide",
                        label,
                        join_name(key.0, key.1)
                    )));
                }
            }

            let Some(special) = &entry.special else {
                continue;
            };

            if special.category.trim().is_empty() {
                warnings.push(Warning::logged(format!("{}: special category is empty", label)));
            }

            if special.size == 0 {
                warnings.push(Warning::logged(format!(
                    "{}: special window at column {} has size 0; columns from there on are still renumbered from 0",
                    label, special.start_index
                )));
            }

            if !special.sub_categories.is_empty() && special.sub_categories.len() < row.row_span() {
                warnings.push(Warning::logged(format!(
                    "{}: special window has {} sub-categories but the row has {}; missing ones are named without a sub-category",
                    label,
                    special.sub_categories.len(),
                    row.row_span()
                )));
            }

            if let Some(cols) = total_cols {
                if special.end() > cols {
                    warnings.push(Warning::logged(format!(
                        "{}: special window {}..{} exceeds the row width of {} columns",
                        label,
                        special.start_index,
                        special.end(),
                        cols
                    )));
                }
            }
        }

        warnings
    }
}

fn describe(index: usize, category: &str) -> String {
    if category.is_empty() {
        format!("row entry #{}", index)
    } else {
        format!("row entry #{} '{}'", index, category)
    }
}

fn join_name(category: &str, sub_category: &str) -> String {
    if sub_category.is_empty() {
        category.to_string()
    } else {
        format!("{}_{}", category, sub_category)
    }
}

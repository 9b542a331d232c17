//! Per-column frame classification

use super::rows::RowMatch;
use crate::naming::SpecialWindow;

/// How a frame is named, with everything its name is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameClass<'a> {
    /// Row beyond the specification; named after the sheet
    Overflow { ordinal: u32, counter: u32 },
    /// Column inside the row's special window
    Special { window: &'a SpecialWindow, sub_category: &'a str, local_index: u32 },
    /// Regular column of a declared row
    Normal { category: &'a str, sub_category: &'a str, local_index: u32 },
}

impl FrameClass<'_> {
    /// Index that ends up in the frame name (before the size-1 special rule).
    pub fn local_index(&self) -> u32 {
        match *self {
            FrameClass::Overflow { counter, .. } => counter,
            FrameClass::Special { local_index, .. } | FrameClass::Normal { local_index, .. } => {
                local_index
            }
        }
    }
}

/// Classify a column given its running counter value (before increment).
///
/// Columns before a special window keep their absolute index while columns
/// after it count again from 0. Both halves are part of the naming scheme:
/// with `Idle` at column 2 of a `Walk` row the frames read
/// `Walk_0, Walk_1, Idle, Walk_0, Walk_1, ...`.
pub fn classify<'a>(row: &RowMatch<'a>, counter: u32) -> FrameClass<'a> {
    let (entry, local_row) = match *row {
        RowMatch::Overflow { ordinal } => return FrameClass::Overflow { ordinal, counter },
        RowMatch::Declared { entry, local_index } => (entry, local_index),
    };

    let category = entry.row.category.as_str();
    let sub_category = entry.row.sub_category(local_row);

    match &entry.special {
        Some(window) if window.contains(counter) => FrameClass::Special {
            window,
            sub_category: window.sub_category(local_row),
            local_index: counter - window.start_index,
        },
        Some(window) if counter >= window.end() => {
            FrameClass::Normal { category, sub_category, local_index: counter - window.end() }
        }
        _ => FrameClass::Normal { category, sub_category, local_index: counter },
    }
}

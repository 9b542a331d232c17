//! Frame name synthesis

use super::classify::FrameClass;

/// Build the name of a frame.
///
/// | Class | Name |
/// |-------|------|
/// | Overflow | `{sheet}_{ordinal}_{counter}` |
/// | Special, window size 1 | `{special}` or `{special}_{sub}` |
/// | Special, larger window | `{special}_{index}` or `{special}_{sub}_{index}` |
/// | Normal | `{category}_{index}` or `{category}_{sub}_{index}` |
pub fn frame_name(sheet_name: &str, class: &FrameClass<'_>) -> String {
    match *class {
        FrameClass::Overflow { ordinal, counter } => {
            format!("{}_{}_{}", sheet_name, ordinal, counter)
        }
        FrameClass::Special { window, sub_category, local_index } => {
            if window.size == 1 {
                join(&window.category, sub_category)
            } else {
                indexed(&window.category, sub_category, local_index)
            }
        }
        FrameClass::Normal { category, sub_category, local_index } => {
            indexed(category, sub_category, local_index)
        }
    }
}

fn join(category: &str, sub_category: &str) -> String {
    if sub_category.is_empty() {
        category.to_string()
    } else {
        format!("{}_{}", category, sub_category)
    }
}

fn indexed(category: &str, sub_category: &str, index: u32) -> String {
    format!("{}_{}", join(category, sub_category), index)
}

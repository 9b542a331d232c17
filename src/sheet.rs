//! Read-only pixel access for sprite sheets
//!
//! Cell rectangles use a bottom-left origin: `y` counts pixel rows up from
//! the bottom edge of the sheet, the way the sprite importer consuming the
//! slicer output expects. [`Sheet`] implementations translate from their own
//! storage order.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Alpha-readable pixel buffer.
pub trait Sheet {
    /// Sheet size in pixels as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Alpha of the pixel at column `x`, row `y` counted from the bottom edge.
    ///
    /// Callers only pass coordinates inside [`Sheet::dimensions`].
    fn alpha(&self, x: u32, y: u32) -> u8;
}

impl Sheet for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn alpha(&self, x: u32, y: u32) -> u8 {
        // image rows are stored top-down
        let row = self.height() - 1 - y;
        self.get_pixel(x, row)[3]
    }
}

/// Integer pixel rectangle with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// `y` of the same rectangle measured from the top edge of a sheet.
    pub fn top_down_y(&self, sheet_height: u32) -> u32 {
        sheet_height - self.y - self.height
    }
}

/// Check whether every pixel inside `rect` has zero alpha.
///
/// The rectangle must lie inside the sheet.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use sprite_composer::sheet::{is_rect_transparent, CellRect};
///
/// let mut sheet = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
/// assert!(is_rect_transparent(&sheet, &CellRect::new(0, 0, 4, 4)));
///
/// sheet.put_pixel(3, 0, Rgba([255, 255, 255, 1]));
/// // (3, 0) in image space is the top row, which is y = 3 from the bottom
/// assert!(!is_rect_transparent(&sheet, &CellRect::new(2, 2, 2, 2)));
/// assert!(is_rect_transparent(&sheet, &CellRect::new(0, 0, 2, 2)));
/// ```
pub fn is_rect_transparent<S: Sheet + ?Sized>(sheet: &S, rect: &CellRect) -> bool {
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            if sheet.alpha(x, y) != 0 {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_alpha_is_bottom_up() {
        let mut img = RgbaImage::from_pixel(2, 3, CLEAR);
        img.put_pixel(1, 2, Rgba([10, 20, 30, 200]));

        // image row 2 is the bottom row
        assert_eq!(Sheet::alpha(&img, 1, 0), 200);
        assert_eq!(Sheet::alpha(&img, 1, 2), 0);
        assert_eq!(Sheet::dimensions(&img), (2, 3));
    }

    #[test]
    fn test_transparent_rect() {
        let img = RgbaImage::from_pixel(8, 8, CLEAR);
        assert!(is_rect_transparent(&img, &CellRect::new(0, 0, 8, 8)));
        assert!(is_rect_transparent(&img, &CellRect::new(4, 4, 4, 4)));
    }

    #[test]
    fn test_colored_but_transparent_pixels_count_as_transparent() {
        // RGB is ignored, only alpha matters
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 255, 0]));
        assert!(is_rect_transparent(&img, &CellRect::new(0, 0, 4, 4)));
    }

    #[test]
    fn test_single_opaque_pixel_in_last_position() {
        let mut img = RgbaImage::from_pixel(4, 4, CLEAR);
        // top-right corner in image space is the last pixel scanned for the upper-right cell
        img.put_pixel(3, 0, Rgba([0, 0, 0, 1]));
        assert!(!is_rect_transparent(&img, &CellRect::new(2, 2, 2, 2)));
        assert!(is_rect_transparent(&img, &CellRect::new(0, 2, 2, 2)));
        assert!(is_rect_transparent(&img, &CellRect::new(2, 0, 2, 2)));
    }

    #[test]
    fn test_zero_sized_rect_is_transparent() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        assert!(is_rect_transparent(&img, &CellRect::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_top_down_y() {
        let rect = CellRect::new(0, 4, 64, 64);
        assert_eq!(rect.top_down_y(132), 64);
    }
}

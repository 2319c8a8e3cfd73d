//! Icon geometry and naming.
//!
//! Small value types shared by the layers: the pixel rectangle used for the
//! background inset, and the naming scheme of generated files.

/// Sizes of the stock icon set, in generation order.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Returns the file name an icon of the given size is written to.
///
/// ```
/// assert_eq!(glyph_icons::icon_file_name(48), "icon48.png");
/// ```
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Shrinks the rectangle by `margin` pixels on every side.
    ///
    /// Returns `None` when nothing is left.
    pub fn inset(&self, margin: u32) -> Option<Self> {
        let width = self.width.checked_sub(margin.checked_mul(2)?)?;
        let height = self.height.checked_sub(margin.checked_mul(2)?)?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self::new(self.x + margin, self.y + margin, width, height))
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_size() {
        let names: Vec<_> = DEFAULT_SIZES.iter().map(|&s| icon_file_name(s)).collect();
        assert_eq!(names, ["icon16.png", "icon48.png", "icon128.png"]);
    }

    #[test]
    fn inset_shrinks_every_side() {
        let rect = RectPx::from_size(128, 128).inset(4).unwrap();
        assert_eq!(rect, RectPx::new(4, 4, 120, 120));
        assert_eq!(rect.right(), 124);
        assert_eq!(rect.bottom(), 124);
    }

    #[test]
    fn zero_inset_is_identity() {
        let rect = RectPx::from_size(16, 16);
        assert_eq!(rect.inset(0), Some(rect));
    }

    #[test]
    fn inset_larger_than_rect() {
        assert_eq!(RectPx::from_size(8, 8).inset(4), None);
        assert_eq!(RectPx::from_size(8, 8).inset(5), None);
    }
}

//! Layer infrastructure for icon rendering.
//!
//! An icon is painted by a fixed [`LayerPipeline`]: each layer draws onto the
//! shared [`RenderContext`] canvas in order.
//!
//! ```text
//! transparent canvas
//!     │
//!     ▼
//! ┌────────────┐
//! │ Background │  filled ellipse, inset by size / 32
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │   Glyph    │  centered character, raised by size / 8
//! └─────┬──────┘
//!       ▼
//!   RgbaImage
//! ```

pub mod background;
pub mod glyph;
pub mod svg;

pub use background::BackgroundLayer;
pub use glyph::{GlyphBounds, GlyphLayer, GlyphLayout};

use image::RgbaImage;
use resvg::tiny_skia::Pixmap;

use crate::error::{IconError, Result};
use crate::font::FontResolver;
use crate::style::IconStyle;

// ============================================================================
// Render Context
// ============================================================================

/// The canvas of a single render call.
pub struct RenderContext {
    /// Width and height of the canvas.
    pub size: u32,

    /// Premultiplied RGBA pixels, transparent when created.
    pub pixmap: Pixmap,
}

impl RenderContext {
    /// Allocates a transparent `size x size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        let pixmap = Pixmap::new(size, size).ok_or(IconError::Canvas { size })?;
        Ok(Self { size, pixmap })
    }

    /// Converts the canvas to a straight-alpha image.
    pub fn into_image(self) -> Result<RgbaImage> {
        let size = self.size;
        svg::pixmap_to_rgba_image(&self.pixmap).ok_or(IconError::Canvas { size })
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// Something that paints onto the canvas.
pub trait Layer {
    /// Draws this layer over whatever is already on the canvas.
    fn paint(&self, ctx: &mut RenderContext);
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The layers of an icon, bottom to top.
pub struct LayerPipeline {
    pub background: BackgroundLayer,
    pub glyph: GlyphLayer,
}

impl LayerPipeline {
    /// Builds the pipeline for a style.
    pub fn new(style: &IconStyle, resolver: FontResolver) -> Self {
        Self {
            background: BackgroundLayer::from_style(style),
            glyph: GlyphLayer::from_style(style, resolver),
        }
    }

    /// Renders an icon of `size` pixels through every layer.
    pub fn render(&self, size: u32) -> Result<RgbaImage> {
        let mut ctx = RenderContext::new(size)?;
        self.background.paint(&mut ctx);
        self.glyph.paint(&mut ctx);
        ctx.into_image()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_transparent() {
        let ctx = RenderContext::new(4).unwrap();
        let img = ctx.into_image().unwrap();
        assert_eq!(img.dimensions(), (4, 4));
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            RenderContext::new(0),
            Err(IconError::InvalidSize(0))
        ));
    }

    #[test]
    fn pipeline_paints_background_under_glyph() {
        let style = IconStyle::default();
        let pipeline = LayerPipeline::new(&style, FontResolver::built_in_only());
        let img = pipeline.render(64).unwrap();

        // Left edge of the ellipse, away from the glyph.
        assert_eq!(img.get_pixel(style.margin(64) + 1, 32).0, [102, 126, 234, 255]);
        // Corners stay transparent.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        // Some pixel was painted white by the glyph.
        assert!(img.pixels().any(|p| p[0] > 200 && p[1] > 200 && p[2] > 200));
    }
}

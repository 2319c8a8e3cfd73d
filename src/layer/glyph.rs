//! Centered glyph layer.
//!
//! The glyph is laid out with its anchor (left edge, ascender line) at the
//! origin and measured by the box of its outline. The anchor is then placed
//! so that a box of that size is centered on the canvas and raised by
//! `size / bias_divisor` pixels.

use log::{debug, trace, warn};
use palette::Srgba;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::Tree;

use super::svg::{escape_xml, ink_bounds, parse_tree, svg_document};
use super::{Layer, RenderContext};
use crate::font::{Face, FontHandle, FontResolver, built_in_outline};
use crate::style::{GLYPH, IconStyle, fraction_of, scaled, svg_opacity, svg_paint};

// ============================================================================
// GlyphBounds
// ============================================================================

/// Pixel bounding box of a glyph outline relative to its layout anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

// ============================================================================
// GlyphLayout
// ============================================================================

/// A glyph shaped with a particular font, ready to be measured and drawn.
pub struct GlyphLayout {
    tree: Tree,
    bounds: GlyphBounds,
}

impl GlyphLayout {
    /// Lays out `glyph` with `font`, filled with `color`.
    ///
    /// Returns `None` when the font has no outline for the glyph.
    pub fn measure(font: &FontHandle, glyph: char, color: Srgba<u8>) -> Option<Self> {
        let size = font.size();
        let paint = svg_paint(color);
        let opacity = svg_opacity(color);

        let (body, fonts) = match font.face() {
            Face::Loaded { db, family } => {
                let body = format!(
                    r#"<text x="0" y="0" font-family="'{}'" font-size="{size}" dominant-baseline="text-before-edge" fill="{paint}" fill-opacity="{opacity}">{}</text>"#,
                    escape_xml(family),
                    escape_xml(&glyph.to_string()),
                );
                (body, Some((db, family.as_str())))
            }
            Face::BuiltIn => {
                let outline = built_in_outline(glyph, size)?;
                let body = format!(
                    r#"<path d="{outline}" fill="{paint}" fill-opacity="{opacity}" fill-rule="evenodd"/>"#
                );
                (body, None)
            }
        };

        let document = svg_document(size.max(1) * 2, &body);
        let tree = parse_tree(&document, fonts)?;
        let Some(bbox) = ink_bounds(tree.root()) else {
            debug!("{} has no outline for {glyph:?}", font.family());
            return None;
        };

        let bounds = GlyphBounds {
            left: bbox.left().floor() as i32,
            top: bbox.top().floor() as i32,
            right: bbox.right().ceil() as i32,
            bottom: bbox.bottom().ceil() as i32,
        };
        if bounds.width() <= 0 || bounds.height() <= 0 {
            return None;
        }

        Some(Self { tree, bounds })
    }

    pub fn bounds(&self) -> GlyphBounds {
        self.bounds
    }

    pub fn text_width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn text_height(&self) -> i32 {
        self.bounds.height()
    }

    /// Draws the glyph with its layout anchor at `(x, y)`.
    pub fn paint(&self, pixmap: &mut Pixmap, x: i32, y: i32) {
        let transform = Transform::from_translate(x as f32, y as f32);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());
    }
}

/// Anchor position that centers a `text_width x text_height` box on a
/// `size` canvas, raised by `bias` pixels. Divisions round toward negative
/// infinity.
pub fn glyph_origin(size: u32, text_width: i32, text_height: i32, bias: u32) -> (i32, i32) {
    let size = size as i32;
    let x = (size - text_width).div_euclid(2);
    let y = (size - text_height).div_euclid(2) - bias as i32;
    (x, y)
}

// ============================================================================
// GlyphLayer
// ============================================================================

/// Draws [`GLYPH`] in the middle of the icon.
#[derive(Debug, Clone)]
pub struct GlyphLayer {
    pub color: Srgba<u8>,

    /// Font size as a fraction of the icon size.
    pub font_scale: f32,

    /// The glyph is raised by `size / bias_divisor` pixels.
    pub bias_divisor: u32,

    pub resolver: FontResolver,
}

impl GlyphLayer {
    pub fn from_style(style: &IconStyle, resolver: FontResolver) -> Self {
        Self {
            color: style.glyph_color,
            font_scale: style.font_scale,
            bias_divisor: style.bias_divisor,
            resolver,
        }
    }

    pub fn font_size(&self, size: u32) -> u32 {
        scaled(size, self.font_scale)
    }

    pub fn bias(&self, size: u32) -> u32 {
        fraction_of(size, self.bias_divisor)
    }

    /// Resolves a font for an icon of `size` pixels and lays out the glyph.
    ///
    /// Candidates that load but cannot render the glyph are skipped.
    pub fn layout(&self, size: u32) -> Option<(FontHandle, GlyphLayout)> {
        let font_size = self.font_size(size);
        self.resolver.candidates(font_size).find_map(|font| {
            let layout = GlyphLayout::measure(&font, GLYPH, self.color)?;
            Some((font, layout))
        })
    }
}

impl Layer for GlyphLayer {
    fn paint(&self, ctx: &mut RenderContext) {
        let Some((font, layout)) = self.layout(ctx.size) else {
            warn!("no font can render {GLYPH:?} at {}px, skipping glyph", ctx.size);
            return;
        };

        let (x, y) = glyph_origin(
            ctx.size,
            layout.text_width(),
            layout.text_height(),
            self.bias(ctx.size),
        );
        trace!(
            "glyph {GLYPH:?} with {} at {}px: bounds {:?}, origin ({x}, {y})",
            font.family(),
            font.size(),
            layout.bounds(),
        );
        layout.paint(&mut ctx.pixmap, x, y);
    }
}

// ============================================================================
// Tests
// ============================================================================

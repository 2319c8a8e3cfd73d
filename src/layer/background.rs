//! Background ellipse layer.

use log::trace;
use palette::Srgba;
use resvg::tiny_skia::{FillRule, Paint, PathBuilder, Rect, Transform};

use super::{Layer, RenderContext};
use crate::icon::RectPx;
use crate::style::{IconStyle, fraction_of};

/// A filled ellipse inscribed in the canvas minus a margin.
#[derive(Debug, Clone)]
pub struct BackgroundLayer {
    /// Fill color of the ellipse.
    pub fill: Srgba<u8>,

    /// The inset is `size / margin_divisor` pixels on every side.
    pub margin_divisor: u32,

    /// Whether the ellipse edge is anti-aliased.
    pub anti_alias: bool,
}

impl BackgroundLayer {
    pub fn from_style(style: &IconStyle) -> Self {
        Self {
            fill: style.background,
            margin_divisor: style.margin_divisor,
            anti_alias: style.anti_alias_background,
        }
    }

    /// Inset of the ellipse for a canvas of `size` pixels.
    pub fn margin(&self, size: u32) -> u32 {
        fraction_of(size, self.margin_divisor)
    }

    /// The rectangle the ellipse is inscribed in.
    pub fn bounds(&self, size: u32) -> Option<RectPx> {
        RectPx::from_size(size, size).inset(self.margin(size))
    }
}

impl Layer for BackgroundLayer {
    fn paint(&self, ctx: &mut RenderContext) {
        let Some(bounds) = self.bounds(ctx.size) else {
            trace!("no room for the background at {}px", ctx.size);
            return;
        };

        let oval = Rect::from_ltrb(
            bounds.x as f32,
            bounds.y as f32,
            bounds.right() as f32,
            bounds.bottom() as f32,
        )
        .and_then(PathBuilder::from_oval);
        let Some(path) = oval else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(self.fill.red, self.fill.green, self.fill.blue, self.fill.alpha);
        paint.anti_alias = self.anti_alias;

        trace!("background ellipse {bounds:?} at {}px", ctx.size);
        ctx.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

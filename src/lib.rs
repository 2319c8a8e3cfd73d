//! glyph-icons: square letter icons for browser extensions and friends.
//!
//! Each icon is a filled ellipse with a single white character in the middle,
//! rasterized with resvg and written as an RGBA PNG.
//!
//! # Example
//!
//! ```
//! use glyph_icons::{FontResolver, IconRenderer, IconStyle};
//!
//! let renderer = IconRenderer::with_resolver(IconStyle::default(), FontResolver::built_in_only());
//! let icon = renderer.render(48).unwrap();
//! assert_eq!(icon.dimensions(), (48, 48));
//! ```
//!
//! # Fonts
//!
//! The glyph font is resolved per icon through [`FontResolver`]: a
//! platform-specific font file first, then `arial.ttf` on the font search
//! path, then a built-in outline font. Resolution never fails.

mod error;
mod font;
mod icon;
mod layer;
mod renderer;
mod style;

pub use error::{IconError, Result};
pub use font::{
    BUILT_IN_FAMILY, FontHandle, FontResolver, FontSource, GENERIC_FONT_NAME, PLATFORM_FONT_PATH,
};
pub use icon::{DEFAULT_SIZES, RectPx, icon_file_name};
pub use layer::{
    BackgroundLayer, GlyphBounds, GlyphLayer, GlyphLayout, Layer, LayerPipeline, RenderContext,
    glyph::glyph_origin,
};
pub use renderer::{COMPLETION_MESSAGE, IconRenderer};
pub use style::{DEFAULT_BACKGROUND, DEFAULT_GLYPH_COLOR, GLYPH, IconStyle};

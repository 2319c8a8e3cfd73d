//! Serializable icon style.
//!
//! An [`IconStyle`] captures every constant that shapes an icon: colors
//! and the ratios used to derive the ellipse inset, font size and
//! vertical bias from the icon size. [`IconStyle::default`] reproduces the
//! stock icon set.
//!
//! # Example
//!
//! ```
//! use glyph_icons::IconStyle;
//!
//! let style = IconStyle::default();
//! assert_eq!(style.margin(128), 4);
//! assert_eq!(style.font_size(48), 28);
//!
//! let json = style.to_json().unwrap();
//! let restored = IconStyle::from_json(&json).unwrap();
//! assert_eq!(restored, style);
//! ```

use palette::Srgba;
use serde::{Deserialize, Serialize};

/// Background fill of the stock icons.
pub const DEFAULT_BACKGROUND: Srgba<u8> = Srgba::new(102, 126, 234, 255);

/// Glyph color of the stock icons.
pub const DEFAULT_GLYPH_COLOR: Srgba<u8> = Srgba::new(255, 255, 255, 255);

/// The character drawn on every icon. The built-in font covers it.
pub const GLYPH: char = 'A';

// ============================================================================
// IconStyle
// ============================================================================

/// Visual parameters for a rendered icon.
///
/// # JSON Format
///
/// ```json
/// {
///   "background": { "red": 102, "green": 126, "blue": 234, "alpha": 255 },
///   "glyphColor": { "red": 255, "green": 255, "blue": 255, "alpha": 255 },
///   "fontScale": 0.6,
///   "marginDivisor": 32,
///   "biasDivisor": 8,
///   "antiAliasBackground": false
/// }
/// ```
///
/// Missing fields fall back to their defaults; unknown fields are rejected.
/// The glyph itself is always [`GLYPH`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IconStyle {
    /// Fill of the background ellipse.
    pub background: Srgba<u8>,

    /// Fill of the glyph.
    pub glyph_color: Srgba<u8>,

    /// Font size as a fraction of the icon size.
    pub font_scale: f32,

    /// The ellipse is inset by `size / margin_divisor` pixels.
    pub margin_divisor: u32,

    /// The glyph is raised by `size / bias_divisor` pixels.
    pub bias_divisor: u32,

    /// Whether the ellipse edge is anti-aliased. Off gives a hard edge.
    pub anti_alias_background: bool,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            glyph_color: DEFAULT_GLYPH_COLOR,
            font_scale: 0.6,
            margin_divisor: 32,
            bias_divisor: 8,
            anti_alias_background: false,
        }
    }
}

impl IconStyle {
    /// Inset of the background ellipse, `floor(size / margin_divisor)`.
    pub fn margin(&self, size: u32) -> u32 {
        fraction_of(size, self.margin_divisor)
    }

    /// Upward bias of the glyph, `floor(size / bias_divisor)`.
    pub fn bias(&self, size: u32) -> u32 {
        fraction_of(size, self.bias_divisor)
    }

    /// Font size in pixels, `floor(size * font_scale)`.
    pub fn font_size(&self, size: u32) -> u32 {
        scaled(size, self.font_scale)
    }

    /// Serializes the style to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// `floor(size / divisor)`, zero when the divisor is zero.
pub(crate) fn fraction_of(size: u32, divisor: u32) -> u32 {
    size.checked_div(divisor).unwrap_or(0)
}

/// `floor(size * scale)`, clamped at zero.
pub(crate) fn scaled(size: u32, scale: f32) -> u32 {
    (size as f32 * scale).floor().max(0.0) as u32
}

/// Formats a color as an SVG `#rrggbb` paint.
pub(crate) fn svg_paint(color: Srgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Formats the alpha channel of a color as an SVG opacity.
pub(crate) fn svg_opacity(color: Srgba<u8>) -> String {
    format!("{:.4}", color.alpha as f32 / 255.0)
}

// ============================================================================
// Tests
// ============================================================================

//! Icon rendering and file output.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::error::{IconError, Result};
use crate::font::FontResolver;
use crate::icon::icon_file_name;
use crate::layer::LayerPipeline;
use crate::style::IconStyle;

/// Line printed after every icon of a batch was written.
pub const COMPLETION_MESSAGE: &str = "All icons created successfully!";

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders square letter icons.
///
/// Each call is independent: the canvas, font and glyph layout are created
/// for that call and dropped when it returns.
///
/// # Example
///
/// ```no_run
/// use glyph_icons::{DEFAULT_SIZES, IconRenderer};
/// use std::path::Path;
///
/// let renderer = IconRenderer::default();
/// renderer.render_all(&DEFAULT_SIZES, Path::new("assets")).unwrap();
/// ```
pub struct IconRenderer {
    style: IconStyle,
    pipeline: LayerPipeline,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

impl IconRenderer {
    /// Creates a renderer using the default font fallback chain.
    pub fn new(style: IconStyle) -> Self {
        Self::with_resolver(style, FontResolver::default())
    }

    /// Creates a renderer with a custom font fallback chain.
    pub fn with_resolver(style: IconStyle, resolver: FontResolver) -> Self {
        let pipeline = LayerPipeline::new(&style, resolver);
        Self { style, pipeline }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Renders an icon of `size x size` pixels in memory.
    pub fn render(&self, size: u32) -> Result<RgbaImage> {
        self.pipeline.render(size)
    }

    /// Renders an icon and encodes it as PNG.
    pub fn render_png(&self, size: u32) -> Result<Vec<u8>> {
        let image = self.render(size)?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Renders an icon and writes it to `out_dir/icon{size}.png`,
    /// replacing any existing file.
    ///
    /// Returns the path that was written.
    pub fn render_icon(&self, size: u32, out_dir: &Path) -> Result<PathBuf> {
        let bytes = self.render_png(size)?;
        let path = out_dir.join(icon_file_name(size));
        fs::write(&path, &bytes).map_err(|source| IconError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Writes one icon per size into `out_dir`, in order, reporting progress
    /// on stdout.
    pub fn render_all(&self, sizes: &[u32], out_dir: &Path) -> Result<Vec<PathBuf>> {
        let stdout = io::stdout();
        self.render_all_to(sizes, out_dir, &mut stdout.lock())
    }

    /// Like [`render_all`](Self::render_all), reporting progress to `out`.
    ///
    /// Prints `Created icon{size}.png` after each file and a completion line
    /// once every size succeeded. Stops at the first failure.
    pub fn render_all_to<W: Write>(
        &self,
        sizes: &[u32],
        out_dir: &Path,
        out: &mut W,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let path = self.render_icon(size, out_dir)?;
            report(out, &format!("Created {}", icon_file_name(size)));
            written.push(path);
        }
        report(out, COMPLETION_MESSAGE);
        Ok(written)
    }
}

/// Progress output is best effort; a closed stdout must not fail the batch.
fn report<W: Write>(out: &mut W, line: &str) {
    if let Err(err) = writeln!(out, "{line}") {
        debug!("failed to report progress: {err}");
    }
}

// ============================================================================
// Tests
// ============================================================================

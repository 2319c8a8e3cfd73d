//! Error type shared by the rendering pipeline.

use std::path::PathBuf;

/// Errors that can abort rendering an icon.
///
/// Font problems never show up here: they are absorbed by the
/// [`FontResolver`](crate::FontResolver) fallback chain.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Icons must be at least one pixel wide.
    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    /// The pixel buffer for the canvas could not be allocated.
    #[error("failed to allocate a {size}x{size} canvas")]
    Canvas { size: u32 },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the encoded icon to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;

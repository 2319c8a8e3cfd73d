//! Font resolution with an ordered fallback chain.
//!
//! A [`FontResolver`] tries, in order:
//!
//! 1. a platform-specific font file,
//! 2. a generic font file name looked up in the working directory and then in
//!    the system font directories,
//! 3. the built-in outline font.
//!
//! The last step cannot fail, so resolution always yields a [`FontHandle`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use log::{debug, warn};
use resvg::usvg::fontdb::{Database, Source};

/// Font file tried first on this platform.
#[cfg(target_os = "macos")]
pub const PLATFORM_FONT_PATH: &str = "/System/Library/Fonts/Arial.ttf";
/// Font file tried first on this platform.
#[cfg(target_os = "windows")]
pub const PLATFORM_FONT_PATH: &str = r"C:\Windows\Fonts\arial.ttf";
/// Font file tried first on this platform.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const PLATFORM_FONT_PATH: &str = "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf";

/// Font file name looked up on the font search path.
pub const GENERIC_FONT_NAME: &str = "arial.ttf";

/// Family name reported by the built-in font.
pub const BUILT_IN_FAMILY: &str = "built-in";

// ============================================================================
// FontSource / FontHandle
// ============================================================================

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Loaded from the platform-specific font path.
    PlatformPath(PathBuf),
    /// Found by file name on the font search path.
    Named { name: String, path: PathBuf },
    /// The outline font compiled into this crate.
    BuiltIn,
}

#[derive(Clone)]
pub(crate) enum Face {
    /// A font database holding exactly the resolved face.
    Loaded { db: Arc<Database>, family: String },
    BuiltIn,
}

/// A font resolved at a particular pixel size.
#[derive(Clone)]
pub struct FontHandle {
    source: FontSource,
    face: Face,
    size: u32,
}

impl FontHandle {
    /// Returns the built-in font at the given size.
    pub fn built_in(size: u32) -> Self {
        Self {
            source: FontSource::BuiltIn,
            face: Face::BuiltIn,
            size,
        }
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Font size in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Family name of the resolved face.
    pub fn family(&self) -> &str {
        match &self.face {
            Face::Loaded { family, .. } => family,
            Face::BuiltIn => BUILT_IN_FAMILY,
        }
    }

    pub fn is_built_in(&self) -> bool {
        matches!(self.face, Face::BuiltIn)
    }

    pub(crate) fn face(&self) -> &Face {
        &self.face
    }

    fn load(source: FontSource, path: &Path, size: u32) -> Option<Self> {
        let (db, family) = load_face_file(path)?;
        Some(Self {
            source,
            face: Face::Loaded {
                db: Arc::new(db),
                family,
            },
            size,
        })
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("source", &self.source)
            .field("family", &self.family())
            .field("size", &self.size)
            .finish()
    }
}

// ============================================================================
// FontResolver
// ============================================================================

/// Ordered list of font candidates ending in the built-in font.
///
/// The search-path lookup for the generic name runs once per resolver and is
/// reused for every icon size.
#[derive(Debug, Clone)]
pub struct FontResolver {
    platform_path: Option<PathBuf>,
    generic_name: Option<String>,
    named_path: OnceLock<Option<PathBuf>>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(
            Some(PathBuf::from(PLATFORM_FONT_PATH)),
            Some(GENERIC_FONT_NAME.to_string()),
        )
    }
}

impl FontResolver {
    /// Creates a resolver with custom candidates. `None` skips that step.
    pub fn new(platform_path: Option<PathBuf>, generic_name: Option<String>) -> Self {
        Self {
            platform_path,
            generic_name,
            named_path: OnceLock::new(),
        }
    }

    /// A resolver that goes straight to the built-in font.
    pub fn built_in_only() -> Self {
        Self::new(None, None)
    }

    /// Resolves the first loadable font at `size` pixels.
    pub fn resolve(&self, size: u32) -> FontHandle {
        self.candidates(size)
            .next()
            .unwrap_or_else(|| FontHandle::built_in(size))
    }

    /// Lazily loads every candidate in fallback order.
    ///
    /// The iterator always ends with the built-in font.
    pub fn candidates(&self, size: u32) -> impl Iterator<Item = FontHandle> + '_ {
        let platform = self.platform_path.iter().filter_map(move |path| {
            debug!("trying platform font {}", path.display());
            FontHandle::load(FontSource::PlatformPath(path.clone()), path, size)
        });

        let named = self.generic_name.iter().filter_map(move |name| {
            let path = self.named_font_path()?;
            let source = FontSource::Named {
                name: name.clone(),
                path: path.to_path_buf(),
            };
            FontHandle::load(source, path, size)
        });

        let built_in = std::iter::once_with(move || {
            warn!("no usable font found, falling back to the built-in font");
            FontHandle::built_in(size)
        });

        platform.chain(named).chain(built_in)
    }

    /// Where the generic font name was found, looked up on first use.
    pub(crate) fn named_font_path(&self) -> Option<&Path> {
        let name = self.generic_name.as_deref()?;
        self.named_path
            .get_or_init(|| {
                debug!("looking up font {name} on the search path");
                find_on_search_path(name)
            })
            .as_deref()
    }
}

/// Loads a single font file into a fresh database.
///
/// Returns the database and the family name of its first face.
fn load_face_file(path: &Path) -> Option<(Database, String)> {
    if !path.is_file() {
        debug!("{} is not a file", path.display());
        return None;
    }

    let mut db = Database::new();
    if let Err(err) = db.load_font_file(path) {
        debug!("failed to load {}: {err}", path.display());
        return None;
    }

    let family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
    if family.is_none() {
        debug!("{} contains no usable faces", path.display());
    }
    Some((db, family?))
}

/// Finds a font file by name, first relative to the working directory, then
/// among the system fonts.
fn find_on_search_path(name: &str) -> Option<PathBuf> {
    let local = Path::new(name);
    if local.is_file() {
        return Some(local.to_path_buf());
    }

    let mut system = Database::new();
    system.load_system_fonts();
    system.faces().find_map(|face| match &face.source {
        Source::File(path) if file_name_matches(path, name) => Some(path.clone()),
        _ => None,
    })
}

fn file_name_matches(path: &Path, name: &str) -> bool {
    path.file_name()
        .is_some_and(|file| file.to_string_lossy().eq_ignore_ascii_case(name))
}

// ============================================================================
// Built-in font
// ============================================================================

/// Units per em of the built-in outlines.
const BUILT_IN_UNITS_PER_EM: f32 = 1000.0;

/// Outline of 'A': the silhouette, then the counter above the crossbar.
/// The ascender line is y = 0, the baseline y = 900, no side bearing.
const BUILT_IN_A: &[&[(f32, f32)]] = &[
    &[
        (250.0, 200.0),
        (390.0, 200.0),
        (640.0, 900.0),
        (510.0, 900.0),
        (450.0, 720.0),
        (190.0, 720.0),
        (130.0, 900.0),
        (0.0, 900.0),
    ],
    &[(320.0, 330.0), (415.0, 620.0), (225.0, 620.0)],
];

/// Returns the SVG path data of a built-in glyph scaled to `size` pixels,
/// laid out with its ascender line at y = 0.
///
/// Only 'A' is available; other characters yield `None`.
pub(crate) fn built_in_outline(glyph: char, size: u32) -> Option<String> {
    let contours = match glyph {
        'A' => BUILT_IN_A,
        _ => return None,
    };

    let scale = |v: f32| v * size as f32 / BUILT_IN_UNITS_PER_EM;
    let mut data = String::new();
    for contour in contours {
        for (i, &(x, y)) in contour.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{command}{} {} ", scale(x), scale(y)));
        }
        data.push_str("Z ");
    }
    Some(data.trim_end().to_string())
}

// ============================================================================
// Tests
// ============================================================================

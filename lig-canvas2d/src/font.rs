use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::bitmap_font::BitmapFont;
use crate::error::FontError;

/// Scalable font files tried in preference order when no other list is given.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Return the first candidate path that exists on disk.
///
/// Only existence is checked; the file is not opened. The result depends
/// solely on the order of `candidates` and the state of the filesystem.
pub fn resolve_font_path<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

/// A scalable font face loaded from a file at a fixed pixel size.
#[derive(Clone, Debug)]
pub struct ScalableFont {
    path: PathBuf,
    family: String,
    /// Raw font file data. Arc-wrapped for cheap cloning.
    data: Arc<Vec<u8>>,
    size_px: f32,
    /// Distance from the top of the line box to the baseline, in pixels.
    ascent_px: f32,
}

impl ScalableFont {
    /// Read and validate a font file, sizing it to `size_px`.
    pub fn load(path: &Path, size_px: f32) -> Result<Self, FontError> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(FontError::InvalidSize(size_px));
        }

        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // fontdb silently skips data it cannot parse, so an empty database
        // means the file held no usable face.
        let mut db = fontdb::Database::new();
        db.load_font_data(data.clone());
        let face = db
            .faces()
            .next()
            .ok_or_else(|| FontError::NoFace(path.to_path_buf()))?;
        let family = face
            .families
            .first()
            .map(|(name, _lang)| name.clone())
            .ok_or_else(|| FontError::NoFace(path.to_path_buf()))?;

        let parsed = ttf_parser::Face::parse(&data, face.index).map_err(|e| FontError::Metrics {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let units_per_em = parsed.units_per_em() as f32;
        let ascent_px = parsed.ascender() as f32 / units_per_em * size_px;

        Ok(Self {
            path: path.to_path_buf(),
            family,
            data: Arc::new(data),
            size_px,
            ascent_px,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Family name as recorded in the font's name table.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub fn ascent_px(&self) -> f32 {
        self.ascent_px
    }
}

/// A font ready for measurement and drawing.
#[derive(Clone, Debug)]
pub enum TextFont {
    Scalable(ScalableFont),
    Bitmap(BitmapFont),
}

impl Default for TextFont {
    fn default() -> Self {
        TextFont::Bitmap(BitmapFont::builtin())
    }
}

impl TextFont {
    /// Effective pixel size. For the bitmap font this is its fixed cell size,
    /// whatever size was requested.
    pub fn size_px(&self) -> f32 {
        match self {
            TextFont::Scalable(font) => font.size_px(),
            TextFont::Bitmap(font) => font.size_px(),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, TextFont::Bitmap(_))
    }
}

/// Why the bitmap font was substituted for a scalable one.
#[derive(Debug, thiserror::Error)]
pub enum FontFallback {
    #[error("none of the candidate font files exist")]
    NoCandidate,

    #[error(transparent)]
    Load(#[from] FontError),
}

/// Outcome of a font request: the font to use, and the fallback reason if
/// the requested scalable font could not be provided.
#[derive(Debug)]
pub struct FontResolution {
    pub font: TextFont,
    pub fallback: Option<FontFallback>,
}

impl FontResolution {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Resolves sized fonts from an ordered list of candidate font files.
///
/// The candidate path is chosen once, at construction. Each [`font`](Self::font)
/// call then loads that file at the requested size; nothing is cached
/// across sizes.
#[derive(Debug, Clone)]
pub struct FontResolver {
    path: Option<PathBuf>,
}

impl FontResolver {
    pub fn new<P: AsRef<Path>>(candidates: &[P]) -> Self {
        let path = resolve_font_path(candidates);
        match &path {
            Some(p) => log::debug!(target: "font", "resolved font file {}", p.display()),
            None => log::debug!(target: "font", "no candidate font file exists"),
        }
        Self { path }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_FONT_CANDIDATES)
    }

    /// The resolved font file, if any candidate exists.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the resolved font at `size_px`, or fall back to the bitmap font.
    ///
    /// Fallback never fails; it is reported in the returned resolution and
    /// logged as a warning, since the bitmap font ignores `size_px`.
    pub fn font(&self, size_px: f32) -> FontResolution {
        let loaded = match &self.path {
            Some(path) => ScalableFont::load(path, size_px).map_err(FontFallback::from),
            None => Err(FontFallback::NoCandidate),
        };

        match loaded {
            Ok(font) => FontResolution {
                font: TextFont::Scalable(font),
                fallback: None,
            },
            Err(reason) => {
                log::warn!(
                    "using built-in bitmap font instead of {}px scalable font: {}",
                    size_px,
                    reason
                );
                FontResolution {
                    font: TextFont::Bitmap(BitmapFont::builtin()),
                    fallback: Some(reason),
                }
            }
        }
    }
}

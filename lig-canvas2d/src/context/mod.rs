//! Canvas rendering context implementation.

mod drawing;
mod image_ops;
mod path_ops;
mod text_rendering;

use crate::drawing_state::DrawingState;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::CanvasColor;
use cosmic_text::{FontSystem, SwashCache};
use std::collections::HashSet;
use tiny_skia::Pixmap;

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// Canvas rendering context.
pub struct Canvas2dContext {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer.
    pub(crate) pixmap: Pixmap,
    /// Font system for text shaping. Starts empty; scalable fonts are
    /// registered when first selected with `set_font`.
    pub(crate) font_system: FontSystem,
    /// Swash cache for glyph outlines.
    pub(crate) swash_cache: SwashCache,
    /// Families already loaded into `font_system`.
    pub(crate) registered_families: HashSet<String>,
    /// Current drawing state.
    pub(crate) state: DrawingState,
}

impl Canvas2dContext {
    /// Create a new transparent canvas with the specified dimensions.
    pub fn new(width: u32, height: u32) -> Canvas2dResult<Self> {
        // Validate dimensions
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Canvas2dError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(Canvas2dError::InvalidDimensions { width, height })?;

        // No system fonts: every face comes from an explicitly resolved file
        let font_system =
            FontSystem::new_with_locale_and_db("en".to_string(), fontdb::Database::new());

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            registered_families: HashSet::new(),
            state: DrawingState::default(),
        })
    }

    /// Create a canvas filled with a solid background color.
    pub fn with_background(width: u32, height: u32, color: &str) -> Canvas2dResult<Self> {
        let mut ctx = Self::new(width, height)?;
        ctx.clear(CanvasColor::parse(color)?);
        Ok(ctx)
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: CanvasColor) {
        log::debug!(target: "canvas", "clear {:?}", color);
        self.pixmap.fill(color.into());
    }

    // --- Style setters ---

    /// Set the fill style from a CSS color string.
    pub fn set_fill_style(&mut self, style: &str) -> Canvas2dResult<()> {
        let color = CanvasColor::parse(style)?;
        self.set_fill_style_color(color);
        Ok(())
    }

    /// Set the fill style from a CanvasColor.
    pub fn set_fill_style_color(&mut self, color: CanvasColor) {
        self.state.fill_style = color.into();
    }
}

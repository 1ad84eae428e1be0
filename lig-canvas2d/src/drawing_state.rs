//! Mutable drawing state of a canvas.

use crate::font::TextFont;

/// Style applied by the fill operations.
#[derive(Debug, Clone)]
pub(crate) struct DrawingState {
    /// Current fill color.
    pub(crate) fill_style: tiny_skia::Color,
    /// Current font. Defaults to the built-in bitmap font.
    pub(crate) font: TextFont,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            // Default is opaque black
            fill_style: tiny_skia::Color::BLACK,
            font: TextFont::default(),
        }
    }
}

//! Pixel canvas for generating raster branding assets.
//!
//! This crate provides a small Canvas 2D style drawing surface that runs
//! without a browser. It uses:
//! - `tiny-skia` for 2D graphics rendering
//! - `cosmic-text` for text shaping and glyph outlines
//! - `fontdb` and `ttf-parser` to validate font files and read their metrics
//! - `image` and `png` to encode the finished canvas
//!
//! Fonts are resolved from an ordered list of candidate files. When no
//! candidate can be loaded the built-in bitmap font is used instead, and the
//! reason is reported in the [`FontResolution`].
//!
//! # Example
//!
//! ```rust,ignore
//! use lig_canvas2d::{Canvas2dContext, FontResolver, RectParams};
//!
//! let mut ctx = Canvas2dContext::new(512, 512)?;
//! ctx.set_fill_style("#b7d959")?;
//! ctx.fill_rect(&RectParams { x: 0.0, y: 0.0, width: 512.0, height: 512.0 });
//! ctx.set_font(FontResolver::with_defaults().font(350.0).font);
//! let bounds = ctx.measure_text("L")?;
//! let jpeg = ctx.to_jpeg(100)?;
//! ```

mod bitmap_font;
mod context;
mod drawing_state;
mod error;
mod font;
mod geometry;
mod text;

// Re-export public API
pub use bitmap_font::BitmapFont;
pub use context::Canvas2dContext;
pub use error::{Canvas2dError, Canvas2dResult, FontError};
pub use font::{
    resolve_font_path, FontFallback, FontResolution, FontResolver, ScalableFont, TextFont,
    DEFAULT_FONT_CANDIDATES,
};
pub use geometry::{CanvasColor, CornerRadius, RectParams, RoundRectParams};
pub use text::TextBounds;

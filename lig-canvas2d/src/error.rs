//! Error types for lig-canvas2d.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using Canvas2dError.
pub type Canvas2dResult<T> = Result<T, Canvas2dError>;

/// Errors that can occur in canvas operations.
#[derive(Debug, Error)]
pub enum Canvas2dError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),

    /// JPEG encoding error.
    #[error("JPEG encoding error: {0}")]
    JpegError(String),

    /// Invalid JPEG quality (must be 1-100).
    #[error("Invalid JPEG quality: {0} (must be 1-100)")]
    InvalidQuality(u8),

    /// Text measurement produced no inked pixels.
    #[error("Text measurement error: {0}")]
    TextError(String),
}

impl From<png::EncodingError> for Canvas2dError {
    fn from(err: png::EncodingError) -> Self {
        Canvas2dError::PngError(err.to_string())
    }
}

impl From<image::ImageError> for Canvas2dError {
    fn from(err: image::ImageError) -> Self {
        Canvas2dError::JpegError(err.to_string())
    }
}

/// Errors produced while loading a scalable font file.
///
/// These never escape [`FontResolver::font`](crate::FontResolver::font): they are
/// carried in [`FontFallback::Load`](crate::FontFallback::Load) when the
/// bitmap font is substituted.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no font face could be parsed from {0}")]
    NoFace(PathBuf),

    #[error("failed to parse font metrics from {path}: {reason}")]
    Metrics { path: PathBuf, reason: String },

    #[error("invalid font size: {0}")]
    InvalidSize(f32),
}

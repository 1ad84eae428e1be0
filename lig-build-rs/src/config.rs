//! Presentation constants for the branding images.
//!
//! Every number here is a tuning knob picked by eye, not an invariant. The
//! defaults reproduce the published assets; a JSON file can override any
//! subset of fields.

use crate::error::ConfigError;
use lig_canvas2d::DEFAULT_FONT_CANDIDATES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Directory (relative to the site root) the images are written to.
    pub output_dir: PathBuf,
    /// Scalable font files, in order of preference.
    pub font_candidates: Vec<PathBuf>,
    pub accent_color: String,
    pub dark_color: String,
    pub light_color: String,
    /// Single-letter mark drawn on the icon and the logo badge.
    pub monogram: String,
    pub wordmark: String,
    pub jpeg_quality: u8,
    pub icon: IconConfig,
    pub logo: LogoConfig,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/branding"),
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            accent_color: "#b7d959".to_string(),
            dark_color: "#0b0d10".to_string(),
            light_color: "#ffffff".to_string(),
            monogram: "L".to_string(),
            wordmark: "LEVERAGE IN THE GAME".to_string(),
            jpeg_quality: 100,
            icon: IconConfig::default(),
            logo: LogoConfig::default(),
        }
    }
}

impl BrandingConfig {
    /// Load a config from a JSON file. Fields absent from the file keep
    /// their default values.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn icon_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.icon.file_name)
    }

    pub fn logo_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.logo.file_name)
    }
}

/// Square icon: the monogram alone on an accent background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub file_name: String,
    pub size: u32,
    pub font_size: f32,
    /// Vertical nudge applied after centering. Negative moves up.
    pub bias_y: f32,
    /// Width/height assumed when the monogram cannot be measured.
    pub fallback_extent: [f32; 2],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            file_name: "icon.jpg".to_string(),
            size: 512,
            font_size: 350.0,
            bias_y: -70.0,
            fallback_extent: [200.0, 300.0],
        }
    }
}

/// Wide banner: rounded monogram badge followed by the wordmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// Inclusive badge box as `[x0, y0, x1, y1]`.
    pub badge: [f32; 4],
    pub badge_radius: f32,
    pub glyph_font_size: f32,
    /// `[x, y]` nudge applied after centering the monogram on the badge.
    pub glyph_bias: [f32; 2],
    pub glyph_fallback_extent: [f32; 2],
    pub wordmark_font_size: f32,
    pub wordmark_x: f32,
    pub wordmark_bias_y: f32,
    pub wordmark_fallback_height: f32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            file_name: "logo.jpg".to_string(),
            width: 1800,
            height: 256,
            badge: [20.0, 20.0, 236.0, 236.0],
            badge_radius: 20.0,
            glyph_font_size: 150.0,
            glyph_bias: [-5.0, -30.0],
            glyph_fallback_extent: [100.0, 150.0],
            wordmark_font_size: 95.0,
            wordmark_x: 270.0,
            wordmark_bias_y: -30.0,
            wordmark_fallback_height: 95.0,
        }
    }
}

impl LogoConfig {
    /// Center of the badge box.
    pub fn badge_center(&self) -> (f32, f32) {
        let [x0, y0, x1, y1] = self.badge;
        ((x0 + x1) / 2.0, (y0 + y1) / 2.0)
    }
}

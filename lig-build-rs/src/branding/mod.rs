//! Branding image generation: a square icon and a wide logo banner.

mod icon;
pub mod layout;
mod logo;

pub use icon::compose_icon;
pub use logo::compose_logo;

use crate::config::BrandingConfig;
use crate::error::BrandingError;
use layout::TextExtent;
use lig_canvas2d::{Canvas2dContext, FontResolver};
use std::path::{Path, PathBuf};

/// Paths of the images written by [`generate_branding`].
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingOutput {
    pub icon: PathBuf,
    pub logo: PathBuf,
}

/// Render both branding images and write them as JPEG under `root`.
///
/// Fonts are resolved once from `config.font_candidates`; if none can be
/// loaded both images are drawn with the built-in bitmap font.
pub fn generate_branding(
    root: &Path,
    config: &BrandingConfig,
) -> Result<BrandingOutput, BrandingError> {
    let fonts = FontResolver::new(&config.font_candidates);

    let icon = compose_icon(config, &fonts)?;
    let logo = compose_logo(config, &fonts)?;

    let output = BrandingOutput {
        icon: config.icon_path(root),
        logo: config.logo_path(root),
    };
    write_jpeg(&icon, config.jpeg_quality, &output.icon)?;
    write_jpeg(&logo, config.jpeg_quality, &output.logo)?;
    Ok(output)
}

fn write_jpeg(ctx: &Canvas2dContext, quality: u8, path: &Path) -> Result<(), BrandingError> {
    let bytes = ctx.to_jpeg(quality)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| BrandingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, bytes).map_err(|source| BrandingError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Measure `text` in the context's current font, substituting `fallback`
/// when nothing can be measured.
fn measure_or(ctx: &mut Canvas2dContext, text: &str, fallback: TextExtent) -> TextExtent {
    match ctx.measure_text(text) {
        Ok(bounds) => bounds.into(),
        Err(err) => {
            log::warn!(
                "could not measure {:?} ({}), assuming {}x{}",
                text,
                err,
                fallback.width,
                fallback.height
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lig_canvas2d::{BitmapFont, TextFont};

    #[test]
    fn test_measure_or_uses_fallback_for_blank_text() {
        let mut ctx = Canvas2dContext::new(10, 10).unwrap();
        let fallback = TextExtent::new(100.0, 150.0);
        assert_eq!(measure_or(&mut ctx, "   ", fallback), fallback);
    }

    #[test]
    fn test_measure_or_prefers_measurement() {
        let mut ctx = Canvas2dContext::new(10, 10).unwrap();
        ctx.set_font(TextFont::Bitmap(BitmapFont::builtin()));
        let extent = measure_or(&mut ctx, "L", TextExtent::new(100.0, 150.0));
        assert_eq!(extent, TextExtent::new(14.0, 14.0));
    }
}

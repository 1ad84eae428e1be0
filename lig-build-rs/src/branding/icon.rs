use super::layout::{centered_in, TextExtent};
use super::measure_or;
use crate::config::BrandingConfig;
use crate::error::BrandingError;
use lig_canvas2d::{Canvas2dContext, FontResolver};

/// Draw the square icon: the monogram centered on the accent color.
pub fn compose_icon(
    config: &BrandingConfig,
    fonts: &FontResolver,
) -> Result<Canvas2dContext, BrandingError> {
    let icon = &config.icon;
    let mut ctx = Canvas2dContext::with_background(icon.size, icon.size, &config.accent_color)?;

    ctx.set_font(fonts.font(icon.font_size).font);
    let extent = measure_or(
        &mut ctx,
        &config.monogram,
        TextExtent::from(icon.fallback_extent),
    );
    let side = icon.size as f32;
    let (x, y) = centered_in(side, side, extent, icon.bias_y);
    log::debug!("icon monogram {}x{} at ({}, {})", extent.width, extent.height, x, y);

    ctx.set_fill_style(&config.dark_color)?;
    ctx.fill_text(&config.monogram, x, y);
    Ok(ctx)
}

use super::layout::{centered_on, left_anchored, TextExtent};
use super::measure_or;
use crate::config::BrandingConfig;
use crate::error::BrandingError;
use lig_canvas2d::{Canvas2dContext, FontResolver, RectParams, RoundRectParams};

/// Draw the logo banner: a rounded accent badge holding the monogram,
/// followed by the wordmark on the dark background.
pub fn compose_logo(
    config: &BrandingConfig,
    fonts: &FontResolver,
) -> Result<Canvas2dContext, BrandingError> {
    let logo = &config.logo;
    let mut ctx = Canvas2dContext::with_background(logo.width, logo.height, &config.dark_color)?;

    // Badge
    let [x0, y0, x1, y1] = logo.badge;
    ctx.set_fill_style(&config.accent_color)?;
    ctx.fill_round_rect(&RoundRectParams::uniform(
        RectParams::from_corners(x0, y0, x1, y1),
        logo.badge_radius,
    ));

    // Monogram on the badge
    ctx.set_font(fonts.font(logo.glyph_font_size).font);
    let glyph = measure_or(
        &mut ctx,
        &config.monogram,
        TextExtent::from(logo.glyph_fallback_extent),
    );
    let [bias_x, bias_y] = logo.glyph_bias;
    let (gx, gy) = centered_on(logo.badge_center(), glyph, (bias_x, bias_y));
    ctx.set_fill_style(&config.dark_color)?;
    ctx.fill_text(&config.monogram, gx, gy);

    // Wordmark; only its height takes part in placement
    ctx.set_font(fonts.font(logo.wordmark_font_size).font);
    let wordmark = measure_or(
        &mut ctx,
        &config.wordmark,
        TextExtent::new(0.0, logo.wordmark_fallback_height),
    );
    let (wx, wy) = left_anchored(
        logo.wordmark_x,
        logo.height as f32,
        wordmark.height,
        logo.wordmark_bias_y,
    );
    log::debug!("logo monogram at ({}, {}), wordmark at ({}, {})", gx, gy, wx, wy);
    ctx.set_fill_style(&config.light_color)?;
    ctx.fill_text(&config.wordmark, wx, wy);

    Ok(ctx)
}

//! Integration tests for lig-canvas2d.

use lig_canvas2d::{
    BitmapFont, Canvas2dContext, CanvasColor, FontResolver, RectParams, RoundRectParams,
    TextFont, DEFAULT_FONT_CANDIDATES,
};

/// Skip a test when none of the default system fonts are installed.
macro_rules! skip_if_no_system_font {
    () => {
        if lig_canvas2d::resolve_font_path(DEFAULT_FONT_CANDIDATES).is_none() {
            eprintln!("Skipping test: no default font candidate installed");
            return;
        }
    };
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

#[test]
fn test_jpeg_output_decodes_to_canvas_size() {
    let mut ctx = Canvas2dContext::with_background(120, 40, "#0b0d10").unwrap();
    ctx.set_fill_style("#b7d959").unwrap();
    ctx.fill_rect(&RectParams {
        x: 0.0,
        y: 0.0,
        width: 60.0,
        height: 40.0,
    });

    let jpeg = ctx.to_jpeg(100).unwrap();
    let img = decode(&jpeg);
    assert_eq!(img.dimensions(), (120, 40));

    // Quality 100 keeps flat regions within a few levels
    let left = img.get_pixel(20, 20);
    let right = img.get_pixel(100, 20);
    let close = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 6;
    assert!(close(left[0], 0xb7) && close(left[1], 0xd9) && close(left[2], 0x59));
    assert!(close(right[0], 0x0b) && close(right[1], 0x0d) && close(right[2], 0x10));
}

#[test]
fn test_png_output_is_lossless() {
    let mut ctx = Canvas2dContext::with_background(32, 32, "#ffffff").unwrap();
    ctx.set_fill_style("#0b0d10").unwrap();
    ctx.fill_round_rect(&RoundRectParams::uniform(
        RectParams::from_corners(4.0, 4.0, 27.0, 27.0),
        4.0,
    ));

    let img = decode(&ctx.to_png(None).unwrap());
    assert_eq!(img.dimensions(), (32, 32));
    for (x, y, px) in img.enumerate_pixels() {
        let expected = ctx.pixel(x, y).unwrap();
        assert_eq!(px.0, [expected.r, expected.g, expected.b, expected.a]);
    }
}

#[test]
fn test_bitmap_text_centered_on_canvas() {
    let mut ctx = Canvas2dContext::with_background(64, 64, "#b7d959").unwrap();
    ctx.set_font(TextFont::Bitmap(BitmapFont::builtin()));
    ctx.set_fill_style("#0b0d10").unwrap();

    let bounds = ctx.measure_text("L").unwrap();
    let x = (64.0 - bounds.width()) / 2.0 - bounds.x0;
    let y = (64.0 - bounds.height()) / 2.0 - bounds.y0;
    ctx.fill_text("L", x, y);

    let dark = CanvasColor::from_rgba8(0x0b, 0x0d, 0x10, 255);
    let inked: Vec<(u32, u32)> = (0..64)
        .flat_map(|y| (0..64).map(move |x| (x, y)))
        .filter(|&(x, y)| ctx.pixel(x, y) == Some(dark))
        .collect();
    assert!(!inked.is_empty());

    let min_x = inked.iter().map(|p| p.0).min().unwrap();
    let max_x = inked.iter().map(|p| p.0).max().unwrap();
    let min_y = inked.iter().map(|p| p.1).min().unwrap();
    let max_y = inked.iter().map(|p| p.1).max().unwrap();
    assert_eq!(min_x + max_x + 1, 64);
    assert_eq!(min_y + max_y + 1, 64);
}

#[test]
fn test_resolver_without_fonts_yields_bitmap() {
    let resolution = FontResolver::new::<&str>(&[]).font(350.0);
    assert!(resolution.is_fallback());
    assert!(resolution.font.is_bitmap());
    assert_eq!(resolution.font.size_px(), 16.0);
}

#[test]
fn test_scalable_text_measures_and_draws() {
    skip_if_no_system_font!();

    let resolution = FontResolver::with_defaults().font(150.0);
    assert!(!resolution.is_fallback());

    let mut ctx = Canvas2dContext::with_background(256, 256, "#b7d959").unwrap();
    ctx.set_font(resolution.font.clone());
    ctx.set_fill_style("#0b0d10").unwrap();

    let bounds = ctx.measure_text("L").unwrap();
    assert!(bounds.width() > 10.0 && bounds.width() < 150.0);
    assert!(bounds.height() > 50.0 && bounds.height() < 200.0);

    let x = 128.0 - (bounds.x0 + bounds.x1) / 2.0;
    let y = 128.0 - (bounds.y0 + bounds.y1) / 2.0;
    ctx.fill_text("L", x, y);

    // The vertical stem of "L" sits left of center, well inside the ink box
    let stem_x = (x + bounds.x0 + 5.0) as u32;
    let dark = ctx.pixel(stem_x, 128).unwrap();
    assert!(dark.r < 40 && dark.g < 40 && dark.b < 40);

    // Corners of the canvas are untouched
    assert_eq!(
        ctx.pixel(0, 0),
        Some(CanvasColor::from_rgba8(0xb7, 0xd9, 0x59, 255))
    );

    // Registering the same family twice is a no-op
    ctx.set_font(resolution.font);
    assert_eq!(ctx.measure_text("L").unwrap(), bounds);
}

//! Text rendering operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::Canvas2dResult;
use crate::font::{ScalableFont, TextFont};
use crate::text::TextBounds;
use cosmic_text::Command;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Set the current font.
    ///
    /// Scalable fonts are registered with this canvas's font system the first
    /// time their family is seen.
    pub fn set_font(&mut self, font: TextFont) {
        if let TextFont::Scalable(scalable) = &font {
            if !self.registered_families.contains(scalable.family()) {
                log::debug!(target: "canvas", "registering font family {}", scalable.family());
                self.font_system
                    .db_mut()
                    .load_font_data(Vec::from(scalable.data().as_slice()));
                self.registered_families
                    .insert(scalable.family().to_string());
            }
        }
        self.state.font = font;
    }

    /// Get the current font.
    pub fn font(&self) -> &TextFont {
        &self.state.font
    }

    /// Measure the ink bounds of `text` in the current font.
    ///
    /// Fails when the text leaves no ink (empty or whitespace-only strings,
    /// or a font without outlines for the requested glyphs).
    pub fn measure_text(&mut self, text: &str) -> Canvas2dResult<TextBounds> {
        match &self.state.font {
            TextFont::Scalable(font) => crate::text::measure_scalable(
                &mut self.font_system,
                &mut self.swash_cache,
                font,
                text,
            ),
            TextFont::Bitmap(font) => crate::text::measure_bitmap(font, text),
        }
    }

    /// Fill text with its line box's top-left corner at (x, y).
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        log::debug!(target: "canvas", "fillText \"{}\" {} {}", text, x, y);
        match self.state.font.clone() {
            TextFont::Scalable(font) => self.fill_scalable_text(&font, text, x, y),
            TextFont::Bitmap(font) => {
                let x = x.round();
                let y = y.round();
                let color = self.state.fill_style;
                let mut paint = tiny_skia::Paint::default();
                paint.set_color(color);
                font.for_each_pixel(text, |px, py, side| {
                    if let Some(rect) = tiny_skia::Rect::from_xywh(
                        x + px as f32,
                        y + py as f32,
                        side as f32,
                        side as f32,
                    ) {
                        self.pixmap
                            .fill_rect(rect, &paint, Transform::identity(), None);
                    }
                });
            }
        }
    }

    /// Render each glyph of a shaped line as a filled vector path.
    fn fill_scalable_text(&mut self, font: &ScalableFont, text: &str, x: f32, y: f32) {
        let buffer = crate::text::shape_line(&mut self.font_system, font, text);
        let base_x = x;
        let base_y = y + font.ascent_px();

        self.with_fill_paint(|ctx, paint| {
            for run in buffer.layout_runs() {
                for glyph in run.glyphs.iter() {
                    let physical_glyph = glyph.physical((base_x, base_y), 1.0);

                    // Floating-point glyph position for sub-pixel precision
                    let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                    let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                    let Some(commands) = ctx
                        .swash_cache
                        .get_outline_commands(&mut ctx.font_system, physical_glyph.cache_key)
                    else {
                        continue;
                    };

                    // Font outlines have Y pointing up, screen has Y pointing down
                    // so we negate Y coordinates during path building
                    let mut path_builder = tiny_skia::PathBuilder::new();
                    for cmd in commands {
                        match cmd {
                            Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                            Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                            Command::QuadTo(ctrl, end) => {
                                path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                            }
                            Command::CurveTo(c1, c2, end) => {
                                path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                            }
                            Command::Close => path_builder.close(),
                        }
                    }

                    if let Some(path) = path_builder.finish() {
                        ctx.pixmap.fill_path(
                            &path,
                            paint,
                            tiny_skia::FillRule::Winding,
                            Transform::from_translate(glyph_x, glyph_y),
                            None,
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap_font::BitmapFont;
    use crate::geometry::CanvasColor;

    #[test]
    fn test_bitmap_text_lands_inside_measured_bounds() {
        let mut ctx = Canvas2dContext::with_background(64, 64, "#000000").unwrap();
        ctx.set_font(TextFont::Bitmap(BitmapFont::builtin()));
        ctx.set_fill_style("#ffffff").unwrap();

        let bounds = ctx.measure_text("L").unwrap();
        ctx.fill_text("L", 10.0, 20.0);

        let white = CanvasColor::from_rgba8(255, 255, 255, 255);
        let black = CanvasColor::from_rgba8(0, 0, 0, 255);
        let mut min = (u32::MAX, u32::MAX);
        let mut max = (0, 0);
        for y in 0..64 {
            for x in 0..64 {
                if ctx.pixel(x, y) == Some(white) {
                    min = (min.0.min(x), min.1.min(y));
                    max = (max.0.max(x), max.1.max(y));
                } else {
                    assert_eq!(ctx.pixel(x, y), Some(black));
                }
            }
        }
        assert_eq!(min, (10 + bounds.x0 as u32, 20 + bounds.y0 as u32));
        assert_eq!(max, (10 + bounds.x1 as u32 - 1, 20 + bounds.y1 as u32 - 1));
    }

    #[test]
    fn test_set_bitmap_font_registers_nothing() {
        let mut ctx = Canvas2dContext::new(8, 8).unwrap();
        ctx.set_font(TextFont::default());
        assert!(ctx.registered_families.is_empty());
        assert!(ctx.font().is_bitmap());
    }
}

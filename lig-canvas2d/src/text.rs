//! Text shaping and ink measurement using cosmic-text.

use crate::bitmap_font::BitmapFont;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::font::ScalableFont;
use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache,
};

/// Bounding box of the ink a string leaves on the canvas.
///
/// Offsets are relative to the draw origin passed to `fill_text`, which is
/// the top-left corner of the line box: the baseline lies `ascent` pixels
/// below it. `x0`/`y0` are therefore usually positive (side bearing and the
/// gap between ascender line and the top of the glyphs).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    fn include(&mut self, x: f32, y: f32) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }

    /// Include a quadratic segment: its end points and any axis extremum.
    fn include_quad(&mut self, p0: (f32, f32), p1: (f32, f32), p2: (f32, f32)) {
        self.include(p0.0, p0.1);
        self.include(p2.0, p2.1);
        let at = |t: f32, a: f32, b: f32, c: f32| {
            let mt = 1.0 - t;
            mt * mt * a + 2.0 * mt * t * b + t * t * c
        };
        for t in [quad_extremum(p0.0, p1.0, p2.0), quad_extremum(p0.1, p1.1, p2.1)]
            .into_iter()
            .flatten()
        {
            self.include(at(t, p0.0, p1.0, p2.0), at(t, p0.1, p1.1, p2.1));
        }
    }

    /// Include a cubic segment: its end points and any axis extrema.
    fn include_cubic(&mut self, p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) {
        self.include(p0.0, p0.1);
        self.include(p3.0, p3.1);
        let at = |t: f32, a: f32, b: f32, c: f32, d: f32| {
            let mt = 1.0 - t;
            mt * mt * mt * a + 3.0 * mt * mt * t * b + 3.0 * mt * t * t * c + t * t * t * d
        };
        let xs = cubic_extrema(p0.0, p1.0, p2.0, p3.0);
        let ys = cubic_extrema(p0.1, p1.1, p2.1, p3.1);
        for t in xs.into_iter().chain(ys).flatten() {
            self.include(
                at(t, p0.0, p1.0, p2.0, p3.0),
                at(t, p0.1, p1.1, p2.1, p3.1),
            );
        }
    }

    fn empty() -> Self {
        Self {
            x0: f32::INFINITY,
            y0: f32::INFINITY,
            x1: f32::NEG_INFINITY,
            y1: f32::NEG_INFINITY,
        }
    }

    fn is_empty(&self) -> bool {
        !(self.x0 <= self.x1 && self.y0 <= self.y1)
    }
}

/// Parameter in (0, 1) where a quadratic's derivative along one axis is zero.
fn quad_extremum(a: f32, b: f32, c: f32) -> Option<f32> {
    let denom = a - 2.0 * b + c;
    if denom.abs() < f32::EPSILON {
        return None;
    }
    let t = (a - b) / denom;
    (t > 0.0 && t < 1.0).then_some(t)
}

/// Parameters in (0, 1) where a cubic's derivative along one axis is zero.
fn cubic_extrema(a: f32, b: f32, c: f32, d: f32) -> [Option<f32>; 2] {
    // Derivative / 3 = qa t^2 + qb t + qc
    let qa = -a + 3.0 * b - 3.0 * c + d;
    let qb = 2.0 * (a - 2.0 * b + c);
    let qc = b - a;
    let inside = |t: f32| (t > 0.0 && t < 1.0).then_some(t);

    if qa.abs() < f32::EPSILON {
        if qb.abs() < f32::EPSILON {
            return [None, None];
        }
        return [inside(-qc / qb), None];
    }
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return [None, None];
    }
    let root = disc.sqrt();
    [
        inside((-qb + root) / (2.0 * qa)),
        inside((-qb - root) / (2.0 * qa)),
    ]
}

/// Shape a single line of text with a scalable font.
///
/// The font's family must already be registered in `font_system`.
pub(crate) fn shape_line(font_system: &mut FontSystem, font: &ScalableFont, text: &str) -> Buffer {
    let metrics = Metrics::new(font.size_px(), font.size_px() * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    // Disable hinting so outlines match the unhinted measurement
    let attrs = Attrs::new()
        .family(Family::Name(font.family()))
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Measure the ink bounds of `text` set in a scalable font.
///
/// Bounds cover the on-curve outline points and the extrema of each curve
/// segment, so they follow the drawn shapes rather than the advance box.
pub(crate) fn measure_scalable(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    font: &ScalableFont,
    text: &str,
) -> Canvas2dResult<TextBounds> {
    let buffer = shape_line(font_system, font, text);
    let ascent = font.ascent_px();

    let mut bounds = TextBounds::empty();
    for run in buffer.layout_runs() {
        for glyph in run.glyphs.iter() {
            let physical_glyph = glyph.physical((0.0, 0.0), 1.0);
            let glyph_x = glyph.x + glyph.font_size * glyph.x_offset;
            let glyph_y = ascent + glyph.y - glyph.font_size * glyph.y_offset;

            let Some(commands) =
                swash_cache.get_outline_commands(font_system, physical_glyph.cache_key)
            else {
                continue;
            };

            // Font outlines have Y pointing up, screen has Y pointing down
            let to_screen = |x: f32, y: f32| (glyph_x + x, glyph_y - y);
            let mut current = (glyph_x, glyph_y);
            let mut start = current;
            for cmd in commands {
                match *cmd {
                    Command::MoveTo(p) => {
                        current = to_screen(p.x, p.y);
                        start = current;
                        bounds.include(current.0, current.1);
                    }
                    Command::LineTo(p) => {
                        current = to_screen(p.x, p.y);
                        bounds.include(current.0, current.1);
                    }
                    Command::QuadTo(ctrl, end) => {
                        let end = to_screen(end.x, end.y);
                        bounds.include_quad(current, to_screen(ctrl.x, ctrl.y), end);
                        current = end;
                    }
                    Command::CurveTo(c1, c2, end) => {
                        let end = to_screen(end.x, end.y);
                        bounds.include_cubic(
                            current,
                            to_screen(c1.x, c1.y),
                            to_screen(c2.x, c2.y),
                            end,
                        );
                        current = end;
                    }
                    Command::Close => current = start,
                }
            }
        }
    }

    if bounds.is_empty() {
        return Err(Canvas2dError::TextError(format!(
            "no glyph outlines for {:?} in {}",
            text,
            font.family()
        )));
    }
    Ok(bounds)
}

/// Measure the ink bounds of `text` set in the bitmap font.
pub(crate) fn measure_bitmap(font: &BitmapFont, text: &str) -> Canvas2dResult<TextBounds> {
    let mut bounds = TextBounds::empty();
    font.for_each_pixel(text, |x, y, side| {
        bounds.include(x as f32, y as f32);
        bounds.include((x + side) as f32, (y + side) as f32);
    });

    if bounds.is_empty() {
        return Err(Canvas2dError::TextError(format!(
            "no lit pixels for {:?} in the bitmap font",
            text
        )));
    }
    Ok(bounds)
}

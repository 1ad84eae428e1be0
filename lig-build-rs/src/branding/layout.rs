//! Text placement from measured extents.
//!
//! All functions return the draw origin handed to `fill_text`, i.e. the
//! top-left of the line box, not the top-left of the ink.

use lig_canvas2d::TextBounds;

/// Width and height of a piece of text, measured or assumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

impl TextExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<TextBounds> for TextExtent {
    fn from(bounds: TextBounds) -> Self {
        Self::new(bounds.width(), bounds.height())
    }
}

impl From<[f32; 2]> for TextExtent {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

/// Origin that centers `extent` on `center`, then shifts it by `bias`.
pub fn centered_on(center: (f32, f32), extent: TextExtent, bias: (f32, f32)) -> (f32, f32) {
    (
        center.0 - extent.width / 2.0 + bias.0,
        center.1 - extent.height / 2.0 + bias.1,
    )
}

/// Origin that centers `extent` in a `width` x `height` area, then shifts
/// it vertically by `bias_y`.
pub fn centered_in(width: f32, height: f32, extent: TextExtent, bias_y: f32) -> (f32, f32) {
    centered_on((width / 2.0, height / 2.0), extent, (0.0, bias_y))
}

/// Origin at a fixed `x`, vertically centered in an area of `area_height`
/// and shifted by `bias_y`.
pub fn left_anchored(x: f32, area_height: f32, text_height: f32, bias_y: f32) -> (f32, f32) {
    (x, area_height / 2.0 - text_height / 2.0 + bias_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TextExtent::new(200.0, 300.0), (156.0, 36.0))]
    #[case(TextExtent::new(0.0, 0.0), (256.0, 186.0))]
    #[case(TextExtent::new(512.0, 512.0), (0.0, -70.0))]
    fn test_icon_centering(#[case] extent: TextExtent, #[case] expected: (f32, f32)) {
        assert_eq!(centered_in(512.0, 512.0, extent, -70.0), expected);
    }

    #[test]
    fn test_badge_centering_with_fallback() {
        let origin = centered_on((128.0, 128.0), [100.0, 150.0].into(), (-5.0, -30.0));
        assert_eq!(origin, (73.0, 23.0));
    }

    #[test]
    fn test_wordmark_anchor_ignores_width() {
        assert_eq!(left_anchored(270.0, 256.0, 95.0, -30.0), (270.0, 50.5));
    }

    #[test]
    fn test_extent_from_bounds() {
        let bounds = TextBounds {
            x0: 2.0,
            y0: 10.0,
            x1: 30.0,
            y1: 50.0,
        };
        assert_eq!(TextExtent::from(bounds), TextExtent::new(28.0, 40.0));
    }
}

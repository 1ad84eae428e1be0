//! Parameter structs for drawing operations.

/// Parameters for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl RectParams {
    /// Build a rectangle from two inclusive corner points `[x0, y0]–[x1, y1]`.
    ///
    /// Matches the `[left, top, right, bottom]` box convention, where the
    /// right/bottom edge pixel is part of the shape.
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0 + 1.0,
            height: y1 - y0 + 1.0,
        }
    }
}

/// Parameters for a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
    /// Corner radii in order: [top-left, top-right, bottom-right, bottom-left].
    /// Each corner has independent x (horizontal) and y (vertical) radii.
    pub radii: [CornerRadius; 4],
}

impl RoundRectParams {
    /// A rounded rectangle with the same radius on every corner.
    pub fn uniform(rect: RectParams, radius: f32) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            radii: [CornerRadius::uniform(radius); 4],
        }
    }
}

/// An independent x/y corner radius for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadius {
    pub x: f32,
    pub y: f32,
}

impl CornerRadius {
    /// Create a corner radius with equal x and y values.
    pub const fn uniform(r: f32) -> Self {
        Self { x: r, y: r }
    }
}

/// A backend-neutral RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color string such as `#b7d959` or `white`.
    pub fn parse(s: &str) -> crate::Canvas2dResult<Self> {
        let parsed = csscolorparser::parse(s)
            .map_err(|e| crate::Canvas2dError::ColorParseError(format!("{}: {}", s, e)))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self { r, g, b, a })
    }

    /// Largest per-channel difference to another color, ignoring alpha.
    pub fn max_channel_diff(&self, other: &CanvasColor) -> u8 {
        [
            self.r.abs_diff(other.r),
            self.g.abs_diff(other.g),
            self.b.abs_diff(other.b),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_inclusive_corners() {
        let rect = RectParams::from_corners(20.0, 20.0, 236.0, 236.0);
        assert_eq!(rect.width, 217.0);
        assert_eq!(rect.height, 217.0);
        assert_eq!(rect.x + rect.width, 237.0);
    }

    #[test]
    fn test_parse_hex_color() {
        let c = CanvasColor::parse("#b7d959").unwrap();
        assert_eq!(c, CanvasColor::from_rgba8(0xb7, 0xd9, 0x59, 255));
        assert!(CanvasColor::parse("not-a-color").is_err());
    }

    #[test]
    fn test_max_channel_diff() {
        let a = CanvasColor::from_rgba8(10, 200, 30, 255);
        let b = CanvasColor::from_rgba8(12, 190, 30, 0);
        assert_eq!(a.max_channel_diff(&b), 10);
    }
}

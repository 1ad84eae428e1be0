//! Built-in fixed-size bitmap font.
//!
//! Used when no scalable font file can be loaded. Each glyph is an 8x8 cell,
//! one byte per row, least significant bit is the leftmost pixel. Lowercase
//! letters render with their uppercase shapes and characters without a
//! glyph render as `?`.

/// Width and height of a glyph cell in font pixels.
const CELL: u32 = 8;

/// Device pixels per font pixel for the built-in font.
const BUILTIN_SCALE: u32 = 2;

const GLYPHS: &[(char, [u8; 8])] = &[
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('!', [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00]),
    ('&', [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00]),
    ('\'', [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06]),
    ('-', [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00]),
    ('0', [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00]),
    ('1', [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00]),
    ('2', [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00]),
    ('3', [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00]),
    ('4', [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00]),
    ('5', [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00]),
    ('6', [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00]),
    ('7', [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00]),
    ('8', [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00]),
    ('9', [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00]),
    ('?', [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00]),
    ('A', [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00]),
    ('B', [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00]),
    ('C', [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00]),
    ('D', [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00]),
    ('E', [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00]),
    ('F', [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00]),
    ('G', [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00]),
    ('H', [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00]),
    ('I', [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00]),
    ('J', [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00]),
    ('K', [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00]),
    ('L', [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00]),
    ('M', [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00]),
    ('N', [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00]),
    ('O', [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00]),
    ('P', [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00]),
    ('Q', [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00]),
    ('R', [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00]),
    ('S', [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00]),
    ('T', [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00]),
    ('U', [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00]),
    ('V', [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00]),
    ('W', [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00]),
    ('X', [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00]),
    ('Y', [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00]),
    ('Z', [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00]),
];

/// The built-in bitmap font at its one fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BitmapFont {
    /// The fallback font. Its size does not depend on any requested size.
    pub const fn builtin() -> Self {
        Self {
            scale: BUILTIN_SCALE,
        }
    }

    /// Height of a glyph cell in device pixels.
    pub fn size_px(&self) -> f32 {
        (CELL * self.scale) as f32
    }

    /// Horizontal distance between consecutive glyph cells in device pixels.
    pub fn advance(&self) -> u32 {
        CELL * self.scale
    }

    /// Device pixels covered by one font pixel.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Look up the rows of a glyph.
    pub fn glyph(&self, ch: char) -> &'static [u8; 8] {
        let ch = ch.to_ascii_uppercase();
        let lookup = |c: char| {
            GLYPHS
                .binary_search_by(|(g, _)| g.cmp(&c))
                .ok()
                .map(|idx| &GLYPHS[idx].1)
        };
        lookup(ch)
            .or_else(|| lookup('?'))
            .unwrap_or(&GLYPHS[0].1)
    }

    /// Visit every lit font pixel of `text` as a device-space square.
    ///
    /// Coordinates are relative to the top-left of the first glyph cell; the
    /// callback receives `(x, y, side)`.
    pub fn for_each_pixel<F: FnMut(u32, u32, u32)>(&self, text: &str, mut f: F) {
        for (i, ch) in text.chars().enumerate() {
            let cell_x = i as u32 * self.advance();
            for (row, bits) in self.glyph(ch).iter().enumerate() {
                for col in 0..CELL {
                    if (bits >> col) & 1 == 1 {
                        f(
                            cell_x + col * self.scale,
                            row as u32 * self.scale,
                            self.scale,
                        );
                    }
                }
            }
        }
    }
}

//! Fixed-width 4x5 bitmap fonts.
//!
//! Two glyph tables exist: [`MINI`] for box labels and values, and [`TITLE`]
//! for the screen header. They share the rendering code but not the glyphs
//! (the title set has no digits and a slightly different `A`).
//!
//! # Glyph Encoding
//!
//! Each glyph is 5 rows of 4 bits. Bit 3 is the leftmost column:
//!
//! ```text
//! 0b0110  .##.
//! 0b1010  #.#.
//! 0b1110  ###.
//! 0b1010  #.#.
//! 0b1010  #.#.
//! ```
//!
//! Lookups upper-case the character first. Anything not in the table renders
//! as the blank glyph, so text never fails to draw.

use embedded_graphics::pixelcolor::Rgb888;

use crate::frame::Frame;

/// Glyph cell width and advance in pixels.
pub const GLYPH_WIDTH: i32 = 4;

/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: i32 = 5;

/// One 4x5 glyph, one nibble per row.
pub type Glyph = [u8; 5];

const BLANK: Glyph = [0b0000; 5];

/// Compact glyph set used inside boxes.
const MINI_GLYPHS: &[(char, Glyph)] = &[
    ('A', [0b0110, 0b1010, 0b1110, 0b1010, 0b1010]),
    ('B', [0b1100, 0b1010, 0b1100, 0b1010, 0b1100]),
    ('C', [0b1110, 0b1000, 0b1000, 0b1000, 0b1110]),
    ('D', [0b1100, 0b1010, 0b1010, 0b1010, 0b1100]),
    ('E', [0b1110, 0b1000, 0b1100, 0b1000, 0b1110]),
    ('F', [0b1110, 0b1000, 0b1100, 0b1000, 0b1000]),
    ('G', [0b1110, 0b1000, 0b1010, 0b1010, 0b1110]),
    ('I', [0b1110, 0b0100, 0b0100, 0b0100, 0b1110]),
    ('L', [0b1000, 0b1000, 0b1000, 0b1000, 0b1110]),
    ('M', [0b1010, 0b1110, 0b1110, 0b1010, 0b1010]),
    ('N', [0b1010, 0b1110, 0b1110, 0b1010, 0b1010]),
    ('O', [0b1110, 0b1010, 0b1010, 0b1010, 0b1110]),
    ('P', [0b1110, 0b1010, 0b1110, 0b1000, 0b1000]),
    ('Q', [0b1110, 0b1010, 0b1010, 0b1110, 0b0010]),
    ('R', [0b1110, 0b1010, 0b1110, 0b1010, 0b1010]),
    ('S', [0b1110, 0b1000, 0b1110, 0b0010, 0b1110]),
    ('T', [0b1110, 0b0100, 0b0100, 0b0100, 0b0100]),
    ('U', [0b1010, 0b1010, 0b1010, 0b1010, 0b1110]),
    ('Y', [0b1010, 0b1010, 0b0100, 0b0100, 0b0100]),
    ('.', [0b0000, 0b0000, 0b0000, 0b0000, 0b0100]),
    ('0', [0b1110, 0b1010, 0b1010, 0b1010, 0b1110]),
    ('1', [0b0100, 0b1100, 0b0100, 0b0100, 0b1110]),
    ('2', [0b1110, 0b0010, 0b1110, 0b1000, 0b1110]),
    ('3', [0b1110, 0b0010, 0b1110, 0b0010, 0b1110]),
    ('4', [0b1010, 0b1010, 0b1110, 0b0010, 0b0010]),
    ('5', [0b1110, 0b1000, 0b1110, 0b0010, 0b1110]),
    ('6', [0b1110, 0b1000, 0b1110, 0b1010, 0b1110]),
    ('7', [0b1110, 0b0010, 0b0100, 0b0100, 0b0100]),
    ('8', [0b1110, 0b1010, 0b1110, 0b1010, 0b1110]),
    ('9', [0b1110, 0b1010, 0b1110, 0b0010, 0b1110]),
    (' ', BLANK),
];

/// Header glyph set (letters and punctuation only).
const TITLE_GLYPHS: &[(char, Glyph)] = &[
    ('A', [0b1110, 0b1010, 0b1110, 0b1010, 0b1010]),
    ('B', [0b1100, 0b1010, 0b1100, 0b1010, 0b1100]),
    ('C', [0b1110, 0b1000, 0b1000, 0b1000, 0b1110]),
    ('D', [0b1100, 0b1010, 0b1010, 0b1010, 0b1100]),
    ('E', [0b1110, 0b1000, 0b1100, 0b1000, 0b1110]),
    ('F', [0b1110, 0b1000, 0b1100, 0b1000, 0b1000]),
    ('G', [0b1110, 0b1000, 0b1010, 0b1010, 0b1110]),
    ('I', [0b1110, 0b0100, 0b0100, 0b0100, 0b1110]),
    ('L', [0b1000, 0b1000, 0b1000, 0b1000, 0b1110]),
    ('M', [0b1010, 0b1110, 0b1110, 0b1010, 0b1010]),
    ('N', [0b1010, 0b1110, 0b1110, 0b1010, 0b1010]),
    ('O', [0b1110, 0b1010, 0b1010, 0b1010, 0b1110]),
    ('P', [0b1110, 0b1010, 0b1110, 0b1000, 0b1000]),
    ('R', [0b1110, 0b1010, 0b1110, 0b1010, 0b1010]),
    ('S', [0b1110, 0b1000, 0b1110, 0b0010, 0b1110]),
    ('T', [0b1110, 0b0100, 0b0100, 0b0100, 0b0100]),
    ('U', [0b1010, 0b1010, 0b1010, 0b1010, 0b1110]),
    ('Y', [0b1010, 0b1010, 0b0100, 0b0100, 0b0100]),
    ('.', [0b0000, 0b0000, 0b0000, 0b0000, 0b0100]),
    (' ', BLANK),
];

/// Compact font for box labels and values.
pub const MINI: BitmapFont = BitmapFont::new(MINI_GLYPHS);

/// Header font for screen titles.
pub const TITLE: BitmapFont = BitmapFont::new(TITLE_GLYPHS);

/// A fixed-width bitmap font over a small glyph table.
#[derive(Clone, Copy, Debug)]
pub struct BitmapFont {
    glyphs: &'static [(char, Glyph)],
}

impl BitmapFont {
    pub const fn new(glyphs: &'static [(char, Glyph)]) -> Self { Self { glyphs } }

    /// Glyph for `ch` (case-insensitive), blank if unmapped.
    pub fn glyph(&self, ch: char) -> Glyph {
        let key = ch.to_ascii_uppercase();
        self.glyphs
            .iter()
            .find(|(c, _)| *c == key)
            .map_or(BLANK, |(_, g)| *g)
    }

    /// Draw one glyph with its top-left corner at `(x, y)`.
    pub fn draw_char(&self, frame: &mut Frame, x: i32, y: i32, ch: char, color: Rgb888) {
        for (row, bits) in self.glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b1000 >> col) != 0 {
                    frame.set_pixel(x + col, y + row as i32, color);
                }
            }
        }
    }

    /// Pixel width of `text`: 4px per character, whatever the glyph.
    pub fn text_width(text: &str) -> i32 { text.chars().count() as i32 * GLYPH_WIDTH }

    /// Draw `text` horizontally centered on `center_x`, glyph tops at `y`.
    pub fn draw_centered(&self, frame: &mut Frame, center_x: i32, y: i32, text: &str, color: Rgb888) {
        let mut x = center_x - Self::text_width(text) / 2;
        for ch in text.chars() {
            self.draw_char(frame, x, y, ch, color);
            x += GLYPH_WIDTH;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb888 = Rgb888::new(0, 0, 0);
    const INK: Rgb888 = Rgb888::new(255, 255, 255);

    /// Columns that received ink anywhere in the frame.
    fn ink_columns(frame: &Frame) -> Vec<i32> {
        (0..64)
            .filter(|&x| (0..64).any(|y| frame.pixel(x, y) == Some(INK)))
            .collect()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(MINI.glyph('q'), MINI.glyph('Q'));
        assert_eq!(TITLE.glyph('p'), TITLE.glyph('P'));
    }

    #[test]
    fn test_unknown_char_is_blank() {
        assert_eq!(MINI.glyph('#'), BLANK);
        assert_eq!(MINI.glyph('Z'), BLANK);
        assert_eq!(MINI.glyph('é'), BLANK);
        // Title font carries no digits
        assert_eq!(TITLE.glyph('7'), BLANK);
        assert_ne!(MINI.glyph('7'), BLANK);
    }

    #[test]
    fn test_tables_differ() {
        assert_ne!(MINI.glyph('A'), TITLE.glyph('A'), "A is drawn differently in the header");
        assert_eq!(MINI.glyph('B'), TITLE.glyph('B'));
    }

    #[test]
    fn test_draw_char_pixels() {
        let mut frame = Frame::new(BG);
        MINI.draw_char(&mut frame, 10, 20, '1', INK);
        // '1' = .#.. / ##.. / .#.. / .#.. / ###.
        assert_eq!(frame.pixel(11, 20), Some(INK));
        assert_eq!(frame.pixel(10, 20), Some(BG));
        assert_eq!(frame.pixel(10, 21), Some(INK));
        assert_eq!(frame.pixel(12, 24), Some(INK));
        assert_eq!(frame.pixel(13, 24), Some(BG), "Fourth column is spacing");
    }

    #[test]
    fn test_draw_char_clipped_at_edge() {
        let mut frame = Frame::new(BG);
        MINI.draw_char(&mut frame, 62, 61, '8', INK);
        assert_eq!(frame.pixel(62, 61), Some(INK));
        assert_eq!(frame.pixel(63, 63), Some(INK));
    }

    #[test]
    fn test_centered_start_position() {
        let mut frame = Frame::new(BG);
        // "88" is 8px wide, so starts at 32 - 4 = 28
        MINI.draw_centered(&mut frame, 32, 10, "88", INK);
        assert_eq!(ink_columns(&frame), vec![28, 29, 30, 32, 33, 34]);
    }

    #[test]
    fn test_centered_odd_width_floors() {
        let mut frame = Frame::new(BG);
        // "8" is 4px wide, start = 15 - 2 = 13
        MINI.draw_centered(&mut frame, 15, 0, "8", INK);
        assert_eq!(ink_columns(&frame).first(), Some(&13));
    }

    #[test]
    fn test_centered_text_stays_within_half_width() {
        for text in ["5", "20", "TESIS", "IMPARTIDOS", "2.695.566", "PUBLICACIONES"] {
            for cx in [9, 21, 32, 40] {
                let mut frame = Frame::new(BG);
                MINI.draw_centered(&mut frame, cx, 30, text, INK);
                let cols = ink_columns(&frame);
                let len = text.chars().count() as i32;
                let (Some(first), Some(last)) = (cols.first(), cols.last()) else {
                    panic!("'{text}' drew nothing");
                };
                assert!(*first >= (cx - 2 * len).max(0), "'{text}' at {cx}: left {first}");
                assert!(*last <= cx + 2 * len - 1, "'{text}' at {cx}: right {last}");
            }
        }
    }

    #[test]
    fn test_blank_chars_still_advance() {
        let mut frame = Frame::new(BG);
        MINI.draw_centered(&mut frame, 32, 0, "1#1", INK);
        // Width 12, start 26; second '1' at 34
        assert_eq!(frame.pixel(27, 0), Some(INK));
        assert_eq!(frame.pixel(35, 0), Some(INK));
        assert!((30..34).all(|x| (0..5).all(|y| frame.pixel(x, y) == Some(BG))));
    }
}

//! Glow boxes: the framed cards that hold one counter each.
//!
//! A box is drawn in three passes:
//! 1. Checkerboard interior (two near-black tones by `(x + y) % 2`)
//! 2. Bright 1px outline on the box edge
//! 3. Dim 1px outline one pixel further out (the "glow")
//!
//! The label and value are then centered horizontally inside the box.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::Palette;
use crate::counters::Counter;
use crate::frame::Frame;
use crate::screens::RenderContext;

/// Position, size and text color of one box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoxGeometry {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: Rgb888,
}

impl BoxGeometry {
    pub const fn new(x: i32, y: i32, w: i32, h: i32, color: Rgb888) -> Self { Self { x, y, w, h, color } }

    /// Horizontal center used for label and value text.
    #[inline]
    pub const fn center_x(&self) -> i32 { self.x + self.w / 2 }
}

/// Vertical placement of label and value, relative to the box top.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextRows {
    pub label: i32,
    pub value: i32,
}

/// Fill the box interior (inside the outline) with a dithered checkerboard.
pub fn draw_box_interior(frame: &mut Frame, palette: &Palette, x: i32, y: i32, w: i32, h: i32) {
    for yy in (y + 1)..(y + h - 1) {
        for xx in (x + 1)..(x + w - 1) {
            let tone = if (xx + yy).rem_euclid(2) == 0 { palette.card } else { palette.card_alt };
            frame.set_pixel(xx, yy, tone);
        }
    }
}

/// Two-tone outline: accent on the edge, dim accent one pixel outside.
pub fn draw_glow_outline(frame: &mut Frame, palette: &Palette, x: i32, y: i32, w: i32, h: i32) {
    frame.rect_outline(x, y, w, h, palette.accent);
    frame.rect_outline(x - 1, y - 1, w + 2, h + 2, palette.accent_dim);
}

/// Draw one counter card showing the animated value for `frame_index`.
pub fn draw_counter_box(
    frame: &mut Frame,
    ctx: &RenderContext,
    geometry: BoxGeometry,
    rows: TextRows,
    counter: &Counter,
    frame_index: usize,
) {
    let BoxGeometry { x, y, w, h, color } = geometry;
    draw_box_interior(frame, &ctx.palette, x, y, w, h);
    draw_glow_outline(frame, &ctx.palette, x, y, w, h);

    let cx = geometry.center_x();
    ctx.mini_font.draw_centered(frame, cx, y + rows.label, counter.label, color);

    let shown = ctx.timing.countup_value(counter.value, frame_index);
    let text = counter.format(shown);
    ctx.mini_font.draw_centered(frame, cx, y + rows.value, &text, color);
}

//! Counter card layouts.
//!
//! # Visual Layout
//!
//! ```text
//! small 4-box (18x18)        wide 4-box (24x18)         two-box (52x18)
//! +------------------+       +------------------+       +------------------+
//! |      TITLE       |       |      TITLE       |       |      TITLE       |
//! |    [Q1] [Q2]     |       |  [TFG ] [TFM ]   |       | [  IMPARTIDOS  ] |  y_top
//! |    [Q3] [Q4]     |       |  [TESI] [PRAC]   |       | [  RECIBIDOS   ] |  y_bottom
//! +------------------+       +------------------+       +------------------+
//! ```
//!
//! Four-box cards take their text color from the rank palette by position
//! (gold, silver, bronze, gray). Two-box screens pick both colors explicitly.
//! Labels sit 3px (4px for two-box) below the card top and values 7px below that.

use crate::config::{BOX_HEIGHT, SMALL_BOX_WIDTH, SMALL_GRID, TWO_BOX_WIDTH, TWO_BOX_X, WIDE_BOX_WIDTH, WIDE_GRID};
use crate::counters::Counter;
use crate::frame::Frame;
use crate::screens::{RenderContext, TwoBoxLayout};
use crate::widgets::{BoxGeometry, TextRows, draw_chrome, draw_counter_box};

const FOUR_BOX_ROWS: TextRows = TextRows { label: 3, value: 10 };
const TWO_BOX_ROWS: TextRows = TextRows { label: 4, value: 11 };

fn build_4box(
    ctx: &RenderContext,
    title: &str,
    counters: &[Counter],
    phase: i32,
    frame_index: usize,
    grid: &[(i32, i32); 4],
    box_width: i32,
) -> Frame {
    let mut frame = Frame::new(ctx.palette.background);
    draw_chrome(&mut frame, ctx, phase, title);

    let colors = ctx.palette.rank.in_order();
    for ((&(x, y), color), counter) in grid.iter().zip(colors).zip(counters) {
        let geometry = BoxGeometry::new(x, y, box_width, BOX_HEIGHT, color);
        draw_counter_box(&mut frame, ctx, geometry, FOUR_BOX_ROWS, counter, frame_index);
    }
    frame
}

/// Quartile screen: four 18x18 cards.
pub fn build_small_4box(ctx: &RenderContext, title: &str, counters: &[Counter], phase: i32, frame_index: usize) -> Frame {
    build_4box(ctx, title, counters, phase, frame_index, &SMALL_GRID, SMALL_BOX_WIDTH)
}

/// Four 24x18 cards, wide enough for five-letter labels.
pub fn build_wide_4box(ctx: &RenderContext, title: &str, counters: &[Counter], phase: i32, frame_index: usize) -> Frame {
    build_4box(ctx, title, counters, phase, frame_index, &WIDE_GRID, WIDE_BOX_WIDTH)
}

/// Two full-width cards at the rows and colors given by `layout`.
pub fn build_2box(
    ctx: &RenderContext,
    title: &str,
    counters: &[Counter],
    phase: i32,
    frame_index: usize,
    layout: TwoBoxLayout,
) -> Frame {
    let mut frame = Frame::new(ctx.palette.background);
    draw_chrome(&mut frame, ctx, phase, title);

    let cards = [
        BoxGeometry::new(TWO_BOX_X, layout.y_top, TWO_BOX_WIDTH, BOX_HEIGHT, layout.color_top),
        BoxGeometry::new(TWO_BOX_X, layout.y_bottom, TWO_BOX_WIDTH, BOX_HEIGHT, layout.color_bottom),
    ];
    for (geometry, counter) in cards.into_iter().zip(counters) {
        draw_counter_box(&mut frame, ctx, geometry, TWO_BOX_ROWS, counter, frame_index);
    }
    frame
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb888;

    use super::*;
    use crate::font::BitmapFont;

    const PROBE: Rgb888 = Rgb888::new(1, 2, 3);

    /// Assert that `text` is drawn in `color` centered on `cx` at row `y`, and
    /// that no other pixel of its text cell carries `color`.
    fn assert_text(frame: &Frame, font: &BitmapFont, cx: i32, y: i32, text: &str, color: Rgb888) {
        let mut reference = Frame::new(Rgb888::new(0, 0, 0));
        font.draw_centered(&mut reference, cx, y, text, PROBE);
        let start = cx - BitmapFont::text_width(text) / 2;
        for yy in y..y + 5 {
            for xx in start..start + BitmapFont::text_width(text) {
                let expected = reference.pixel(xx, yy) == Some(PROBE);
                let actual = frame.pixel(xx, yy) == Some(color);
                assert_eq!(actual, expected, "'{text}' mismatch at ({xx},{yy})");
            }
        }
    }

    fn quartiles() -> Vec<Counter> {
        vec![
            Counter::new("Q1", 20),
            Counter::new("Q2", 12),
            Counter::new("Q3", 5),
            Counter::new("Q4", 8),
        ]
    }

    #[test]
    fn test_small_4box_hold_frame_values() {
        let ctx = RenderContext::new();
        let frame = build_small_4box(&ctx, "PUBLICACIONES", &quartiles(), 1, 5);
        let rank = ctx.palette.rank.in_order();
        let expected = [("Q1", "20"), ("Q2", "12"), ("Q3", "5"), ("Q4", "8")];
        for (((x, y), color), (label, value)) in SMALL_GRID.into_iter().zip(rank).zip(expected) {
            let cx = x + SMALL_BOX_WIDTH / 2;
            assert_text(&frame, &ctx.mini_font, cx, y + 3, label, color);
            assert_text(&frame, &ctx.mini_font, cx, y + 10, value, color);
        }
    }

    #[test]
    fn test_small_4box_first_frame_counts_up() {
        let ctx = RenderContext::new();
        let frame = build_small_4box(&ctx, "PUBLICACIONES", &quartiles(), 0, 0);
        // 20 * 0.75 = 15
        assert_text(&frame, &ctx.mini_font, 21, 31, "15", ctx.palette.rank.gold);
    }

    #[test]
    fn test_wide_4box_geometry() {
        let ctx = RenderContext::new();
        let counters = vec![
            Counter::new("TFG", 20),
            Counter::new("TFM", 12),
            Counter::new("TESIS", 5),
            Counter::new("PRAC", 8),
        ];
        let frame = build_wide_4box(&ctx, "DIRECCIONES", &counters, 0, 5);
        let p = ctx.palette;
        // Bright edge of the third card and its glow
        assert_eq!(frame.pixel(6, 41), Some(p.accent));
        assert_eq!(frame.pixel(29, 58), Some(p.accent));
        assert_eq!(frame.pixel(5, 40), Some(p.accent_dim));
        assert_text(&frame, &ctx.mini_font, 18, 44, "TESIS", p.rank.bronze);
        assert_text(&frame, &ctx.mini_font, 46, 51, "8", p.rank.gray);
    }

    #[test]
    fn test_fewer_counters_draw_fewer_boxes() {
        let ctx = RenderContext::new();
        let frame = build_wide_4box(&ctx, "DIRECCIONES", &[Counter::new("TFG", 1)], 0, 5);
        assert_eq!(frame.pixel(6, 21), Some(ctx.palette.accent));
        assert_ne!(frame.pixel(34, 21), Some(ctx.palette.accent), "Second card has no counter");
    }

    #[test]
    fn test_2box_money_formatting() {
        let ctx = RenderContext::new();
        let p = ctx.palette;
        let layout = TwoBoxLayout {
            y_top: 18,
            y_bottom: 39,
            color_top: p.rank.gold,
            color_bottom: p.rank.silver,
        };
        let counters = [Counter::new("PROYECTOS", 7), Counter::new("FINANCIACION", 2_695_566)];

        let hold = build_2box(&ctx, "PRO. OFICIALES", &counters, 1, 5, layout);
        assert_text(&hold, &ctx.mini_font, 32, 22, "PROYECTOS", p.rank.gold);
        assert_text(&hold, &ctx.mini_font, 32, 29, "7", p.rank.gold);
        assert_text(&hold, &ctx.mini_font, 32, 43, "FINANCIACION", p.rank.silver);
        assert_text(&hold, &ctx.mini_font, 32, 50, "2.695.566", p.rank.silver);

        let first = build_2box(&ctx, "PRO. OFICIALES", &counters, 0, 0, layout);
        assert_text(&first, &ctx.mini_font, 32, 50, "2.021.674", p.rank.silver);
        assert_text(&first, &ctx.mini_font, 32, 29, "5", p.rank.gold);
    }

    #[test]
    fn test_builders_are_deterministic() {
        let ctx = RenderContext::new();
        let a = build_small_4box(&ctx, "PUBLICACIONES", &quartiles(), 0, 3);
        let b = build_small_4box(&ctx, "PUBLICACIONES", &quartiles(), 0, 3);
        assert_eq!(a, b);
        let shimmer = build_small_4box(&ctx, "PUBLICACIONES", &quartiles(), 1, 3);
        assert_ne!(a, shimmer, "Grid phase must change the frame");
    }
}

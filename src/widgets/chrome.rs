//! Panel chrome shared by every screen: background grid, double border,
//! title and underline.
//!
//! Chrome is always drawn first; boxes and the code square are composited on
//! top of it.
//!
//! ```text
//! +--------------------------------------------------------------+  outer border (1,1) accent
//! | +----------------------------------------------------------+ |  inner border (3,3) dim
//! | |                      PUBLICACIONES                       | |  title row y=8
//! | |                   -------------------                    | |  underline y=16
//! | |   (grid lines every 8px, shifted by phase 0/1)           | |
//! ```

use embedded_graphics::pixelcolor::Rgb888;

use crate::config::{CENTER_X, GRID_SPACING, SCREEN_HEIGHT, SCREEN_WIDTH, TITLE_Y, UNDERLINE_X0, UNDERLINE_X1, UNDERLINE_Y};
use crate::frame::Frame;
use crate::screens::RenderContext;

const W: i32 = SCREEN_WIDTH as i32;
const H: i32 = SCREEN_HEIGHT as i32;

/// Draw full-width grid lines on every row/column where `(i + phase) % 8 == 0`.
///
/// Alternating `phase` between 0 and 1 on consecutive frames shifts the grid by
/// one pixel, which reads as a slow shimmer on the panel.
pub fn draw_grid(frame: &mut Frame, phase: i32, color: Rgb888) {
    for y in 0..H {
        if (y + phase).rem_euclid(GRID_SPACING) == 0 {
            frame.hline(0, W - 1, y, color);
        }
    }
    for x in 0..W {
        if (x + phase).rem_euclid(GRID_SPACING) == 0 {
            frame.vline(x, 0, H - 1, color);
        }
    }
}

/// Draw the common screen decoration for `title`.
pub fn draw_chrome(frame: &mut Frame, ctx: &RenderContext, phase: i32, title: &str) {
    let palette = &ctx.palette;
    draw_grid(frame, phase, palette.grid);
    frame.rect_outline(1, 1, W - 2, H - 2, palette.accent);
    frame.rect_outline(3, 3, W - 6, H - 6, palette.accent_dim);
    ctx.title_font.draw_centered(frame, CENTER_X, TITLE_Y, title, palette.text);
    frame.hline(UNDERLINE_X0, UNDERLINE_X1, UNDERLINE_Y, palette.accent);
}

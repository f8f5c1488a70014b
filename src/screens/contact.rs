//! Contact screen: chrome plus a large scannable code.
//!
//! The code square (48x48 at (8,18)) sits directly under the title underline
//! and reaches past the inner border at the bottom; the light backdrop keeps
//! enough contrast for phone cameras on the LED panel.

use crate::config::{CODE_SIZE, CODE_X, CODE_Y};
use crate::frame::Frame;
use crate::qr::{ModuleMatrix, draw_code};
use crate::screens::RenderContext;
use crate::widgets::draw_chrome;

/// Compose the contact screen around a pre-generated module matrix.
pub fn build_code_screen(ctx: &RenderContext, title: &str, matrix: &ModuleMatrix, phase: i32) -> Frame {
    let mut frame = Frame::new(ctx.palette.background);
    draw_chrome(&mut frame, ctx, phase, title);
    draw_code(&mut frame, &ctx.palette, matrix, CODE_X, CODE_Y, CODE_SIZE);
    frame
}

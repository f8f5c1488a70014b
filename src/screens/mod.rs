//! Screen definitions and frame builders.
//!
//! A [`ScreenSpec`] is built once at startup (title, counters, layout) and
//! never mutated. Rendering a spec for a given frame index returns a fresh,
//! fully composed [`Frame`].
//!
//! # Layouts
//!
//! - **Small 4-box** ([`build_small_4box`]): 18x18 cards in a 2x2 grid (quartiles)
//! - **Wide 4-box** ([`build_wide_4box`]): 24x18 cards in a 2x2 grid
//! - **Two-box** ([`build_2box`]): two 52x18 cards stacked at caller-chosen rows
//! - **Code** ([`build_code_screen`]): the contact QR code in a 48x48 square
//!
//! Box positions must not overlap; the geometry is fixed per layout and is not
//! checked at runtime.

mod cards;
mod contact;

pub use cards::{build_2box, build_small_4box, build_wide_4box};
pub use contact::build_code_screen;

use embedded_graphics::pixelcolor::Rgb888;

use crate::animations::Timing;
use crate::colors::Palette;
use crate::counters::Counter;
use crate::font::{self, BitmapFont};
use crate::frame::Frame;
use crate::qr::ModuleMatrix;

/// Everything a builder needs besides the screen itself.
///
/// Constructed once in `main` and passed by reference into every render call.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub palette: Palette,
    /// Font for box labels and values.
    pub mini_font: BitmapFont,
    /// Font for screen titles.
    pub title_font: BitmapFont,
    pub timing: Timing,
}

impl RenderContext {
    pub const fn new() -> Self {
        Self {
            palette: Palette::DEFAULT,
            mini_font: font::MINI,
            title_font: font::TITLE,
            timing: Timing::DEFAULT,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self { Self::new() }
}

/// Row offsets and colors of a two-box screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TwoBoxLayout {
    pub y_top: i32,
    pub y_bottom: i32,
    pub color_top: Rgb888,
    pub color_bottom: Rgb888,
}

/// How a screen arranges its content.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Layout {
    SmallFourBox,
    WideFourBox,
    TwoBox(TwoBoxLayout),
    /// Scannable code, pre-generated at startup.
    Code(ModuleMatrix),
}

/// One screen of the animation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScreenSpec {
    pub title: &'static str,
    pub counters: Vec<Counter>,
    pub layout: Layout,
}

impl ScreenSpec {
    /// Render one frame with grid `phase` and count-up index `anim_index`.
    pub fn render(&self, ctx: &RenderContext, phase: i32, anim_index: usize) -> Frame {
        match &self.layout {
            Layout::SmallFourBox => build_small_4box(ctx, self.title, &self.counters, phase, anim_index),
            Layout::WideFourBox => build_wide_4box(ctx, self.title, &self.counters, phase, anim_index),
            Layout::TwoBox(two) => build_2box(ctx, self.title, &self.counters, phase, anim_index, *two),
            Layout::Code(matrix) => build_code_screen(ctx, self.title, matrix, phase),
        }
    }
}

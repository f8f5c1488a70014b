//! Color palette for the stats panels.
//!
//! The palette is a plain value built once at startup and handed to every
//! builder through [`RenderContext`](crate::screens::RenderContext); nothing
//! reads colors from global state.
//!
//! ## Rgb888 Color Format
//!
//! The device takes 24-bit RGB, so all colors are `Rgb888` (8 bits per channel)
//! and serialize to the transport payload without conversion.

use embedded_graphics::pixelcolor::Rgb888;

/// Rank colors assigned to boxes by position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RankColors {
    pub gold: Rgb888,
    pub silver: Rgb888,
    pub bronze: Rgb888,
    pub gray: Rgb888,
}

impl RankColors {
    /// Colors in box order: first box gold, last box gray.
    #[inline]
    pub const fn in_order(&self) -> [Rgb888; 4] { [self.gold, self.silver, self.bronze, self.gray] }
}

/// Every color the renderer uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Solid fill every frame starts from.
    pub background: Rgb888,
    /// Shimmering background grid lines.
    pub grid: Rgb888,
    /// Bright border tone (outer frame, box outline, title underline).
    pub accent: Rgb888,
    /// Dim border tone (inner frame, box glow).
    pub accent_dim: Rgb888,
    /// Title text.
    pub text: Rgb888,
    /// Box interior checkerboard tones.
    pub card: Rgb888,
    pub card_alt: Rgb888,
    pub rank: RankColors,
    /// Light backdrop behind the scannable code.
    pub code_background: Rgb888,
    /// Dark code modules.
    pub code_foreground: Rgb888,
}

impl Palette {
    /// Dark synthwave theme with cyan borders.
    pub const DEFAULT: Self = Self {
        background: Rgb888::new(6, 4, 20),
        grid: Rgb888::new(10, 10, 30),
        accent: Rgb888::new(0, 220, 255),
        accent_dim: Rgb888::new(0, 120, 150),
        text: Rgb888::new(230, 235, 255),
        card: Rgb888::new(8, 6, 26),
        card_alt: Rgb888::new(10, 8, 34),
        rank: RankColors {
            gold: Rgb888::new(240, 200, 90),
            silver: Rgb888::new(220, 220, 230),
            bronze: Rgb888::new(200, 140, 90),
            gray: Rgb888::new(140, 150, 160),
        },
        code_background: Rgb888::new(240, 245, 255),
        code_foreground: Rgb888::new(10, 12, 20),
    };
}

impl Default for Palette {
    fn default() -> Self { Self::DEFAULT }
}

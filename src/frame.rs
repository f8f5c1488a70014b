//! Fixed-size RGB raster buffer.
//!
//! A [`Frame`] is one 64x64 image of the uploaded animation. It owns its
//! pixels, is written by the builders, serialized once for transport and
//! then dropped.
//!
//! # Bounds Handling
//!
//! Every write goes through [`Frame::set_pixel`], which silently discards
//! coordinates outside `[0, W) x [0, H)`. Shapes may therefore hang off the
//! edge of the panel (the glow outline of an edge box, a large code matrix)
//! without clipping logic in the callers.
//!
//! # embedded-graphics Integration
//!
//! `Frame` implements `DrawTarget<Color = Rgb888>`, so the outline and fill
//! helpers below are thin wrappers over `Rectangle`/`Line` primitives, and any
//! other embedded-graphics drawable can render onto a frame as well.

use core::convert::Infallible;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::config::{FRAME_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};

const W: i32 = SCREEN_WIDTH as i32;
const H: i32 = SCREEN_HEIGHT as i32;

/// One composed display frame, stored as row-major RGB triples.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame pre-filled with a solid color.
    pub fn new(fill: Rgb888) -> Self {
        let mut data = Vec::with_capacity(FRAME_BYTES);
        for _ in 0..(SCREEN_WIDTH * SCREEN_HEIGHT) {
            data.extend_from_slice(&[fill.r(), fill.g(), fill.b()]);
        }
        Self { data }
    }

    #[inline]
    const fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= W || y >= H {
            return None;
        }
        Some(((y * W + x) * 3) as usize)
    }

    /// Write one pixel; out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(i) = Self::index(x, y) {
            self.data[i] = color.r();
            self.data[i + 1] = color.g();
            self.data[i + 2] = color.b();
        }
    }

    /// Read one pixel, `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        Self::index(x, y).map(|i| Rgb888::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Horizontal line from `x0` to `x1` inclusive. Draws nothing if `x1 < x0`.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb888) {
        if x1 < x0 {
            return;
        }
        Line::new(Point::new(x0, y), Point::new(x1, y))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
            .ok();
    }

    /// Vertical line from `y0` to `y1` inclusive. Draws nothing if `y1 < y0`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb888) {
        if y1 < y0 {
            return;
        }
        Line::new(Point::new(x, y0), Point::new(x, y1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
            .ok();
    }

    /// 1px outline of the `w` x `h` rectangle whose top-left corner is `(x, y)`.
    pub fn rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb888) {
        rect(x, y, w, h)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
            .ok();
    }

    /// Fill the `w` x `h` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb888) {
        rect(x, y, w, h)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
            .ok();
    }

    /// Raw RGB bytes, `3 * W * H` long, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.data }

    /// Standard base64 of [`as_bytes`](Self::as_bytes), as the device expects in `PicData`.
    pub fn to_base64(&self) -> String { STANDARD.encode(&self.data) }
}

/// Rectangle with negative sizes collapsed to empty.
fn rect(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w.max(0) as u32, h.max(0) as u32))
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &SCREEN_WIDTH)
            .field("height", &SCREEN_HEIGHT)
            .finish_non_exhaustive()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Frame {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

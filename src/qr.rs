//! Scannable code rendering for the contact screen.
//!
//! Module generation sits behind [`MatrixGenerator`] so the rasterizer only
//! ever sees a square boolean grid. The production generator wraps the
//! `qrcode` crate (medium error correction, smallest fitting version) and
//! adds a 2-module quiet zone around the symbol.
//!
//! # Scaling
//!
//! The matrix is scaled by the largest integer factor that fits the target
//! square (at least 1) and centered with floor division:
//!
//! ```text
//! scale     = max(1, size / n)
//! draw_size = n * scale
//! offset    = (size - draw_size) / 2      (floor, per axis)
//! ```
//!
//! Modules that would land outside the target square (only possible when the
//! matrix has more modules than the square has pixels) are clipped, so the
//! code never bleeds into the chrome.

use anyhow::{Result, anyhow};
use qrcode::{Color, EcLevel, QrCode};

use crate::colors::Palette;
use crate::frame::Frame;
use crate::widgets::draw_glow_outline;

/// Square grid of code modules, `true` = dark.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build from row-major modules. Returns `None` unless `modules.len() == size * size`.
    pub fn from_modules(size: usize, modules: Vec<bool>) -> Option<Self> {
        (modules.len() == size * size).then_some(Self { size, modules })
    }

    /// Side length in modules.
    #[inline]
    pub const fn size(&self) -> usize { self.size }

    /// Whether the module at column `x`, row `y` is dark.
    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool { x < self.size && y < self.size && self.modules[y * self.size + x] }

    /// Copy of this matrix surrounded by `border` light modules on every side.
    #[must_use]
    pub fn with_quiet_zone(&self, border: usize) -> Self {
        let size = self.size + 2 * border;
        let mut modules = vec![false; size * size];
        for y in 0..self.size {
            for x in 0..self.size {
                modules[(y + border) * size + x + border] = self.is_dark(x, y);
            }
        }
        Self { size, modules }
    }
}

/// Anything that turns text into a square module matrix.
pub trait MatrixGenerator {
    fn generate(&self, data: &str) -> Result<ModuleMatrix>;
}

/// QR code generator (medium error correction, auto version).
#[derive(Clone, Copy, Debug)]
pub struct QrGenerator {
    /// Light modules added around the symbol.
    pub quiet_zone: usize,
}

impl MatrixGenerator for QrGenerator {
    fn generate(&self, data: &str) -> Result<ModuleMatrix> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| anyhow!("cannot encode {} bytes as a QR code: {e:?}", data.len()))?;
        let width = code.width();
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        let matrix = ModuleMatrix::from_modules(width, modules)
            .ok_or_else(|| anyhow!("QR encoder returned a non-square matrix"))?;
        Ok(matrix.with_quiet_zone(self.quiet_zone))
    }
}

/// Integer scale and top-left offset for an `n`-module matrix in a `size` square.
pub fn fit(n: usize, size: i32) -> (i32, i32) {
    let n = n.max(1) as i32;
    let scale = (size / n).max(1);
    let draw_size = n * scale;
    (scale, (size - draw_size).div_euclid(2))
}

/// Rasterize `matrix` into the `size` x `size` square at `(x0, y0)`.
///
/// Fills the square with the light code background, draws each dark module as
/// a `scale` x `scale` block and finishes with the glow outline used by boxes.
pub fn draw_code(frame: &mut Frame, palette: &Palette, matrix: &ModuleMatrix, x0: i32, y0: i32, size: i32) {
    frame.fill_rect(x0, y0, size, size, palette.code_background);

    let (scale, offset) = fit(matrix.size(), size);
    let (ox, oy) = (x0 + offset, y0 + offset);
    let inside = |v: i32, origin: i32| v >= origin && v < origin + size;

    for my in 0..matrix.size() {
        for mx in 0..matrix.size() {
            if !matrix.is_dark(mx, my) {
                continue;
            }
            let px = ox + mx as i32 * scale;
            let py = oy + my as i32 * scale;
            for sy in 0..scale {
                for sx in 0..scale {
                    if inside(px + sx, x0) && inside(py + sy, y0) {
                        frame.set_pixel(px + sx, py + sy, palette.code_foreground);
                    }
                }
            }
        }
    }

    draw_glow_outline(frame, palette, x0, y0, size, size);
}

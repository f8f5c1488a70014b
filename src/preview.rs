//! PNG previews of composed frames.
//!
//! Frames are copied onto a [`SimulatorDisplay`] and written through its
//! output image, upscaled so individual LEDs stay visible. Useful for checking
//! layouts without a device on the network.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::info;

use crate::config::{PREVIEW_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::frame::Frame;

/// Copy `frame` onto a simulator display of the panel's size.
pub fn to_display(frame: &Frame) -> SimulatorDisplay<Rgb888> {
    let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let pixels = (0..SCREEN_HEIGHT as i32).flat_map(|y| {
        (0..SCREEN_WIDTH as i32).filter_map(move |x| frame.pixel(x, y).map(|c| Pixel(Point::new(x, y), c)))
    });
    display.draw_iter(pixels).ok();
    display
}

/// File name of frame `index` inside a dump directory.
pub fn frame_file_name(index: usize) -> String { format!("frame_{index:03}.png") }

/// Write every frame as `frame_NNN.png` into `dir`, creating it if needed.
pub fn dump_frames(dir: &Path, frames: &[Frame]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let settings = OutputSettingsBuilder::new().scale(PREVIEW_SCALE).build();

    let mut written = Vec::with_capacity(frames.len());
    for (index, frame) in frames.iter().enumerate() {
        let path = dir.join(frame_file_name(index));
        to_display(frame)
            .to_rgb_output_image(&settings)
            .save_png(&path)
            .map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
        written.push(path);
    }
    info!("Wrote {} previews to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_frame() {
        let mut frame = Frame::new(Rgb888::new(6, 4, 20));
        frame.set_pixel(10, 20, Rgb888::new(255, 0, 0));
        let display = to_display(&frame);
        assert_eq!(display.get_pixel(Point::new(10, 20)), Rgb888::new(255, 0, 0));
        assert_eq!(display.get_pixel(Point::new(63, 63)), Rgb888::new(6, 4, 20));
    }

    #[test]
    fn test_frame_file_names() {
        assert_eq!(frame_file_name(0), "frame_000.png");
        assert_eq!(frame_file_name(47), "frame_047.png");
    }

    #[test]
    fn test_dump_frames_writes_pngs() {
        let dir = std::env::temp_dir().join(format!("pixoo-preview-{}", std::process::id()));
        let frames = vec![Frame::new(Rgb888::new(0, 0, 0)); 2];
        let written = dump_frames(&dir, &frames).unwrap();
        assert_eq!(written.len(), 2);
        for path in &written {
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
        }
        fs::remove_dir_all(&dir).ok();
    }
}

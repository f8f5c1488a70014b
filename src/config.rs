//! Application configuration constants.
//!
//! All layout positions, animation timing and transport tuning are fixed at
//! compile time. The only runtime knobs (statistics path, device address,
//! contact URL) come from the command line in `main.rs`.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (Pixoo-64 LED matrix).
pub const SCREEN_WIDTH: u32 = 64;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Number of raw bytes in one RGB frame (3 bytes per pixel, row-major).
pub const FRAME_BYTES: usize = (SCREEN_WIDTH * SCREEN_HEIGHT * 3) as usize;

/// Horizontal screen center, used for the title row.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// How long the device shows each frame of the uploaded animation.
pub const FRAME_MS: u32 = 1900;

/// Frames rendered per screen (count-up lead-in plus hold).
pub const FRAMES_PER_SCREEN: usize = 6;

/// Animated lead-in frames at the start of each screen.
pub const COUNTUP_FRAMES: usize = 2;

/// Frames that hold the final value after the count-up.
pub const HOLD_FRAMES: usize = 4;

/// Extra frames appended to two-box screens (they keep holding the final value).
pub const EXTRA_FRAMES_2BOX: usize = 0;

const _: () = assert!(COUNTUP_FRAMES + HOLD_FRAMES == FRAMES_PER_SCREEN);
const _: () = assert!(COUNTUP_FRAMES >= 1);

// =============================================================================
// Chrome Layout
// =============================================================================

/// Background grid line spacing in pixels.
pub const GRID_SPACING: i32 = 8;

/// Baseline row (top of glyph cell) for the screen title.
pub const TITLE_Y: i32 = 8;

/// Accent line beneath the title: x range and row.
pub const UNDERLINE_X0: i32 = 20;
pub const UNDERLINE_X1: i32 = 44;
pub const UNDERLINE_Y: i32 = 16;

// =============================================================================
// Box Layout
// =============================================================================

/// Box height shared by every layout.
pub const BOX_HEIGHT: i32 = 18;

/// Side of a small (quartile) box.
pub const SMALL_BOX_WIDTH: i32 = 18;

/// Width of a wide 4-box layout box.
pub const WIDE_BOX_WIDTH: i32 = 24;

/// Width and left edge of a two-box layout box.
pub const TWO_BOX_WIDTH: i32 = 52;
pub const TWO_BOX_X: i32 = 6;

/// Top-left corners of the 2x2 small grid (row-major).
pub const SMALL_GRID: [(i32, i32); 4] = [(12, 21), (34, 21), (12, 41), (34, 41)];

/// Top-left corners of the 2x2 wide grid (row-major).
pub const WIDE_GRID: [(i32, i32); 4] = [(6, 21), (34, 21), (6, 41), (34, 41)];

// =============================================================================
// Code Screen
// =============================================================================

/// Top-left corner and side of the square that holds the scannable code.
pub const CODE_X: i32 = 8;
pub const CODE_Y: i32 = 18;
pub const CODE_SIZE: i32 = 48;

/// Quiet zone (in modules) added around the generated code.
pub const CODE_QUIET_ZONE: usize = 2;

/// Default target of the contact code.
pub const DEFAULT_CONTACT_URL: &str = "https://produccioncientifica.usal.es/investigadores/57921/detalle";

// =============================================================================
// Transport Configuration
// =============================================================================

/// Default device address on the local network.
pub const DEFAULT_DEVICE_HOST: &str = "192.168.0.21";

/// Default location of the statistics document.
pub const DEFAULT_STATS_PATH: &str = "all-results.json";

/// Attempts per command before the run is aborted.
pub const POST_ATTEMPTS: usize = 4;

/// Sleep after each failed attempt.
pub const POST_BACKOFF: Duration = Duration::from_millis(200);

/// Pacing delay after each frame upload.
pub const SEND_PACING: Duration = Duration::from_millis(60);

/// Per-request network timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// Channel index the device must show for HTTP animations.
pub const HTTP_CHANNEL_INDEX: u8 = 3;

/// Animation id used for the uploaded sequence.
pub const ANIMATION_ID: u32 = 1;

// =============================================================================
// Preview Output
// =============================================================================

/// Upscale factor for PNG previews (64px -> 512px).
pub const PREVIEW_SCALE: u32 = 8;

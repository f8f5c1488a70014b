//! Count-up animation for counter values.
//!
//! Each screen opens with a short count-up: the displayed value eases out
//! from near zero to its target over the first `countup_frames` frames, then
//! holds the exact target for the remaining `hold_frames`.
//!
//! ```text
//! frame:   0      1      2      3      4      5
//!          ease   final  final  final  final  final
//! ```
//!
//! With the default two count-up frames, frame 0 shows 75% of the target
//! (`1 - (1 - 0.5)^2`) and frame 1 already shows the exact value.
//!
//! # Minimum Displayed Value
//!
//! Animated frames clamp to at least 1 so a nonzero target never shows a zero
//! mid-animation. The clamp also applies when the target itself is 0 (or
//! negative), which briefly shows "1" before the hold frames settle on the real
//! value. Hold frames are always exact.

use crate::config::{COUNTUP_FRAMES, EXTRA_FRAMES_2BOX, HOLD_FRAMES};

/// Quadratic ease-out: fast start, slow finish. `t` in `[0, 1]`.
#[inline]
pub fn ease_out_quad(t: f64) -> f64 { 1.0 - (1.0 - t) * (1.0 - t) }

/// Frame budget of one screen's animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timing {
    /// Animated lead-in frames.
    pub countup_frames: usize,
    /// Frames holding the final value.
    pub hold_frames: usize,
    /// Additional hold frames rendered on two-box screens.
    pub extra_two_box_frames: usize,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        countup_frames: COUNTUP_FRAMES,
        hold_frames: HOLD_FRAMES,
        extra_two_box_frames: EXTRA_FRAMES_2BOX,
    };

    /// Total frames of one screen.
    #[inline]
    pub const fn frames_per_screen(&self) -> usize { self.countup_frames + self.hold_frames }

    /// Clamp a render index into the animated budget, for screens that render
    /// more frames than `frames_per_screen`.
    #[inline]
    pub fn clamp_frame(&self, frame: usize) -> usize { frame.min(self.frames_per_screen().saturating_sub(1)) }

    /// Value to display for `final_value` at `frame`.
    pub fn countup_value(&self, final_value: i64, frame: usize) -> i64 {
        if frame + 1 >= self.countup_frames {
            return final_value;
        }
        let t = (frame + 1) as f64 / self.countup_frames as f64;
        let eased = (final_value as f64 * ease_out_quad(t)) as i64;
        eased.max(1)
    }
}

impl Default for Timing {
    fn default() -> Self { Self::DEFAULT }
}

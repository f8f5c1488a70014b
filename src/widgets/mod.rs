//! Widget components for the stats panels.
//!
//! - [`chrome`]: Background grid, double border, title and underline shared by every screen
//! - [`boxes`]: Glow-bordered counter cards with checkerboard interiors
//!
//! # Draw Order
//!
//! Builders always start from a solid background frame, draw the chrome, then
//! composite boxes (or the code square) on top. Nothing is erased afterwards,
//! so later passes simply overwrite earlier ones.

mod boxes;
mod chrome;

pub use boxes::{BoxGeometry, TextRows, draw_box_interior, draw_counter_box, draw_glow_outline};
pub use chrome::{draw_chrome, draw_grid};

// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f64->i64, usize->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // i64->f64 in the count-up easing
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for panel coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::similar_names)] // x0/x1, y_top/y_bottom are clear
#![allow(clippy::too_many_arguments)] // Builders take geometry plus frame state

//! Research statistics panel for a 64x64 Pixoo display.
//!
//! Reads a statistics document, composes an animated sequence of stat screens
//! (counter cards that count up over a shimmering grid, plus a contact QR
//! code) and uploads the whole sequence to the device as one looping
//! animation.
//!
//! # Pipeline
//!
//! ```text
//! all-results.json --> stats::PanelStats --> sequencer::catalog --> [ScreenSpec]
//!                                                                     |
//!                   transport::send_animation <-- [Frame] <-- build_sequence
//! ```
//!
//! # Modules
//!
//! - [`config`]: display, layout, timing and transport constants
//! - [`colors`]: fixed palette
//! - [`frame`]: 64x64 RGB raster, an embedded-graphics `DrawTarget`
//! - [`font`]: 4x5 bitmap fonts and centered text
//! - [`animations`]: ease-out count-up
//! - [`counters`]: labeled values and thousands formatting
//! - [`widgets`]: grid, chrome and counter cards
//! - [`qr`]: code matrix generation and scaled rasterization
//! - [`screens`]: layout builders and [`screens::ScreenSpec`]
//! - [`sequencer`]: screen catalog and frame ordering
//! - [`stats`]: statistics document normalization
//! - [`transport`]: device commands, retries and upload
//! - [`preview`]: PNG dumps of composed frames

pub mod animations;
pub mod colors;
pub mod config;
pub mod counters;
pub mod font;
pub mod frame;
pub mod preview;
pub mod qr;
pub mod screens;
pub mod sequencer;
pub mod stats;
pub mod transport;
pub mod widgets;

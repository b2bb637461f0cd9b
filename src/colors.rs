//! Color constants for the chequer panel.
//!
//! The `embedded_graphics` crate provides pre-defined color constants through
//! the `RgbColor` trait. Using these instead of manually constructing
//! `Rgb565::new(r, g, b)` ensures optimal values and improves code clarity.
//!
//! Rgb565 uses 16 bits per pixel (5 bits red, 6 bits green, 5 bits blue) and
//! is native to the ST7789, so no conversion happens when writing to the
//! framebuffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Stroke color for the glyph polyline.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Counter label text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue (0, 0, 31). Style A fill in the even phase.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure red (31, 0, 0). Style A fill in the odd phase.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure yellow (31, 63, 0). Style B fill in the even phase.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31). Style B fill in the odd phase.
pub const CYAN: Rgb565 = Rgb565::CYAN;

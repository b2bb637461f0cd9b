//! Chequer panel library - testable modules for the chequerboard display demo.
//!
//! This library contains the display-state toggling engine, which can be
//! tested on the host machine. The binary (`main.rs`) uses this library and
//! adds the embedded-specific code (ST7789 driver, embassy tasks).
//!
//! # Architecture
//!
//! The panel is a 24x32 grid of 10x10 cells tiling the whole 320x240 display,
//! painted in a checkerboard of two shared styles, plus a zig-zag polyline
//! glyph and an update counter label. A periodic task flips the palette and
//! the glyph anchor every tick; a repaint task redraws the whole scene from
//! the current style table.
//!
//! - [`styles`]: the two shared paint styles and the palette transition
//! - [`grid`]: bulk construction of the checkerboard cell matrix
//! - [`glyph`]: the fixed-geometry polyline and its two anchor positions
//! - [`counter`]: the monotonic update counter and its label text
//! - [`phase`]: the explicit even/odd toggle phase
//! - [`panel`]: the controller orchestrating the build and toggle passes
//! - [`render`]: repaint invalidation tracking
//! - [`widgets`]: drawing the scene onto any `DrawTarget`
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p chequer-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p chequer-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod counter;
pub mod glyph;
pub mod grid;
pub mod panel;
pub mod phase;
pub mod render;
pub mod styles;
pub mod widgets;

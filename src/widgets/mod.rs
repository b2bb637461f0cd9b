//! Drawing the scene onto any `DrawTarget`.
//!
//! Every draw function resolves colors from the shared style table at call
//! time, so a palette change is picked up by all 768 cells without touching
//! them individually. The cell matrix tiles the full screen, so a repaint
//! needs no explicit clear pass: grid first, then glyph and label on top.

mod glyph;
mod grid;
mod label;

pub use glyph::draw_glyph;
pub use grid::draw_grid;
pub use label::draw_counter_label;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::panel::Panel;

/// Redraw the whole scene from current style data.
pub fn draw_panel<D>(
    display: &mut D,
    panel: &Panel,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_grid(display, panel.grid(), panel.styles());
    draw_glyph(display, panel.glyph());
    draw_counter_label(display, panel.label());
}

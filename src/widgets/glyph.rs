//! Glyph polyline rendering.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle};

use crate::colors::BLACK;
use crate::glyph::{GLYPH_LINE_WIDTH, Glyph};

/// Stroke color of the glyph. Black reads well on both palettes.
const GLYPH_STROKE: Rgb565 = BLACK;

/// Stroke the glyph's polyline at its current anchor position.
pub fn draw_glyph<D>(
    display: &mut D,
    glyph: &Glyph,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let points = glyph.anchored_points();
    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(GLYPH_STROKE, GLYPH_LINE_WIDTH))
        .draw(display)
        .ok();
}

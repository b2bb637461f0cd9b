//! Checkerboard cell rendering.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::grid::Grid;
use crate::styles::StyleSet;

/// Fill every grid cell with its style's current color.
pub fn draw_grid<D>(
    display: &mut D,
    grid: &Grid,
    styles: &StyleSet,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = Size::new(grid.cell_size(), grid.cell_size());
    for cell in grid.cells() {
        Rectangle::new(cell.origin, size)
            .into_styled(PrimitiveStyle::with_fill(styles.fill(cell.style)))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

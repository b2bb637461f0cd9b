//! Bulk construction of the checkerboard cell matrix.
//!
//! The grid is built exactly once at startup and never touched again: cell
//! positions and style bindings are fixed for the program's lifetime. Only
//! the two referenced style records change afterwards, so a repaint picks up
//! new colors without any per-cell work.

use embedded_graphics::prelude::*;

use crate::config::CELL_COUNT;
use crate::styles::StyleId;

/// One fixed cell of the checkerboard.
///
/// The style binding is an id into the panel's style table, assigned by the
/// parity rule at build time and never reassigned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridCell {
    /// Top-left corner, fixed at creation.
    pub origin: Point,
    /// Which of the two shared paint styles this cell renders with.
    pub style: StyleId,
}

/// Row-major collection of grid cells.
#[derive(Debug)]
pub struct Grid {
    cells: heapless::Vec<GridCell, CELL_COUNT>,
    cell_size: u32,
}

impl Grid {
    /// Build a `rows` x `cols` grid of square cells of side `cell_size`.
    ///
    /// Cell (row, col) sits at `(col * cell_size, row * cell_size)` and is
    /// bound to style A when `row + col` is even, B otherwise. The loop
    /// bounds are exclusive: exactly `rows * cols` cells are created, no
    /// more.
    pub fn build(
        rows: usize,
        cols: usize,
        cell_size: u32,
    ) -> Self {
        debug_assert!(rows * cols <= CELL_COUNT, "grid exceeds cell store capacity");

        let mut cells = heapless::Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let style = if (row + col) % 2 == 0 { StyleId::A } else { StyleId::B };
                let origin = Point::new(col as i32 * cell_size as i32, row as i32 * cell_size as i32);
                cells.push(GridCell { origin, style }).ok();
            }
        }

        Self { cells, cell_size }
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[GridCell] { &self.cells }

    /// Side length of each square cell in pixels.
    #[inline]
    pub const fn cell_size(&self) -> u32 { self.cell_size }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    /// True when the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CELL_SIZE, GRID_COLS, GRID_ROWS};

    #[test]
    fn test_cell_count_is_exact() {
        let grid = Grid::build(GRID_ROWS, GRID_COLS, CELL_SIZE);
        assert_eq!(grid.len(), 768, "24x32 grid must create exactly 768 cells");
    }

    #[test]
    fn test_checkerboard_parity() {
        let grid = Grid::build(GRID_ROWS, GRID_COLS, CELL_SIZE);
        for (idx, cell) in grid.cells().iter().enumerate() {
            let row = idx / GRID_COLS;
            let col = idx % GRID_COLS;
            let expected = if (row + col) % 2 == 0 { StyleId::A } else { StyleId::B };
            assert_eq!(cell.style, expected, "cell ({row}, {col}) has wrong style");
        }
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::build(GRID_ROWS, GRID_COLS, CELL_SIZE);
        for (idx, cell) in grid.cells().iter().enumerate() {
            let row = (idx / GRID_COLS) as i32;
            let col = (idx % GRID_COLS) as i32;
            assert_eq!(cell.origin, Point::new(col * 10, row * 10));
        }
    }

    #[test]
    fn test_two_by_two_scenario() {
        let grid = Grid::build(2, 2, 10);
        let cells = grid.cells();
        assert_eq!(cells.len(), 4);
        assert_eq!((cells[0].origin, cells[0].style), (Point::new(0, 0), StyleId::A));
        assert_eq!((cells[1].origin, cells[1].style), (Point::new(10, 0), StyleId::B));
        assert_eq!((cells[2].origin, cells[2].style), (Point::new(0, 10), StyleId::B));
        assert_eq!((cells[3].origin, cells[3].style), (Point::new(10, 10), StyleId::A));
    }

    #[test]
    fn test_grid_fills_screen_exactly() {
        use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
        assert_eq!(GRID_COLS as u32 * CELL_SIZE, SCREEN_WIDTH);
        assert_eq!(GRID_ROWS as u32 * CELL_SIZE, SCREEN_HEIGHT);
    }
}

//! Display and layout configuration constants.
//!
//! Layout math like `GRID_ROWS * GRID_COLS` is computed at compile time as
//! `const`; the grid dimensions are chosen so the cell matrix tiles the
//! ST7789 panel exactly (32 * 10 = 320, 24 * 10 = 240).

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Grid Configuration
// =============================================================================

/// Number of cell rows in the checkerboard grid.
pub const GRID_ROWS: usize = 24;

/// Number of cell columns in the checkerboard grid.
pub const GRID_COLS: usize = 32;

/// Side length of each square grid cell in pixels.
pub const CELL_SIZE: u32 = 10;

/// Total number of grid cells. Also the capacity of the cell store;
/// construction fills it exactly.
pub const CELL_COUNT: usize = GRID_ROWS * GRID_COLS;

// =============================================================================
// Glyph and Label Placement
// =============================================================================

/// Vertical margin between the glyph and the screen edge it is anchored to.
pub const GLYPH_EDGE_MARGIN: i32 = 20;

/// Horizontal inset of the counter label from the bottom-left corner.
pub const LABEL_INSET_X: i32 = 5;

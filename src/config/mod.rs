//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed layout constants
//! - `timing`: Toggle cadence and logging intervals

pub mod layout;
pub mod timing;

// Re-export layout constants at config level for convenience
pub use layout::{
    CELL_COUNT,
    CELL_SIZE,
    GLYPH_EDGE_MARGIN,
    GRID_COLS,
    GRID_ROWS,
    LABEL_INSET_X,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
// Re-export timing constants at config level for convenience
pub use timing::{IDLE_SLEEP_SECS, TICK_LOG_INTERVAL, TOGGLE_INTERVAL_MS};

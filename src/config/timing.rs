//! Toggle cadence and logging intervals.

/// Interval between toggle passes in milliseconds.
///
/// Each pass flips the palette, re-anchors the glyph, and bumps the update
/// counter. Calls are serialized; a pass completes before the next is due.
pub const TOGGLE_INTERVAL_MS: u64 = 10;

/// Sleep increment of the idle loop in the entry point, in seconds.
pub const IDLE_SLEEP_SECS: u64 = 1;

/// Log the update counter every this many toggles (5 s at the 10 ms cadence).
pub const TICK_LOG_INTERVAL: u32 = 500;

//! Repaint invalidation tracking.
//!
//! The panel uses whole-scene invalidation: a toggle pass marks everything
//! stale and the repaint pass redraws every object from the current style
//! table. There is no per-object dirty tracking; selective invalidation
//! (only cells whose style changed) would alter observable repaint timing
//! and is deliberately not done.
//!
//! On hardware the consumed mark becomes a fire-and-forget signal to the
//! repaint task; repeated invalidations before the next repaint coalesce
//! into one redraw.

/// Tracks whether a whole-scene repaint is pending.
pub struct RepaintState {
    pending: bool,
}

impl RepaintState {
    /// Fresh state with a repaint pending: the build pass itself must be
    /// painted once.
    pub const fn new() -> Self { Self { pending: true } }

    /// Mark every object stale.
    #[inline]
    pub fn invalidate_all(&mut self) { self.pending = true; }

    /// Consume the pending mark. Returns true when a repaint is due.
    #[inline]
    pub fn take(&mut self) -> bool {
        let pending = self.pending;
        self.pending = false;
        pending
    }

    /// Whether a repaint is pending, without consuming the mark.
    #[inline]
    pub const fn is_pending(&self) -> bool { self.pending }
}

impl Default for RepaintState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_initial_paint_pending() {
        let state = RepaintState::new();
        assert!(state.is_pending());
    }

    #[test]
    fn test_take_consumes_mark() {
        let mut state = RepaintState::new();
        assert!(state.take());
        assert!(!state.take());
        assert!(!state.is_pending());
    }

    #[test]
    fn test_invalidate_rearms() {
        let mut state = RepaintState::new();
        state.take();
        state.invalidate_all();
        assert!(state.is_pending());
        assert!(state.take());
    }

    #[test]
    fn test_invalidations_coalesce() {
        let mut state = RepaintState::new();
        state.take();
        state.invalidate_all();
        state.invalidate_all();
        assert!(state.take());
        assert!(!state.take());
    }
}

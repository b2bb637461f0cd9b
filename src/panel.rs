//! The panel controller: one build pass, then a repeating toggle pass.
//!
//! # Toggle State Machine
//!
//! The controller cycles between exactly two states, [`TogglePhase::Even`]
//! and [`TogglePhase::Odd`]. The post-build state is `Even`: the palette and
//! glyph anchor match what [`Panel::build`] set directly, without going
//! through a toggle. Every [`Panel::toggle`] call flips the phase
//! unconditionally, then in order:
//!
//! 1. applies the new phase's palette to the shared style table
//! 2. re-anchors the glyph (even: top-center, odd: bottom-center)
//! 3. marks a whole-scene repaint pending
//! 4. increments the update counter by one
//! 5. re-derives the counter label text
//!
//! There are no failure states and no terminal state; the cycle runs until
//! the process is terminated externally.

use crate::config::{CELL_SIZE, GRID_COLS, GRID_ROWS};
use crate::counter::{LabelText, UpdateCounter};
use crate::glyph::{Glyph, GlyphAnchor};
use crate::grid::Grid;
use crate::phase::TogglePhase;
use crate::render::RepaintState;
use crate::styles::StyleSet;

/// Owns the scene: style table, grid, glyph, counter, and label text.
pub struct Panel {
    styles: StyleSet,
    grid: Grid,
    glyph: Glyph,
    counter: UpdateCounter,
    label: LabelText,
    phase: TogglePhase,
    repaint: RepaintState,
}

impl Panel {
    /// The one-time build pass.
    ///
    /// Constructs the full checkerboard grid, the glyph in its top-center
    /// position, and an empty counter label. Runs exactly once at startup;
    /// everything afterwards is in-place mutation.
    pub fn build() -> Self {
        Self {
            styles: StyleSet::new(),
            grid: Grid::build(GRID_ROWS, GRID_COLS, CELL_SIZE),
            glyph: Glyph::new(),
            counter: UpdateCounter::new(),
            label: LabelText::new(),
            phase: TogglePhase::Even,
            repaint: RepaintState::new(),
        }
    }

    /// One toggle pass. Unconditional period-2 transition, driven purely by
    /// call count.
    pub fn toggle(&mut self) {
        self.phase = self.phase.next();
        self.styles.apply_palette(self.phase);
        self.glyph.set_anchor(GlyphAnchor::for_phase(self.phase));
        self.repaint.invalidate_all();
        self.counter.increment();
        self.label = self.counter.text();
    }

    /// Consume the pending repaint mark. Returns true when the scene must be
    /// redrawn.
    #[inline]
    pub fn take_repaint(&mut self) -> bool { self.repaint.take() }

    /// The shared style table.
    #[inline]
    pub const fn styles(&self) -> &StyleSet { &self.styles }

    /// The checkerboard grid.
    #[inline]
    pub const fn grid(&self) -> &Grid { &self.grid }

    /// The polyline glyph.
    #[inline]
    pub const fn glyph(&self) -> &Glyph { &self.glyph }

    /// Number of completed toggle passes.
    #[inline]
    pub const fn update_count(&self) -> u32 { self.counter.value() }

    /// Current counter label text.
    #[inline]
    pub fn label(&self) -> &str { &self.label }

    /// Current phase of the toggle cycle.
    #[inline]
    pub const fn phase(&self) -> TogglePhase { self.phase }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, CYAN, RED, YELLOW};
    use crate::styles::StyleId;

    #[test]
    fn test_build_creates_full_grid() {
        let panel = Panel::build();
        assert_eq!(panel.grid().len(), 768);
        assert_eq!(panel.update_count(), 0);
        assert_eq!(panel.phase(), TogglePhase::Even);
        assert_eq!(panel.label(), "");
    }

    #[test]
    fn test_build_leaves_initial_paint_pending() {
        let mut panel = Panel::build();
        assert!(panel.take_repaint());
        assert!(!panel.take_repaint());
    }

    #[test]
    fn test_counter_tracks_toggle_calls() {
        let mut panel = Panel::build();
        for n in 1..=10 {
            panel.toggle();
            assert_eq!(panel.update_count(), n);
        }
    }

    #[test]
    fn test_first_toggle_switches_to_odd_set() {
        let mut panel = Panel::build();
        panel.toggle();
        assert_eq!(panel.phase(), TogglePhase::Odd);
        assert_eq!(panel.styles().fill(StyleId::A), RED);
        assert_eq!(panel.styles().fill(StyleId::B), CYAN);
        assert_eq!(panel.glyph().anchor(), GlyphAnchor::BottomMid);
        assert_eq!(panel.label(), "1");
    }

    #[test]
    fn test_two_toggles_round_trip() {
        let mut panel = Panel::build();
        panel.toggle();
        panel.toggle();
        assert_eq!(panel.phase(), TogglePhase::Even);
        assert_eq!(panel.styles().fill(StyleId::A), BLUE);
        assert_eq!(panel.styles().fill(StyleId::B), YELLOW);
        assert_eq!(panel.glyph().anchor(), GlyphAnchor::TopMid);
    }

    #[test]
    fn test_anchor_sequence() {
        let mut panel = Panel::build();
        assert_eq!(panel.glyph().anchor(), GlyphAnchor::TopMid);
        panel.toggle();
        assert_eq!(panel.glyph().anchor(), GlyphAnchor::BottomMid);
        panel.toggle();
        assert_eq!(panel.glyph().anchor(), GlyphAnchor::TopMid);
    }

    #[test]
    fn test_every_toggle_invalidates() {
        let mut panel = Panel::build();
        panel.take_repaint();
        for _ in 0..5 {
            panel.toggle();
            assert!(panel.take_repaint());
            assert!(!panel.take_repaint());
        }
    }

    #[test]
    fn test_phase_stays_consistent_with_counter() {
        let mut panel = Panel::build();
        for _ in 0..100 {
            panel.toggle();
            assert_eq!(panel.phase(), TogglePhase::from_count(panel.update_count()));
        }
    }

    #[test]
    fn test_thousand_toggles() {
        let mut panel = Panel::build();
        for _ in 0..1000 {
            panel.toggle();
        }
        assert_eq!(panel.update_count(), 1000);
        assert_eq!(panel.label(), "1000");
        assert_eq!(panel.phase(), TogglePhase::Even);
        assert_eq!(panel.styles().fill(StyleId::A), BLUE);
        assert_eq!(panel.glyph().anchor(), GlyphAnchor::TopMid);
    }
}

//! Embassy tasks driving the panel.
//!
//! - [`toggle_task`]: the periodic driver; one serialized toggle pass per
//!   interval
//! - [`repaint_task`]: waits for the repaint signal, redraws the scene,
//!   flushes the framebuffer
//!
//! The two tasks share the panel through an async mutex: the toggle task is
//! the only writer, the repaint task the only reader, and the lock keeps the
//! toggle transition and a scene redraw from interleaving.

pub mod repaint;
pub mod toggle;

pub use repaint::repaint_task;
pub use toggle::toggle_task;

use chequer_pico2::panel::Panel;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

/// Panel shared between the toggle task (writer) and the repaint task
/// (reader).
pub type SharedPanel = Mutex<CriticalSectionRawMutex, Panel>;

/// Fire-and-forget whole-scene repaint signal.
///
/// Invalidations arriving while a redraw/flush is in progress coalesce into
/// a single signal; the repaint task always renders the latest completed
/// state.
pub static REPAINT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

//! The periodic toggle task - the single driver of the panel state machine.

use chequer_pico2::config::{TICK_LOG_INTERVAL, TOGGLE_INTERVAL_MS};
use defmt::info;
use embassy_time::Timer;

use crate::tasks::{REPAINT, SharedPanel};

/// Invoke one toggle pass every [`TOGGLE_INTERVAL_MS`], forever.
///
/// Passes are serialized by construction: the next delay only starts after
/// the current pass, including its repaint signal, has completed. No second
/// writer exists, so the style records are never mutated concurrently.
#[embassy_executor::task]
pub async fn toggle_task(panel: &'static SharedPanel) {
    info!("Toggle task started");

    loop {
        Timer::after_millis(TOGGLE_INTERVAL_MS).await;

        let repaint = {
            let mut panel = panel.lock().await;
            panel.toggle();

            if panel.update_count().is_multiple_of(TICK_LOG_INTERVAL) {
                info!("update count: {}", panel.update_count());
            }

            panel.take_repaint()
        };

        // Signal outside the lock: fire-and-forget, the driver never blocks
        // on the repaint pass
        if repaint {
            REPAINT.signal(());
        }
    }
}

//! The repaint task - redraws the scene and flushes it to the display.

use chequer_pico2::widgets::draw_panel;
use defmt::info;

use crate::st7789::{Framebuffer, St7789};
use crate::tasks::{REPAINT, SharedPanel};

/// Wait for a repaint signal, redraw every object from current style data,
/// then flush the framebuffer over SPI.
///
/// This is global repaint-all: no per-object dirty tracking, every cell is
/// repainted from the two shared style records each time.
#[embassy_executor::task]
pub async fn repaint_task(
    panel: &'static SharedPanel,
    framebuffer: &'static mut Framebuffer,
    driver: &'static mut St7789<'static>,
) {
    info!("Repaint task started");

    loop {
        REPAINT.wait().await;

        {
            let panel = panel.lock().await;
            draw_panel(framebuffer, &panel);
        }

        // Lock released before the DMA transfer; the toggle task never waits
        // on SPI
        driver.flush(framebuffer.data()).await;
    }
}

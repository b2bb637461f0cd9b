//! Chequerboard display demo firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Drives the Pimoroni PIM715 Display Pack 2.8": a 24x32 checkerboard of
//! 10x10 cells tiling the screen, a zig-zag polyline glyph, and an update
//! counter label. A 10 ms periodic task flips the cell palette (blue/yellow
//! vs red/cyan) and the glyph anchor (top vs bottom); a repaint task redraws
//! the scene from the two shared style records and flushes it via SPI + DMA.
//!
//! # Task Structure
//!
//! - `toggle_task`: the periodic driver; serialized, non-overlapping passes
//! - `repaint_task`: waits for the repaint signal, redraws, flushes
//! - main: one-time init and build, then yields forever in 1 s sleeps with a
//!   heartbeat LED
//!
//! The library half of this crate (`chequer_pico2`) holds all the toggling
//! logic and is testable on the host; this binary only adds hardware
//! bring-up.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the firmware binary (not testable on host)
#[cfg(target_arch = "arm")]
mod st7789;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"chequer-panel"),
    embassy_rp::binary_info::rp_program_description!(c"Chequerboard toggle demo on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) {
    use chequer_pico2::config::IDLE_SLEEP_SECS;
    use chequer_pico2::panel::Panel;
    use defmt::info;
    use embassy_rp::gpio::{Level, Output};
    use embassy_rp::spi::Spi;
    use embassy_sync::mutex::Mutex;
    use embassy_time::Timer;
    use static_cell::{ConstStaticCell, StaticCell};

    use crate::st7789::{Framebuffer, St7789, spi_config};
    use crate::tasks::{REPAINT, SharedPanel, repaint_task, toggle_task};

    info!("Chequer panel starting...");
    let p = embassy_rp::init(Default::default());

    // Heartbeat LED (PIM715 RGB LED, blue channel; active-low)
    let mut led_b = Output::new(p.PIN_28, Level::High);

    // Display pins: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut _backlight = Output::new(p.PIN_20, Level::High);

    // Async SPI with DMA (TX-only, the display has no MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config());

    let mut driver = St7789::new(spi, dc, cs);
    driver.init().await;
    info!("Display initialized");

    // Framebuffer storage is const-initialized in place; 150 KB never
    // passes through the stack
    static FRAMEBUFFER: ConstStaticCell<Framebuffer> = ConstStaticCell::new(Framebuffer::new());
    let framebuffer = FRAMEBUFFER.take();

    static DRIVER: StaticCell<St7789<'static>> = StaticCell::new();
    let driver = DRIVER.init(driver);

    // The one-time build pass: full grid, glyph top-center, counter at 0
    let built = Panel::build();
    info!("Scene built: {} cells", built.grid().len());

    static PANEL: StaticCell<SharedPanel> = StaticCell::new();
    let panel = PANEL.init(Mutex::new(built));

    spawner.spawn(repaint_task(panel, framebuffer, driver)).unwrap();
    spawner.spawn(toggle_task(panel)).unwrap();

    // The build pass leaves a repaint pending; paint it before the first
    // toggle lands
    {
        let mut panel = panel.lock().await;
        if panel.take_repaint() {
            REPAINT.signal(());
        }
    }

    // Lifecycle shim: yield forever in 1 s increments
    loop {
        Timer::after_secs(IDLE_SLEEP_SECS).await;
        led_b.toggle();
    }
}

/// Host stub so `cargo check` and `cargo test` work without the ARM
/// toolchain; the firmware entry point above is ARM-only.
#[cfg(not(target_arch = "arm"))]
fn main() {}

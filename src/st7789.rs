//! Async ST7789 display driver for embassy-rp.
//!
//! Single framebuffer (150 KB for 320x240 RGB565) plus DMA flush. A full
//! flush at 62.5 MHz SPI takes roughly 20 ms, longer than one toggle
//! interval; the repaint signal coalesces while a flush is in progress, so
//! the panel redraws at the flush rate and the toggle cadence is unaffected.
//!
//! The driver is split into two components:
//! - [`Framebuffer`]: owns the pixel storage, implements `DrawTarget`
//! - [`St7789`]: owns SPI and control pins, handles init and async flush

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Config as SpiConfig, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Display dimensions (landscape mode after 90° rotation).
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// SPI configuration for the ST7789 (62.5 MHz, the panel maximum).
pub fn spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}

/// RGB565 framebuffer with big-endian pixel layout, as the ST7789 expects.
pub struct Framebuffer {
    data: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    /// Zeroed framebuffer. `const` so the storage can live in a
    /// const-initialized static without passing through the stack.
    pub const fn new() -> Self { Self { data: [0; BUFFER_SIZE] } }

    /// Raw bytes for flushing.
    #[inline]
    pub fn data(&self) -> &[u8] { &self.data }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            let raw: RawU16 = color.into();
            let bytes = raw.into_inner().to_be_bytes();
            self.data[idx] = bytes[0];
            self.data[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.size == Size::zero() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        let x_start = drawable.top_left.x as usize;
        let width = drawable.size.width as usize;

        for y in drawable.rows() {
            let row_start = (y as usize * WIDTH + x_start) * 2;
            for pixel in self.data[row_start..row_start + width * 2].chunks_exact_mut(2) {
                pixel.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        for pixel in self.data.chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
        Ok(())
    }
}

/// ST7789 driver - owns SPI and control pins.
pub struct St7789<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789<'d> {
    /// Create a driver from SPI and control pins.
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the display hardware.
    ///
    /// Configures RGB565 pixel format, landscape rotation, and inversion
    /// (required for the PIM715 panel), then pre-sets the drawing window to
    /// the full screen so flushes need no per-frame window setup.
    pub async fn init(&mut self) {
        self.command(SWRESET, &[]).await;
        Timer::after_millis(150).await;

        self.command(SLPOUT, &[]).await;
        Timer::after_millis(10).await;

        // RGB565 (16-bit)
        self.command(COLMOD, &[0x55]).await;

        // 90° rotation: row/col exchange + mirror X
        self.command(MADCTL, &[MADCTL_MV | MADCTL_MX]).await;

        self.command(INVON, &[]).await;
        self.command(NORON, &[]).await;
        self.command(DISPON, &[]).await;
        Timer::after_millis(10).await;

        self.set_window(0, 0, WIDTH as u16, HEIGHT as u16).await;
    }

    /// Send a command byte followed by its data bytes, if any.
    async fn command(
        &mut self,
        cmd: u8,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        if !data.is_empty() {
            self.dc.set_high();
            self.spi.write(data).await.ok();
        }
        self.cs.set_high();
    }

    /// Set the drawing window.
    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;
        self.command(CASET, &[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])
            .await;
        self.command(RASET, &[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Flush a framebuffer to the display via async DMA transfer.
    pub async fn flush(
        &mut self,
        buffer: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        // Blocking write for the single command byte (faster than DMA setup)
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }
}

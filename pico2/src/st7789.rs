//! ST7789 panel on SPI0, written with async DMA.
//!
//! The panel's address window is set to the whole screen once at init, so
//! [`Panel::present`] only has to send `RAMWR` followed by the frame.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Async, Spi};
use embassy_time::Timer;
use station_pico2::config::DISPLAY_SPI_FREQUENCY_HZ;
use station_pico2::framebuffer::{FRAME_BYTES, Frame, HEIGHT, WIDTH};
use static_cell::ConstStaticCell;

static FRAME_MEMORY: ConstStaticCell<[u8; FRAME_BYTES]> = ConstStaticCell::new([0; FRAME_BYTES]);

/// The single frame buffer. Panics if taken twice.
pub fn take_frame() -> Frame<'static> { Frame::new(FRAME_MEMORY.take()) }

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

const LAST_COLUMN: [u8; 2] = ((WIDTH - 1) as u16).to_be_bytes();
const LAST_ROW: [u8; 2] = ((HEIGHT - 1) as u16).to_be_bytes();

/// Power-up sequence: command, parameters, settle time in milliseconds.
const INIT_SEQUENCE: &[(u8, &[u8], u64)] = &[
    (SWRESET, &[], 150),
    (SLPOUT, &[], 10),
    // 16 bits per pixel
    (COLMOD, &[0x55], 0),
    // Rows top to bottom, RGB order
    (MADCTL, &[0x00], 0),
    // IPS modules show inverted colors without this
    (INVON, &[], 10),
    (NORON, &[], 10),
    (DISPON, &[], 10),
    (CASET, &[0, 0, LAST_COLUMN[0], LAST_COLUMN[1]], 0),
    (RASET, &[0, 0, LAST_ROW[0], LAST_ROW[1]], 0),
];

/// SPI mode 0 at the panel's maximum clock.
pub fn spi_config() -> spi::Config {
    let mut config = spi::Config::default();
    config.frequency = DISPLAY_SPI_FREQUENCY_HZ;
    config
}

pub struct Panel<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> Panel<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    pub async fn init(&mut self) {
        for &(command, params, settle_ms) in INIT_SEQUENCE {
            self.command(command, params).await;
            if settle_ms > 0 {
                Timer::after_millis(settle_ms).await;
            }
        }
    }

    /// Send one command and its parameters in a single chip-select cycle.
    async fn command(
        &mut self,
        command: u8,
        params: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.blocking_write(&[command]).ok();
        if !params.is_empty() {
            self.dc.set_high();
            self.spi.write(params).await.ok();
        }
        self.cs.set_high();
    }

    /// Send a finished frame to the panel.
    pub async fn present(
        &mut self,
        frame: &Frame<'_>,
    ) {
        self.command(RAMWR, frame.as_bytes()).await;
    }
}

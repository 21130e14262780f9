//! Gesture Weather Station Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Cycles a 240x240 ST7789 panel through clock, temperature, humidity,
//! pressure and light screens. Swipes on the PAJ7620 move between screens;
//! otherwise each screen advances on its own after its dwell time.
//!
//! # Architecture
//!
//! One cooperative loop on the embassy executor:
//! 1. Poll the gesture sensor and the tick counter
//! 2. Step the [`ScreenCycle`]
//! 3. On a change: blank the panel, pause, refresh readings, draw, flush
//!
//! # Gestures
//!
//! - **Right swipe**: Next screen
//! - **Left swipe**: Previous screen

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod inputs;
mod sensors;
mod st7789;

use core::cell::RefCell;

use defmt::{Debug2Format, error, info};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::Spi;
use embassy_time::{Delay, Timer};
use embedded_graphics::prelude::*;
use embedded_hal_bus::i2c::RefCellDevice;
use station_common::colors::BLACK;
use station_common::config::{BLACKOUT_MS, BOOT_STATUS_PAUSE_MS, BOOT_WELCOME_PAUSE_MS};
use station_common::screens::{BootStatus, draw_boot_status, draw_screen, draw_welcome};
use station_common::{DwellConfig, ScreenCycle, SensorSnapshot, TickSource};
use station_pico2::config::{GESTURE_ORIENTATION, I2C_FREQUENCY_HZ, POLL_INTERVAL_MS};
use station_pico2::Paj7620;
use {defmt_rtt as _, panic_probe as _};

use crate::inputs::{EmbassyTicks, GestureSensor};
use crate::sensors::{LightSensor, SensorHub, probe_rtc};
use crate::st7789::{Panel, spi_config, take_frame};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-station"),
    embassy_rp::binary_info::rp_program_description!(c"Gesture-driven weather station on ST7789"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Park the firmware after a fatal init failure. The panel keeps the last frame.
async fn halt() -> ! {
    loop {
        Timer::after_secs(60).await;
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Weather station starting...");
    let p = embassy_rp::init(Default::default());

    // Initialize display pins
    // CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // Async SPI with DMA (TX-only, display doesn't need MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config());

    let mut panel = Panel::new(spi, dc, cs);
    panel.init().await;

    let mut frame = take_frame();
    frame.clear(BLACK).ok();
    panel.present(&frame).await;
    info!("Display initialized");

    // Shared I2C0: SDA=4, SCL=5
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c_bus = RefCell::new(I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config));

    // --- Required sensors: halt if either is missing ---
    // BME280 has SDO pulled high (secondary address 0x77)
    let mut bme280 = bme280::i2c::BME280::new_secondary(RefCellDevice::new(&i2c_bus));
    if let Err(e) = bme280.init(&mut Delay) {
        error!("BME280 init failed, halting: {}", Debug2Format(&e));
        draw_boot_status(&mut frame, 0, BootStatus::SensorsFailed);
        panel.present(&frame).await;
        halt().await;
    }
    info!("BME280 initialized");

    let mut paj7620 = Paj7620::new(RefCellDevice::new(&i2c_bus)).with_orientation(GESTURE_ORIENTATION);
    if let Err(e) = paj7620.init(&mut Delay) {
        error!("PAJ7620 init failed, halting: {}", Debug2Format(&e));
        draw_boot_status(&mut frame, 0, BootStatus::SensorsFailed);
        panel.present(&frame).await;
        halt().await;
    }
    info!("PAJ7620 initialized");

    draw_boot_status(&mut frame, 0, BootStatus::SensorsOk);
    panel.present(&frame).await;

    // --- Optional collaborators ---
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let light = LightSensor::new(adc, Channel::new_pin(p.PIN_26, Pull::None));

    let rtc = probe_rtc(ds323x::Ds323x::new_ds3231(RefCellDevice::new(&i2c_bus)));
    let clock_status = if rtc.is_some() {
        BootStatus::ClockOk
    } else {
        BootStatus::ClockUnavailable
    };
    info!("Clock: {}", clock_status.text());
    draw_boot_status(&mut frame, 1, clock_status);
    panel.present(&frame).await;

    let mut sensors = SensorHub::new(bme280, light, rtc);
    let mut gestures = GestureSensor::new(paj7620);
    let ticks = EmbassyTicks;

    Timer::after_millis(BOOT_STATUS_PAUSE_MS).await;
    draw_welcome(&mut frame);
    panel.present(&frame).await;
    Timer::after_millis(BOOT_WELCOME_PAUSE_MS).await;

    // --- Screen carousel ---
    let mut snapshot = SensorSnapshot::new();
    sensors.refresh(&mut snapshot);

    let mut cycle = ScreenCycle::new(ticks.now(), DwellConfig::default());
    draw_screen(&mut frame, cycle.current(), &snapshot);
    panel.present(&frame).await;
    info!("Carousel started on {} (clock: {})", cycle.current().label(), sensors.has_clock());

    loop {
        if let Some(screen) = cycle.poll(&mut gestures, &ticks) {
            info!("Screen: {}", screen.label());

            frame.clear(BLACK).ok();
            panel.present(&frame).await;
            Timer::after_millis(BLACKOUT_MS).await;

            sensors.refresh(&mut snapshot);
            draw_screen(&mut frame, screen, &snapshot);
            panel.present(&frame).await;
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

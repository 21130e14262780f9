//! Board configuration for the Pico 2 weather station.
//!
//! # Wiring
//!
//! | Part | Bus | Pins |
//! |---|---|---|
//! | ST7789 240x240 | SPI0 | CLK GPIO18, MOSI GPIO19, CS GPIO17, DC GPIO16, BL GPIO20 |
//! | BME280 (0x77), PAJ7620U2 (0x73), DS3231 (0x68) | I2C0 | SDA GPIO4, SCL GPIO5 |
//! | Photoresistor divider | ADC0 | GPIO26 |
//!
//! Pin assignments are documented here and bound by peripheral name in
//! `main.rs`, since embassy pins are distinct types.

pub use station_common::readings::ADC_FULL_SCALE;

use crate::paj7620::Orientation;

// =============================================================================
// I2C Bus
// =============================================================================

/// Shared I2C bus clock. The PAJ7620U2 is specified up to 400 kHz; 100 kHz
/// keeps the long sensor wires reliable.
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// PAJ7620U2 fixed address.
pub const PAJ7620_ADDRESS: u8 = 0x73;

/// Mounting of the gesture board: a Grove-style breakout, label upright.
pub const GESTURE_ORIENTATION: Orientation = Orientation::Rotated90;

// =============================================================================
// Display
// =============================================================================

/// SPI clock for the ST7789 (datasheet maximum is 62.5 MHz).
pub const DISPLAY_SPI_FREQUENCY_HZ: u32 = 62_500_000;

// =============================================================================
// Main Loop
// =============================================================================

/// Pause between loop iterations, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 20;


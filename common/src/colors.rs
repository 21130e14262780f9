//! Color constants for the station screens.
//!
//! Rgb565 packs 5 bits red, 6 bits green and 5 bits blue, which is the native
//! pixel format of the ST7789 panel, so no conversion happens at flush time.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Background of every screen.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Reading text and page indicator dots.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Thermometer icon.
pub const RED: Rgb565 = Rgb565::RED;

/// Humidity droplet icon.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Sun icon on the light screen.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Home icon and the boot welcome banner.
pub const PINK: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Pressure gauge icon. RGB565: (20, 10, 5), roughly #A52A2A.
pub const BROWN: Rgb565 = Rgb565::new(20, 10, 5);

/// Dim text for unit suffixes and placeholders.
/// RGB565: (16, 32, 16), about 50% brightness.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Boot status line when a required sensor failed.
pub const ALERT: Rgb565 = Rgb565::new(31, 8, 0);

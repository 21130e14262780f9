//! Compile-time configuration shared by the firmware and the simulator.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Positions used by the screen renderers are `const`, so nothing is
//! recomputed when a screen is drawn.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 240x240 panel).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Carousel Timing
// =============================================================================

/// Dwell time of every non-home screen, in milliseconds.
pub const SCREEN_DWELL_MS: u32 = 5_000;

/// The home screen stays this many times longer than the others.
pub const HOME_DWELL_FACTOR: u32 = 3;

/// Black pause between clearing the panel and drawing the next screen.
pub const BLACKOUT_MS: u64 = 200;

// =============================================================================
// Boot Sequence Timing
// =============================================================================

/// Pause after the sensor/clock status lines before "Welcome" appears.
pub const BOOT_STATUS_PAUSE_MS: u64 = 2_000;

/// How long the welcome banner stays before the first screen.
pub const BOOT_WELCOME_PAUSE_MS: u64 = 3_000;

// =============================================================================
// Wall Clock
// =============================================================================

/// Offset of local standard time from UTC, in seconds (UTC+1).
pub const GMT_OFFSET_SECS: i32 = 3_600;

/// Additional daylight-saving offset, in seconds.
pub const DAYLIGHT_OFFSET_SECS: i32 = 0;

/// Total offset applied when converting UTC to local time.
pub const LOCAL_OFFSET_SECS: i32 = GMT_OFFSET_SECS + DAYLIGHT_OFFSET_SECS;

// =============================================================================
// Screen Layout
// =============================================================================

/// Icon bounding box edge, in pixels.
pub const ICON_SIZE: u32 = 64;

/// Top-left corner of the icon on sensor screens.
pub const ICON_X: i32 = 8;
pub const ICON_Y: i32 = 10;

/// Baseline of the large primary reading, right of the icon.
pub const PRIMARY_X: i32 = ICON_X + ICON_SIZE as i32 + 12;
pub const PRIMARY_Y: i32 = ICON_Y + (ICON_SIZE / 2) as i32 + 10;

/// Left edge and baselines of the two secondary reading lines.
pub const SECONDARY_X: i32 = 12;
pub const SECONDARY_Y1: i32 = ICON_Y + ICON_SIZE as i32 + 40;
pub const SECONDARY_Y2: i32 = SECONDARY_Y1 + 35;

/// Horizontal centre of the panel.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Page indicator dots: centres along one row near the bottom edge.
pub const INDICATOR_XS: [i32; 5] = [80, 100, 120, 140, 160];
pub const INDICATOR_Y: i32 = 215;
pub const INDICATOR_RADIUS: u32 = 2;

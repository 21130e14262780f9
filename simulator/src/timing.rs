//! `Duration` forms of the shared millisecond constants, plus the simulated
//! tick origin.

use std::time::Duration;

use station_common::config::{BLACKOUT_MS, BOOT_STATUS_PAUSE_MS, BOOT_WELCOME_PAUSE_MS};

/// Loop period, matching the firmware poll interval.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Black pause before a new screen is drawn.
pub const BLACKOUT: Duration = Duration::from_millis(BLACKOUT_MS);

/// Boot status lines stay this long before the welcome banner.
pub const BOOT_STATUS_PAUSE: Duration = Duration::from_millis(BOOT_STATUS_PAUSE_MS);

/// Welcome banner duration.
pub const BOOT_WELCOME_PAUSE: Duration = Duration::from_millis(BOOT_WELCOME_PAUSE_MS);

/// Simulated uptime at start: 30 s before the 32-bit tick wraps, so every
/// run crosses the wrap point while sitting on the home screen.
pub const TICK_START_MS: u32 = u32::MAX - 30_000;

//! Boot screens: console-style status lines, then the welcome banner.
//!
//! # Usage
//!
//! The firmware draws one status line per initialised collaborator, flushes
//! after each, pauses, then shows [`draw_welcome`]:
//!
//! ```ignore
//! draw_boot_status(&mut display, 0, BootStatus::SensorsOk);
//! draw_boot_status(&mut display, 1, BootStatus::ClockOk);
//! display.flush().await;
//! Timer::after_millis(BOOT_STATUS_PAUSE_MS).await;
//! draw_welcome(&mut display);
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::{CENTER_X, SCREEN_HEIGHT};
use crate::styles::{CENTERED, LEFT_ALIGNED, STATUS_ALERT_STYLE, STATUS_STYLE, WELCOME_STYLE};

const CONSOLE_X: i32 = 10;
const CONSOLE_START_Y: i32 = 20;
const CONSOLE_LINE_HEIGHT: i32 = 18;

const WELCOME_TEXT: &str = "Welcome";
const WELCOME_Y: i32 = (SCREEN_HEIGHT / 2) as i32 + 8;

/// Outcome of one boot step, as shown on the status console.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootStatus {
    /// Environmental and gesture sensors answered.
    SensorsOk,
    /// A required sensor did not answer; the device halts.
    SensorsFailed,
    /// Wall clock is available.
    ClockOk,
    /// No wall clock; the clock screen shows placeholders.
    ClockUnavailable,
}

impl BootStatus {
    pub const fn text(self) -> &'static str {
        match self {
            Self::SensorsOk => "Sensors: OK.",
            Self::SensorsFailed => "Sensors: FAILED",
            Self::ClockOk => "Clock: OK.",
            Self::ClockUnavailable => "Clock: --",
        }
    }

    /// Whether this status stops the boot sequence.
    pub const fn is_fatal(self) -> bool { matches!(self, Self::SensorsFailed) }
}

/// Draw one status line on console row `line` (0 is the top row).
pub fn draw_boot_status<D>(
    display: &mut D,
    line: u8,
    status: BootStatus,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = if status.is_fatal() { STATUS_ALERT_STYLE } else { STATUS_STYLE };
    let y = CONSOLE_START_Y + i32::from(line) * CONSOLE_LINE_HEIGHT;
    Text::with_text_style(status.text(), Point::new(CONSOLE_X, y), style, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Clear the panel and draw the large pink welcome banner.
pub fn draw_welcome<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    Text::with_text_style(WELCOME_TEXT, Point::new(CENTER_X, WELCOME_Y), WELCOME_STYLE, CENTERED)
        .draw(display)
        .ok();
}

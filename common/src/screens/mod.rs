//! Screen renderers shared by the firmware and the simulator.
//!
//! # Screens
//!
//! ```text
//! ┌────────────────────────────┐
//! │ [icon]   23.4°C            │  Icon + primary reading
//! │                            │
//! │ Hum:  45.6%                │  Secondary line 1
//! │ Pres: 1013.2hPa            │  Secondary line 2
//! │                            │
//! │       ● ○ ○ ○ ○            │  Page indicator
//! └────────────────────────────┘
//! ```
//!
//! Renderers are stateless: they read a [`SensorSnapshot`] and draw a full
//! frame. [`draw_screen`] is the only entry point the loop needs.
//!
//! # Boot Sequence
//!
//! [`boot`] draws the status lines and the welcome banner shown before the
//! first screen.

pub mod boot;
mod clock;
mod readings;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;

pub use boot::{BootStatus, draw_boot_status, draw_welcome};
pub use clock::{clock_lines, draw_clock};
pub use readings::{draw_humidity, draw_light, draw_pressure, draw_temperature, format_reading};

use crate::colors::{BLACK, WHITE};
use crate::config::{
    ICON_X,
    ICON_Y,
    INDICATOR_RADIUS,
    INDICATOR_XS,
    INDICATOR_Y,
    PRIMARY_X,
    PRIMARY_Y,
    SECONDARY_X,
    SECONDARY_Y1,
    SECONDARY_Y2,
};
use crate::icons::{Icon, draw_icon};
use crate::readings::SensorSnapshot;
use crate::screen::Screen;
use crate::styles::{LEFT_ALIGNED, SECONDARY_STYLE, UNIT_STYLE, VALUE_STYLE};

/// Draw a complete frame for `screen` from the last-known readings.
pub fn draw_screen<D>(
    display: &mut D,
    screen: Screen,
    snapshot: &SensorSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    let icon = Icon::for_screen(screen);
    draw_icon(display, icon, Point::new(ICON_X, ICON_Y), icon.color());

    match screen {
        Screen::Clock => draw_clock(display, snapshot.time),
        Screen::Temperature => draw_temperature(display, snapshot),
        Screen::Humidity => draw_humidity(display, snapshot),
        Screen::Pressure => draw_pressure(display, snapshot),
        Screen::Light => draw_light(display, snapshot),
    }

    draw_indicator(display, screen);
}

/// Draw the five-dot page indicator; the active screen's dot is filled.
pub fn draw_indicator<D>(
    display: &mut D,
    active: Screen,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = INDICATOR_RADIUS * 2 + 1;
    for (screen, x) in Screen::ALL.iter().zip(INDICATOR_XS) {
        let style = if *screen == active {
            PrimitiveStyle::with_fill(WHITE)
        } else {
            PrimitiveStyle::with_stroke(WHITE, 1)
        };
        Circle::with_center(Point::new(x, INDICATOR_Y), diameter)
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Shared Layout Helpers
// =============================================================================

/// Draw the large primary reading with a smaller unit suffix after it.
fn draw_primary<D>(
    display: &mut D,
    value: &str,
    unit: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let next = Text::with_text_style(value, Point::new(PRIMARY_X, PRIMARY_Y), VALUE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .unwrap_or(Point::new(PRIMARY_X, PRIMARY_Y));
    if !unit.is_empty() {
        Text::with_text_style(unit, next, UNIT_STYLE, LEFT_ALIGNED).draw(display).ok();
    }
}

/// Draw one of the two secondary lines (`row` 0 or 1) below the icon.
fn draw_secondary<D>(
    display: &mut D,
    row: u8,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let y = if row == 0 { SECONDARY_Y1 } else { SECONDARY_Y2 };
    Text::with_text_style(text, Point::new(SECONDARY_X, y), SECONDARY_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

// =============================================================================
// Test Support
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::capture::FrameCapture;
    use super::*;
    use crate::calendar::CivilTime;
    use crate::colors::{BROWN, CYAN, PINK, RED, YELLOW};
    use crate::readings::Environment;

    fn full_snapshot() -> SensorSnapshot {
        let mut snap = SensorSnapshot::new();
        snap.record_environment(Some(Environment::from_pascals(23.4, 45.6, 101_320.0)));
        snap.record_light(Some(57));
        snap.record_time(CivilTime::new(2026, 10, 18, 14, 5, 0));
        snap
    }

    #[test]
    fn test_indicator_marks_active_screen() {
        for active in Screen::ALL {
            let mut frame = FrameCapture::new();
            draw_indicator(&mut frame, active);
            for (screen, x) in Screen::ALL.iter().zip(INDICATOR_XS) {
                // Outline ring is lit either way, centre only when filled
                assert_eq!(frame.pixel(x + INDICATOR_RADIUS as i32, INDICATOR_Y), WHITE);
                let centre = frame.pixel(x, INDICATOR_Y);
                if *screen == active {
                    assert_eq!(centre, WHITE);
                } else {
                    assert_eq!(centre, BLACK);
                }
            }
        }
    }

    #[test]
    fn test_every_screen_stays_inside_panel() {
        for snap in [full_snapshot(), SensorSnapshot::new()] {
            for screen in Screen::ALL {
                let mut frame = FrameCapture::new();
                draw_screen(&mut frame, screen, &snap);
                assert_eq!(frame.out_of_bounds, 0, "{screen:?} drew off-panel");
            }
        }
    }

    #[test]
    fn test_draw_screen_clears_previous_frame() {
        let mut frame = FrameCapture::filled(RED);
        draw_screen(&mut frame, Screen::Light, &full_snapshot());
        assert_eq!(frame.pixel(239, 0), BLACK);
        assert_eq!(frame.pixel(0, 239), BLACK);
    }

    #[test]
    fn test_icon_colors_per_screen() {
        let cases = [
            (Screen::Clock, PINK, (32, 20)),
            (Screen::Temperature, RED, (32, 50)),
            (Screen::Humidity, CYAN, (32, 42)),
            (Screen::Pressure, BROWN, (32, 34)),
            (Screen::Light, YELLOW, (32, 32)),
        ];
        for (screen, color, (dx, dy)) in cases {
            let mut frame = FrameCapture::new();
            draw_screen(&mut frame, screen, &full_snapshot());
            assert_eq!(frame.pixel(ICON_X + dx, ICON_Y + dy), color, "{screen:?}");
        }
    }

    #[test]
    fn test_primary_reading_is_drawn() {
        let mut frame = FrameCapture::new();
        draw_screen(&mut frame, Screen::Temperature, &full_snapshot());
        let lit = frame.count_in(Point::new(PRIMARY_X, PRIMARY_Y - 24), Size::new(100, 30), WHITE);
        assert!(lit > 0);
    }

    #[test]
    fn test_secondary_lines_are_drawn() {
        let mut frame = FrameCapture::new();
        draw_screen(&mut frame, Screen::Humidity, &full_snapshot());
        for y in [SECONDARY_Y1, SECONDARY_Y2] {
            let lit = frame.count_in(Point::new(SECONDARY_X, y - 16), Size::new(150, 20), WHITE);
            assert!(lit > 0, "no text on baseline {y}");
        }
    }
}

//! Home screen: wall-clock time and date.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::draw_primary;
use crate::calendar::CivilTime;
use crate::config::{CENTER_X, SECONDARY_Y1};
use crate::styles::{CENTERED, DATE_STYLE};

const TIME_PLACEHOLDER: &str = "--:--";
const DATE_PLACEHOLDER: &str = "Time unavailable";

/// Text of the two clock lines, with placeholders while no time is known.
pub fn clock_lines(time: Option<CivilTime>) -> (String<5>, String<20>) {
    match time {
        Some(t) => (t.hh_mm(), t.date_line()),
        None => {
            let mut hh_mm = String::new();
            let mut date = String::new();
            // Both placeholders fit their capacity
            let _ = hh_mm.push_str(TIME_PLACEHOLDER);
            let _ = date.push_str(DATE_PLACEHOLDER);
            (hh_mm, date)
        }
    }
}

pub fn draw_clock<D>(
    display: &mut D,
    time: Option<CivilTime>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (hh_mm, date) = clock_lines(time);

    draw_primary(display, &hh_mm, "");
    Text::with_text_style(&date, Point::new(CENTER_X, SECONDARY_Y1), DATE_STYLE, CENTERED)
        .draw(display)
        .ok();
}

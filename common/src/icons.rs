//! Screen icons drawn from `embedded-graphics` primitives.
//!
//! Every icon fits a [`ICON_SIZE`] square whose top-left corner is passed in,
//! so nothing is stored as bitmap data.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle,
};

use crate::colors::{BLACK, BROWN, CYAN, PINK, RED, YELLOW};
use crate::config::ICON_SIZE;
use crate::screen::Screen;

/// Icon shown in the top-left corner of each screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    House,
    Thermometer,
    Droplet,
    Gauge,
    Sun,
}

impl Icon {
    /// Icon belonging to a screen.
    pub const fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Clock => Self::House,
            Screen::Temperature => Self::Thermometer,
            Screen::Humidity => Self::Droplet,
            Screen::Pressure => Self::Gauge,
            Screen::Light => Self::Sun,
        }
    }

    /// Color the icon is drawn in.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::House => PINK,
            Self::Thermometer => RED,
            Self::Droplet => CYAN,
            Self::Gauge => BROWN,
            Self::Sun => YELLOW,
        }
    }
}

// Sun rays as (inner, outer) offsets from the centre, clockwise from east.
const SUN_RAYS: [(i32, i32, i32, i32); 8] = [
    (19, 0, 29, 0),
    (13, 13, 21, 21),
    (0, 19, 0, 29),
    (-13, 13, -21, 21),
    (-19, 0, -29, 0),
    (-13, -13, -21, -21),
    (0, -19, 0, -29),
    (13, -13, 21, -21),
];

/// Draw `icon` with its top-left corner at `origin`.
pub fn draw_icon<D>(
    display: &mut D,
    icon: Icon,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    let stroke = PrimitiveStyle::with_stroke(color, 3);
    let at = |x: i32, y: i32| origin + Point::new(x, y);

    match icon {
        Icon::House => {
            Triangle::new(at(0, 30), at(32, 2), at(63, 30))
                .into_styled(fill)
                .draw(display)
                .ok();
            Rectangle::new(at(10, 30), Size::new(44, 32))
                .into_styled(fill)
                .draw(display)
                .ok();
            Rectangle::new(at(26, 42), Size::new(12, 20))
                .into_styled(PrimitiveStyle::with_fill(BLACK))
                .draw(display)
                .ok();
        }
        Icon::Thermometer => {
            RoundedRectangle::with_equal_corners(
                Rectangle::new(at(24, 2), Size::new(16, 44)),
                Size::new(8, 8),
            )
            .into_styled(stroke)
            .draw(display)
            .ok();
            Rectangle::new(at(30, 18), Size::new(4, 30))
                .into_styled(fill)
                .draw(display)
                .ok();
            Circle::with_center(at(32, 50), 24)
                .into_styled(fill)
                .draw(display)
                .ok();
            for y in [12, 22, 32] {
                Line::new(at(44, y), at(52, y))
                    .into_styled(PrimitiveStyle::with_stroke(color, 2))
                    .draw(display)
                    .ok();
            }
        }
        Icon::Droplet => {
            Triangle::new(at(32, 2), at(13, 38), at(51, 38))
                .into_styled(fill)
                .draw(display)
                .ok();
            Circle::new(at(12, 22), 40)
                .into_styled(fill)
                .draw(display)
                .ok();
        }
        Icon::Gauge => {
            Arc::new(at(4, 6), 56, 150.0.deg(), 240.0.deg())
                .into_styled(stroke)
                .draw(display)
                .ok();
            Line::new(at(32, 34), at(48, 18))
                .into_styled(PrimitiveStyle::with_stroke(color, 3))
                .draw(display)
                .ok();
            Circle::with_center(at(32, 34), 10)
                .into_styled(fill)
                .draw(display)
                .ok();
            Rectangle::new(at(18, 54), Size::new(28, 6))
                .into_styled(fill)
                .draw(display)
                .ok();
        }
        Icon::Sun => {
            let center = at(32, 32);
            Circle::with_center(center, 28)
                .into_styled(fill)
                .draw(display)
                .ok();
            for (x0, y0, x1, y1) in SUN_RAYS {
                Line::new(center + Point::new(x0, y0), center + Point::new(x1, y1))
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
        }
    }
}

/// Bounding box of an icon drawn at `origin`.
pub const fn icon_bounds(origin: Point) -> Rectangle { Rectangle::new(origin, Size::new(ICON_SIZE, ICON_SIZE)) }

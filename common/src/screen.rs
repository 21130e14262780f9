//! Screen enumeration for the station's carousel.
//!
//! The station shows one screen at a time and cycles through them in a fixed
//! order. Index 0 is the home screen.
//!
//! # Screens
//!
//! - [`Screen::Clock`]: Time and date (home screen)
//! - [`Screen::Temperature`]: Temperature with humidity and pressure below
//! - [`Screen::Humidity`]: Humidity with temperature and pressure below
//! - [`Screen::Pressure`]: Pressure with temperature and humidity below
//! - [`Screen::Light`]: Ambient light with temperature and humidity below

/// Number of screens in the carousel.
pub const SCREEN_COUNT: usize = 5;

/// Available screens, in carousel order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Clock and calendar date.
    #[default]
    Clock,

    /// Temperature reading in degrees Celsius.
    Temperature,

    /// Relative humidity in percent.
    Humidity,

    /// Barometric pressure in hectopascals.
    Pressure,

    /// Ambient light in percent of the sensor range.
    Light,
}

impl Screen {
    /// All screens in carousel order.
    pub const ALL: [Self; SCREEN_COUNT] = [
        Self::Clock,
        Self::Temperature,
        Self::Humidity,
        Self::Pressure,
        Self::Light,
    ];

    /// Position of this screen in the carousel, in `0..SCREEN_COUNT`.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Screen at `index`, wrapping past the end.
    #[inline]
    pub const fn from_index(index: usize) -> Self { Self::ALL[index % SCREEN_COUNT] }

    /// Next screen (Light wraps to Clock).
    #[inline]
    pub const fn next(self) -> Self { Self::from_index(self.index() + 1) }

    /// Previous screen (Clock wraps to Light).
    #[inline]
    pub const fn prev(self) -> Self { Self::from_index(self.index() + SCREEN_COUNT - 1) }

    /// Short human-readable name, used in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Pressure => "Pressure",
            Self::Light => "Light",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default() {
        assert_eq!(Screen::default(), Screen::Clock);
        assert_eq!(Screen::default().index(), 0);
    }

    #[test]
    fn test_indices_match_order() {
        for (i, screen) in Screen::ALL.iter().enumerate() {
            assert_eq!(screen.index(), i);
            assert_eq!(Screen::from_index(i), *screen);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Screen::from_index(SCREEN_COUNT), Screen::Clock);
        assert_eq!(Screen::from_index(SCREEN_COUNT + 3), Screen::Pressure);
    }

    #[test]
    fn test_next_cycle() {
        assert_eq!(Screen::Clock.next(), Screen::Temperature);
        assert_eq!(Screen::Pressure.next(), Screen::Light);
        assert_eq!(Screen::Light.next(), Screen::Clock);
    }

    #[test]
    fn test_prev_cycle() {
        assert_eq!(Screen::Clock.prev(), Screen::Light);
        assert_eq!(Screen::Temperature.prev(), Screen::Clock);
        assert_eq!(Screen::Light.prev(), Screen::Pressure);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut screen = Screen::Clock;
        for _ in 0..SCREEN_COUNT {
            screen = screen.next();
        }
        assert_eq!(screen, Screen::Clock);
    }
}

//! Gesture events reported by the gesture sensor.
//!
//! The sensor recognises more gestures than the station uses. Only
//! [`Gesture::Left`] and [`Gesture::Right`] move the carousel; every other
//! variant is treated like [`Gesture::None`].

/// Direction the carousel moves in response to a gesture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Swipe {
    /// Advance to the next screen.
    Forward,
    /// Go back to the previous screen.
    Back,
}

/// A gesture read once per loop iteration.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Nothing detected since the last poll.
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    /// Hand moved towards the sensor.
    Forward,
    /// Hand moved away from the sensor.
    Backward,
    Clockwise,
    AntiClockwise,
    Wave,
}

impl Gesture {
    /// Carousel movement requested by this gesture, if any.
    #[inline]
    pub const fn swipe(self) -> Option<Swipe> {
        match self {
            Self::Right => Some(Swipe::Forward),
            Self::Left => Some(Swipe::Back),
            _ => None,
        }
    }

    /// Same gesture as seen by a sensor mounted upside down.
    pub const fn rotated_180(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Clockwise => Self::Clockwise,
            Self::AntiClockwise => Self::AntiClockwise,
            other => other,
        }
    }

    /// Same gesture as seen by a sensor turned a quarter turn clockwise:
    /// its up is the display's right.
    pub const fn rotated_90(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            other => other,
        }
    }

    /// Same gesture as seen by a sensor turned a quarter turn anticlockwise.
    pub const fn rotated_270(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
            other => other,
        }
    }
}

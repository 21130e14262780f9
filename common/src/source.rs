//! Input abstractions polled once per loop iteration.
//!
//! The firmware implements these over the gesture sensor and the embassy
//! time driver; the simulator implements them over keyboard events and
//! `std::time::Instant`; tests implement them with scripted values.

use crate::gesture::Gesture;
use crate::tick::Tick;

/// Trait for abstracting the monotonic tick counter.
pub trait TickSource {
    /// Returns the current tick.
    fn now(&self) -> Tick;
}

/// Trait for abstracting the gesture sensor.
///
/// Implementations must not block for longer than one loop iteration and
/// must report [`Gesture::None`] when the sensor cannot be read.
pub trait GestureSource {
    /// Returns the gesture detected since the previous poll.
    fn poll_gesture(&mut self) -> Gesture;
}

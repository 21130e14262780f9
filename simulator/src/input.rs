//! Keyboard stand-in for the gesture sensor, and a wall-time tick source.
//!
//! | Key | Gesture |
//! |---|---|
//! | Right | swipe right (next screen) |
//! | Left | swipe left (previous screen) |
//! | Up / Down | swipe up / down (ignored by the carousel) |
//! | W | wave (ignored by the carousel) |

use std::collections::VecDeque;
use std::time::Instant;

use embedded_graphics_simulator::sdl2::Keycode;
use station_common::{Gesture, GestureSource, Tick, TickSource};

/// Gesture a key stands for, if any.
pub fn key_gesture(keycode: Keycode) -> Option<Gesture> {
    match keycode {
        Keycode::Right => Some(Gesture::Right),
        Keycode::Left => Some(Gesture::Left),
        Keycode::Up => Some(Gesture::Up),
        Keycode::Down => Some(Gesture::Down),
        Keycode::W => Some(Gesture::Wave),
        _ => None,
    }
}

/// Key presses queued between polls; one gesture is handed out per poll,
/// like the sensor's flag register.
#[derive(Default)]
pub struct KeyboardGestures {
    pending: VecDeque<Gesture>,
}

impl KeyboardGestures {
    pub fn new() -> Self { Self::default() }

    /// Queue the gesture for `keycode`. Returns false for unmapped keys.
    pub fn press(
        &mut self,
        keycode: Keycode,
    ) -> bool {
        match key_gesture(keycode) {
            Some(gesture) => {
                self.pending.push_back(gesture);
                true
            }
            None => false,
        }
    }
}

impl GestureSource for KeyboardGestures {
    fn poll_gesture(&mut self) -> Gesture { self.pending.pop_front().unwrap_or(Gesture::None) }
}

/// Elapsed wall time as a wrapping millisecond tick, starting at `start`.
pub struct InstantTicks {
    origin: Instant,
    start: Tick,
}

impl InstantTicks {
    pub fn starting_at(start: Tick) -> Self {
        Self {
            origin: Instant::now(),
            start,
        }
    }
}

impl TickSource for InstantTicks {
    fn now(&self) -> Tick {
        let elapsed = Tick::from_uptime_millis(self.origin.elapsed().as_millis() as u64);
        self.start.wrapping_add(elapsed.as_millis())
    }
}

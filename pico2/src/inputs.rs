//! Loop inputs: the gesture sensor and the embassy time driver.

use defmt::{Debug2Format, warn};
use embassy_time::Instant;
use station_common::{Gesture, GestureSource, Tick, TickSource};
use station_pico2::Paj7620;

use crate::sensors::SharedBus;

/// PAJ7620 as a gesture source. Read errors count as no gesture.
pub struct GestureSensor<'a> {
    driver: Paj7620<SharedBus<'a>>,
}

impl<'a> GestureSensor<'a> {
    pub fn new(driver: Paj7620<SharedBus<'a>>) -> Self { Self { driver } }
}

impl GestureSource for GestureSensor<'_> {
    fn poll_gesture(&mut self) -> Gesture {
        match self.driver.read_gesture() {
            Ok(gesture) => gesture,
            Err(e) => {
                warn!("Gesture read failed: {}", Debug2Format(&e));
                Gesture::None
            }
        }
    }
}

/// Millisecond uptime from the embassy time driver, truncated to 32 bits.
pub struct EmbassyTicks;

impl TickSource for EmbassyTicks {
    fn now(&self) -> Tick { Tick::from_uptime_millis(Instant::now().as_millis()) }
}

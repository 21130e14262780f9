//! Screen carousel state machine.
//!
//! Decides, once per loop iteration, whether the visible screen changes and
//! to what. The state is the current [`Screen`] plus the tick at which it was
//! entered; the auto-advance deadline is that anchor plus the dwell time of
//! the current screen.
//!
//! # Transitions
//!
//! | Input | Result |
//! |-------|--------|
//! | [`Gesture::Right`] | next screen, dwell timer restarts |
//! | [`Gesture::Left`] | previous screen, dwell timer restarts |
//! | anything else, dwell elapsed | next screen, dwell timer restarts |
//! | anything else, dwell pending | no change |
//!
//! A swipe wins over an elapsed dwell timer in the same iteration.
//!
//! # Wraparound
//!
//! Expiry is `now - anchor > dwell` computed with wrapping subtraction, so a
//! wrap of the tick counter neither stalls the carousel nor fires it early.

use crate::config::{HOME_DWELL_FACTOR, SCREEN_DWELL_MS};
use crate::gesture::{Gesture, Swipe};
use crate::screen::Screen;
use crate::source::{GestureSource, TickSource};
use crate::tick::Tick;

// =============================================================================
// Dwell Configuration
// =============================================================================

/// How long each screen stays before the carousel advances on its own.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DwellConfig {
    /// Dwell of every non-home screen, in milliseconds.
    pub screen_ms: u32,
    /// Multiplier applied to `screen_ms` for the home screen.
    pub home_factor: u32,
    /// Screen that lingers longer than the others.
    pub home: Screen,
}

impl DwellConfig {
    /// Station defaults: 5 s per screen, the clock stays three times longer.
    pub const DEFAULT: Self = Self {
        screen_ms: SCREEN_DWELL_MS,
        home_factor: HOME_DWELL_FACTOR,
        home: Screen::Clock,
    };

    /// Dwell of the home screen, in milliseconds.
    #[inline]
    pub const fn home_ms(&self) -> u32 { self.screen_ms.saturating_mul(self.home_factor) }

    /// Dwell of `screen`, in milliseconds.
    #[inline]
    pub const fn dwell_for(
        &self,
        screen: Screen,
    ) -> u32 {
        if screen.index() == self.home.index() {
            self.home_ms()
        } else {
            self.screen_ms
        }
    }
}

impl Default for DwellConfig {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// State Machine
// =============================================================================

/// Carousel state: the visible screen and when it was entered.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenCycle {
    current: Screen,
    /// Tick at which `current` was entered.
    anchor: Tick,
    config: DwellConfig,
}

impl ScreenCycle {
    /// Start on the first screen with its dwell timer running from `now`.
    ///
    /// The caller renders [`Self::current`] once before it starts polling.
    pub const fn new(
        now: Tick,
        config: DwellConfig,
    ) -> Self {
        Self {
            current: Screen::Clock,
            anchor: now,
            config,
        }
    }

    /// Currently visible screen.
    #[inline]
    pub const fn current(&self) -> Screen { self.current }

    /// Dwell configuration in use.
    #[inline]
    pub const fn config(&self) -> &DwellConfig { &self.config }

    /// Dwell of the current screen, in milliseconds.
    #[inline]
    pub const fn dwell(&self) -> u32 { self.config.dwell_for(self.current) }

    /// Tick after which the current screen auto-advances.
    #[inline]
    pub const fn deadline(&self) -> Tick { self.anchor.wrapping_add(self.dwell()) }

    /// Whether the current screen has outstayed its dwell at `now`.
    #[inline]
    pub const fn is_expired(
        &self,
        now: Tick,
    ) -> bool {
        now.millis_since(self.anchor) > self.dwell()
    }

    /// Milliseconds left before the current screen auto-advances.
    pub const fn remaining(
        &self,
        now: Tick,
    ) -> u32 {
        self.dwell().saturating_sub(now.millis_since(self.anchor))
    }

    /// Advance the state machine by one iteration.
    ///
    /// Returns the new screen if it changed, `None` otherwise.
    pub fn step(
        &mut self,
        gesture: Gesture,
        now: Tick,
    ) -> Option<Screen> {
        let target = match gesture.swipe() {
            Some(Swipe::Forward) => self.current.next(),
            Some(Swipe::Back) => self.current.prev(),
            None if self.is_expired(now) => self.current.next(),
            None => return None,
        };

        self.current = target;
        self.anchor = now;
        Some(target)
    }

    /// Poll both collaborators once and [`step`](Self::step) with the results.
    ///
    /// The gesture is read before the tick, matching the order of a hardware
    /// loop that timestamps after the (slower) I2C transaction.
    pub fn poll<G, T>(
        &mut self,
        gestures: &mut G,
        clock: &T,
    ) -> Option<Screen>
    where
        G: GestureSource + ?Sized,
        T: TickSource + ?Sized,
    {
        let gesture = gestures.poll_gesture();
        let now = clock.now();
        self.step(gesture, now)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

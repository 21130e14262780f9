//! Platform-agnostic core of the gesture weather station.
//!
//! Shared between the Pico 2 firmware and the desktop simulator:
//!
//! - [`cycle`]: the screen state machine (gestures, dwell timer, wraparound)
//! - [`screen`], [`gesture`], [`tick`]: the values the state machine works on
//! - [`source`]: traits over the gesture sensor and the tick counter
//! - [`readings`], [`calendar`]: sensor snapshot and wall-clock conversion
//! - [`screens`], [`icons`], [`styles`], [`colors`]: rendering
//! - [`config`]: layout and timing constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and has no time or platform
//! dependencies; time arrives as [`tick::Tick`] values from the caller.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod calendar;
pub mod colors;
pub mod config;
pub mod cycle;
pub mod gesture;
pub mod icons;
pub mod readings;
pub mod screen;
pub mod screens;
pub mod source;
pub mod styles;
pub mod tick;

// Re-export commonly used items
pub use calendar::CivilTime;
pub use cycle::{DwellConfig, ScreenCycle};
pub use gesture::Gesture;
pub use readings::{Environment, SensorSnapshot};
pub use screen::Screen;
pub use source::{GestureSource, TickSource};
pub use tick::Tick;

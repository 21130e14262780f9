//! Station library - host-testable modules of the Pico 2 firmware.
//!
//! The binary (`main.rs`) adds the embassy-specific code on top of this
//! library and of `station-common`.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p station-pico2 --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Board wiring and bus settings
pub mod config;

// Drivers
pub mod framebuffer;
pub mod paj7620;

pub use paj7620::{Orientation, Paj7620, Paj7620Error};

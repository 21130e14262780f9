//! Weather station simulator for desktop.
//!
//! Runs the same boot sequence, carousel and screens as the firmware on an
//! SDL window. Arrow keys stand in for swipes; see [`input`] for the map.
//!
//! `RUST_LOG=debug` shows every key and screen change. `STATION_SIM_SCALE`
//! sets the window pixel scale (default 2).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod input;
mod sensors;
mod timing;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info, warn};
use station_common::colors::BLACK;
use station_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use station_common::screens::{BootStatus, draw_boot_status, draw_screen, draw_welcome};
use station_common::{DwellConfig, ScreenCycle, SensorSnapshot, Tick, TickSource};

use crate::input::{InstantTicks, KeyboardGestures};
use crate::sensors::{SyntheticSensors, wall_clock};
use crate::timing::{BLACKOUT, BOOT_STATUS_PAUSE, BOOT_WELCOME_PAUSE, FRAME_TIME, TICK_START_MS};

const DEFAULT_SCALE: u32 = 2;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scale = window_scale()?;
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new("Weather Station Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // Boot console. Synthetic sensors always answer; the clock depends on the host.
    draw_boot_status(&mut display, 0, BootStatus::SensorsOk);
    let clock_status = match wall_clock() {
        Ok(now) => {
            info!("Clock: {}", now.date_line());
            BootStatus::ClockOk
        }
        Err(e) => {
            warn!("Clock unavailable: {e:#}");
            BootStatus::ClockUnavailable
        }
    };
    draw_boot_status(&mut display, 1, clock_status);
    let mut gestures = KeyboardGestures::new();
    if !hold(&display, &mut window, &mut gestures, BOOT_STATUS_PAUSE) {
        return Ok(());
    }

    draw_welcome(&mut display);
    if !hold(&display, &mut window, &mut gestures, BOOT_WELCOME_PAUSE) {
        return Ok(());
    }

    let sensors = SyntheticSensors::new();
    let mut snapshot = SensorSnapshot::new();
    sensors.refresh(&mut snapshot);

    let ticks = InstantTicks::starting_at(Tick::from_millis(TICK_START_MS));
    let mut cycle = ScreenCycle::new(ticks.now(), DwellConfig::default());

    draw_screen(&mut display, cycle.current(), &snapshot);
    info!("Carousel started on {} at tick {}", cycle.current().label(), ticks.now().as_millis());

    loop {
        let frame_start = Instant::now();

        if !pump_events(&mut window, &mut gestures) {
            return Ok(());
        }

        if let Some(screen) = cycle.poll(&mut gestures, &ticks) {
            info!("Screen: {} (tick {})", screen.label(), ticks.now().as_millis());

            display.clear(BLACK).ok();
            if !hold(&display, &mut window, &mut gestures, BLACKOUT) {
                return Ok(());
            }

            sensors.refresh(&mut snapshot);
            draw_screen(&mut display, screen, &snapshot);
        }

        window.update(&display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Queue gesture keys pressed since the last call.
///
/// Returns `false` if the window was closed.
fn pump_events(
    window: &mut Window,
    gestures: &mut KeyboardGestures,
) -> bool {
    for ev in window.events() {
        match ev {
            SimulatorEvent::Quit => return false,
            SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                if repeat {
                    continue;
                }
                if gestures.press(keycode) {
                    debug!("Key {keycode:?} queued as gesture");
                }
            }
            _ => {}
        }
    }
    true
}

/// Show the current frame for `duration`. Keys pressed meanwhile stay queued,
/// as the gesture sensor latches a swipe until it is read.
///
/// Returns `false` if the window was closed.
fn hold(
    display: &SimulatorDisplay<Rgb565>,
    window: &mut Window,
    gestures: &mut KeyboardGestures,
    duration: Duration,
) -> bool {
    let start = Instant::now();
    while start.elapsed() < duration {
        window.update(display);
        if !pump_events(window, gestures) {
            return false;
        }
        thread::sleep(FRAME_TIME);
    }
    true
}

fn window_scale() -> Result<u32> {
    let Ok(raw) = std::env::var("STATION_SIM_SCALE") else {
        return Ok(DEFAULT_SCALE);
    };
    let scale: u32 = raw
        .parse()
        .with_context(|| format!("STATION_SIM_SCALE must be a positive integer, got {raw:?}"))?;
    ensure!(scale > 0, "STATION_SIM_SCALE must be at least 1");
    Ok(scale)
}

//! Sensor screens: temperature, humidity, pressure and light.
//!
//! Each shows one reading large next to its icon and two related readings
//! underneath. A value that was never read shows as `--`.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use super::{draw_primary, draw_secondary};
use crate::readings::SensorSnapshot;

const MISSING: &str = "--";

/// Format a reading with `decimals` fraction digits, or `--` if unknown.
pub fn format_reading(
    value: Option<f32>,
    decimals: usize,
) -> String<12> {
    let mut out = String::new();
    match value {
        Some(v) => {
            let _ = write!(out, "{v:.decimals$}");
        }
        None => {
            let _ = out.push_str(MISSING);
        }
    }
    out
}

/// `label` followed by the formatted reading and its unit.
fn labelled(
    label: &str,
    value: Option<f32>,
    decimals: usize,
    unit: &str,
) -> String<24> {
    let mut out = String::new();
    let _ = write!(out, "{label}{}{unit}", format_reading(value, decimals));
    out
}

fn temperature_line(snapshot: &SensorSnapshot) -> String<24> { labelled("Temp: ", snapshot.temperature_c(), 1, "°C") }

fn humidity_line(snapshot: &SensorSnapshot) -> String<24> { labelled("Hum:  ", snapshot.humidity_pct(), 1, "%") }

fn pressure_line(snapshot: &SensorSnapshot) -> String<24> { labelled("Pres: ", snapshot.pressure_hpa(), 1, "hPa") }

pub fn draw_temperature<D>(
    display: &mut D,
    snapshot: &SensorSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_primary(display, &format_reading(snapshot.temperature_c(), 1), "°C");
    draw_secondary(display, 0, &humidity_line(snapshot));
    draw_secondary(display, 1, &pressure_line(snapshot));
}

pub fn draw_humidity<D>(
    display: &mut D,
    snapshot: &SensorSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_primary(display, &format_reading(snapshot.humidity_pct(), 1), "%");
    draw_secondary(display, 0, &temperature_line(snapshot));
    draw_secondary(display, 1, &pressure_line(snapshot));
}

pub fn draw_pressure<D>(
    display: &mut D,
    snapshot: &SensorSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_primary(display, &format_reading(snapshot.pressure_hpa(), 1), "hPa");
    draw_secondary(display, 0, &temperature_line(snapshot));
    draw_secondary(display, 1, &humidity_line(snapshot));
}

pub fn draw_light<D>(
    display: &mut D,
    snapshot: &SensorSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let light = snapshot.light_pct.map(f32::from);

    draw_primary(display, &format_reading(light, 0), "%");
    draw_secondary(display, 0, &temperature_line(snapshot));
    draw_secondary(display, 1, &humidity_line(snapshot));
}

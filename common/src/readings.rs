//! Sensor readings and the last-known snapshot shown on screen.
//!
//! Sensor reads are best effort. A failed read leaves the previous value in
//! place so a flaky bus never blanks a screen that already had data.

use crate::calendar::CivilTime;

/// Full-scale count of the RP2350's 12-bit ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

/// One environmental sensor measurement.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Environment {
    /// Temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent.
    pub humidity_pct: f32,
    /// Barometric pressure in hectopascals.
    pub pressure_hpa: f32,
}

impl Environment {
    /// Build from the raw units a BME280 driver reports (pressure in pascals).
    pub fn from_pascals(
        temperature_c: f32,
        humidity_pct: f32,
        pressure_pa: f32,
    ) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            pressure_hpa: pressure_pa / 100.0,
        }
    }
}

/// Map a raw ADC count onto `0..=100` percent.
///
/// Integer linear mapping with truncation; counts above `full_scale` clamp to
/// 100 and a zero `full_scale` reads as 0.
pub const fn light_percent(
    raw: u16,
    full_scale: u16,
) -> u8 {
    if full_scale == 0 {
        return 0;
    }
    let raw = if raw > full_scale { full_scale } else { raw };
    ((raw as u32 * 100) / full_scale as u32) as u8
}

/// Last-known value of every reading the screens display.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SensorSnapshot {
    /// Latest successful environmental measurement.
    pub environment: Option<Environment>,
    /// Latest successful light reading, in percent.
    pub light_pct: Option<u8>,
    /// Latest wall-clock time.
    pub time: Option<CivilTime>,
}

impl SensorSnapshot {
    /// Empty snapshot (nothing read yet).
    pub const fn new() -> Self {
        Self {
            environment: None,
            light_pct: None,
            time: None,
        }
    }

    /// Store a fresh environmental reading; `None` keeps the previous one.
    pub fn record_environment(
        &mut self,
        reading: Option<Environment>,
    ) {
        if let Some(env) = reading {
            self.environment = Some(env);
        }
    }

    /// Store a fresh light reading; `None` keeps the previous one.
    pub fn record_light(
        &mut self,
        reading: Option<u8>,
    ) {
        if let Some(pct) = reading {
            self.light_pct = Some(pct.min(100));
        }
    }

    /// Store a fresh wall-clock time; `None` keeps the previous one.
    pub fn record_time(
        &mut self,
        reading: Option<CivilTime>,
    ) {
        if let Some(time) = reading {
            self.time = Some(time);
        }
    }

    #[inline]
    pub fn temperature_c(&self) -> Option<f32> { self.environment.map(|e| e.temperature_c) }

    #[inline]
    pub fn humidity_pct(&self) -> Option<f32> { self.environment.map(|e| e.humidity_pct) }

    #[inline]
    pub fn pressure_hpa(&self) -> Option<f32> { self.environment.map(|e| e.pressure_hpa) }
}

// =============================================================================
// Unit Tests
// =============================================================================

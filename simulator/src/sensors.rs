//! Synthetic sensor readings and the host clock.
//!
//! Values drift along slow sine waves so every screen shows something
//! changing between visits.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::warn;
use station_common::config::LOCAL_OFFSET_SECS;
use station_common::readings::{ADC_FULL_SCALE, light_percent};
use station_common::{CivilTime, Environment, SensorSnapshot};

/// Stand-in for the BME280, the photoresistor and the RTC.
pub struct SyntheticSensors {
    start: Instant,
}

impl Default for SyntheticSensors {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl SyntheticSensors {
    pub fn new() -> Self { Self::default() }

    fn seconds(&self) -> f32 { self.start.elapsed().as_secs_f32() }

    pub fn read_environment(&self) -> Environment { environment_at(self.seconds()) }

    pub fn read_light(&self) -> u8 { light_at(self.seconds()) }

    /// Read everything once. The clock is the only read that can fail.
    pub fn refresh(
        &self,
        snapshot: &mut SensorSnapshot,
    ) {
        snapshot.record_environment(Some(self.read_environment()));
        snapshot.record_light(Some(self.read_light()));
        let time = wall_clock().map_err(|e| warn!("Wall clock unavailable: {e:#}")).ok();
        snapshot.record_time(time);
    }
}

/// Environmental reading `t` seconds into the run.
pub fn environment_at(t: f32) -> Environment {
    Environment::from_pascals(
        fake_signal(t, 18.0, 24.0, 0.05),
        fake_signal(t, 35.0, 55.0, 0.03),
        fake_signal(t, 100_800.0, 101_800.0, 0.02),
    )
}

/// Light level `t` seconds into the run, through the same ADC mapping as
/// the firmware.
pub fn light_at(t: f32) -> u8 {
    let raw = fake_signal(t, 0.05, 0.95, 0.1) * f32::from(ADC_FULL_SCALE);
    light_percent(raw as u16, ADC_FULL_SCALE)
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Local time from the host clock.
pub fn wall_clock() -> Result<CivilTime> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("host clock is before 1970")?;
    let secs = i64::try_from(since_epoch.as_secs()).context("host clock out of range")?;
    Ok(CivilTime::from_unix(secs, LOCAL_OFFSET_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_stays_plausible() {
        for step in 0..200 {
            let env = environment_at(step as f32 * 7.5);
            assert!((17.9..=24.1).contains(&env.temperature_c));
            assert!((34.9..=55.1).contains(&env.humidity_pct));
            assert!((1007.9..=1018.1).contains(&env.pressure_hpa));
        }
    }

    #[test]
    fn test_light_in_range() {
        for step in 0..200 {
            assert!(light_at(step as f32 * 3.3) <= 100);
        }
        assert_eq!(light_at(0.0), 49);
    }

    #[test]
    fn test_wall_clock_is_after_2020() {
        let now = wall_clock().unwrap();
        assert!(now.year >= 2020);
    }
}

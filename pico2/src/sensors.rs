//! Sensor hub: environmental sensor, light sensor and RTC on the board.
//!
//! Reads are best effort. A failure is logged at `warn` and reported as
//! `None`, which leaves the last-known value in the [`SensorSnapshot`].

use defmt::{Debug2Format, warn};
use ds323x::{DateTimeAccess, Ds323x, ic::DS3231, interface::I2cInterface};
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;
use station_common::config::LOCAL_OFFSET_SECS;
use station_common::readings::light_percent;
use station_common::{CivilTime, Environment, SensorSnapshot};
use station_pico2::config::ADC_FULL_SCALE;

/// Blocking I2C0 shared between the sensors on the bus.
pub type SharedBus<'a> = RefCellDevice<'a, I2c<'static, I2C0, i2c::Blocking>>;

pub type Bme280<'a> = bme280::i2c::BME280<SharedBus<'a>>;

pub type Rtc<'a> = Ds323x<I2cInterface<SharedBus<'a>>, DS3231>;

/// Photoresistor divider on an ADC pin.
pub struct LightSensor {
    adc: Adc<'static, adc::Blocking>,
    channel: Channel<'static>,
}

impl LightSensor {
    pub fn new(
        adc: Adc<'static, adc::Blocking>,
        channel: Channel<'static>,
    ) -> Self {
        Self { adc, channel }
    }

    /// Ambient light in percent of full scale.
    pub fn read_percent(&mut self) -> Option<u8> {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => Some(light_percent(raw, ADC_FULL_SCALE)),
            Err(e) => {
                warn!("Light read failed: {}", Debug2Format(&e));
                None
            }
        }
    }
}

/// Every sensor the screens read from.
pub struct SensorHub<'a> {
    bme280: Bme280<'a>,
    light: LightSensor,
    /// `None` when no RTC answered at boot.
    rtc: Option<Rtc<'a>>,
    delay: Delay,
}

impl<'a> SensorHub<'a> {
    pub fn new(
        bme280: Bme280<'a>,
        light: LightSensor,
        rtc: Option<Rtc<'a>>,
    ) -> Self {
        Self {
            bme280,
            light,
            rtc,
            delay: Delay,
        }
    }

    /// Whether a wall clock is available.
    pub fn has_clock(&self) -> bool { self.rtc.is_some() }

    pub fn read_environment(&mut self) -> Option<Environment> {
        match self.bme280.measure(&mut self.delay) {
            Ok(m) => Some(Environment::from_pascals(m.temperature, m.humidity, m.pressure)),
            Err(e) => {
                warn!("BME280 read failed: {}", Debug2Format(&e));
                None
            }
        }
    }

    pub fn read_light(&mut self) -> Option<u8> { self.light.read_percent() }

    /// Local wall-clock time. The RTC keeps UTC.
    pub fn read_time(&mut self) -> Option<CivilTime> {
        let rtc = self.rtc.as_mut()?;
        match rtc.datetime() {
            Ok(utc) => Some(CivilTime::from_unix(utc.and_utc().timestamp(), LOCAL_OFFSET_SECS)),
            Err(e) => {
                warn!("RTC read failed: {}", Debug2Format(&e));
                None
            }
        }
    }

    /// Read everything once, keeping last-known values on failure.
    pub fn refresh(
        &mut self,
        snapshot: &mut SensorSnapshot,
    ) {
        snapshot.record_environment(self.read_environment());
        snapshot.record_light(self.read_light());
        snapshot.record_time(self.read_time());
    }
}

/// Probe the RTC; `None` if it does not answer or lost its time.
pub fn probe_rtc(mut rtc: Rtc<'_>) -> Option<Rtc<'_>> {
    match rtc.has_been_stopped() {
        Ok(false) => Some(rtc),
        Ok(true) => {
            warn!("RTC oscillator stopped, time not set");
            None
        }
        Err(e) => {
            warn!("RTC not responding: {}", Debug2Format(&e));
            None
        }
    }
}

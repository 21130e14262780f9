//! PAJ7620U2 gesture sensor driver.
//!
//! Blocking driver generic over [`embedded_hal::i2c::I2c`], so it can share a
//! bus through `embedded-hal-bus` with the other sensors.
//!
//! # Register Banks
//!
//! The part exposes two register banks selected through register `0xEF`.
//! Gesture results live in bank 0:
//!
//! | Register | Bits |
//! |---|---|
//! | `0x43` | up, down, left, right, forward, backward, clockwise, anticlockwise (bit 0..7) |
//! | `0x44` | wave (bit 0) |
//!
//! Both flag registers clear on read.
//!
//! # Power-up
//!
//! The part sleeps after power-up and NACKs the first transaction; any access
//! wakes it. [`Paj7620::init`] issues one throwaway read and waits for the
//! part to settle before talking to it.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use station_common::Gesture;

use crate::config::PAJ7620_ADDRESS;

/// Expected value of the part id registers (`0x01:0x00`).
pub const PART_ID: u16 = 0x7620;

const REG_BANK_SELECT: u8 = 0xEF;
const REG_PART_ID_LOW: u8 = 0x00;
const REG_PART_ID_HIGH: u8 = 0x01;
const REG_INT_FLAG_1: u8 = 0x43;
const REG_INT_FLAG_2: u8 = 0x44;

const BANK_0: u8 = 0x00;

/// Settle time after the wake-up access.
const WAKE_UP_US: u32 = 700;

// Flag bits of REG_INT_FLAG_1, in decode priority order
const FLAG_UP: u8 = 1 << 0;
const FLAG_DOWN: u8 = 1 << 1;
const FLAG_LEFT: u8 = 1 << 2;
const FLAG_RIGHT: u8 = 1 << 3;
const FLAG_FORWARD: u8 = 1 << 4;
const FLAG_BACKWARD: u8 = 1 << 5;
const FLAG_CLOCKWISE: u8 = 1 << 6;
const FLAG_ANTICLOCKWISE: u8 = 1 << 7;

// Flag bit of REG_INT_FLAG_2
const FLAG_WAVE: u8 = 1 << 0;

/// Vendor initialisation sequence as (register, value) pairs.
///
/// Starts in bank 0 (sensor and gesture engine setup), switches to bank 1
/// through `0xEF` for the analog front end, and leaves gesture mode enabled.
const INIT_REGISTERS: [(u8, u8); 219] = [
    (0xEF, 0x00), (0x32, 0x29), (0x33, 0x01), (0x34, 0x00), (0x35, 0x01), (0x36, 0x00),
    (0x37, 0x07), (0x38, 0x17), (0x39, 0x06), (0x3A, 0x12), (0x3F, 0x00), (0x40, 0x02),
    (0x41, 0xFF), (0x42, 0x01), (0x46, 0x2D), (0x47, 0x0F), (0x48, 0x3C), (0x49, 0x00),
    (0x4A, 0x1E), (0x4B, 0x00), (0x4C, 0x20), (0x4D, 0x00), (0x4E, 0x1A), (0x4F, 0x14),
    (0x50, 0x00), (0x51, 0x10), (0x52, 0x00), (0x5C, 0x02), (0x5D, 0x00), (0x5E, 0x10),
    (0x5F, 0x3F), (0x60, 0x27), (0x61, 0x28), (0x62, 0x00), (0x63, 0x03), (0x64, 0xF7),
    (0x65, 0x03), (0x66, 0xD9), (0x67, 0x03), (0x68, 0x01), (0x69, 0xC8), (0x6A, 0x40),
    (0x6D, 0x04), (0x6E, 0x00), (0x6F, 0x00), (0x70, 0x80), (0x71, 0x00), (0x72, 0x00),
    (0x73, 0x00), (0x74, 0xF0), (0x75, 0x00), (0x80, 0x42), (0x81, 0x44), (0x82, 0x04),
    (0x83, 0x20), (0x84, 0x20), (0x85, 0x00), (0x86, 0x10), (0x87, 0x00), (0x88, 0x05),
    (0x89, 0x18), (0x8A, 0x10), (0x8B, 0x01), (0x8C, 0x37), (0x8D, 0x00), (0x8E, 0xF0),
    (0x8F, 0x81), (0x90, 0x06), (0x91, 0x06), (0x92, 0x1E), (0x93, 0x0D), (0x94, 0x0A),
    (0x95, 0x0A), (0x96, 0x0C), (0x97, 0x05), (0x98, 0x0A), (0x99, 0x41), (0x9A, 0x14),
    (0x9B, 0x0A), (0x9C, 0x3F), (0x9D, 0x33), (0x9E, 0xAE), (0x9F, 0xF9), (0xA0, 0x48),
    (0xA1, 0x13), (0xA2, 0x10), (0xA3, 0x08), (0xA4, 0x30), (0xA5, 0x19), (0xA6, 0x10),
    (0xA7, 0x08), (0xA8, 0x24), (0xA9, 0x04), (0xAA, 0x1E), (0xAB, 0x1E), (0xCC, 0x19),
    (0xCD, 0x0B), (0xCE, 0x13), (0xCF, 0x64), (0xD0, 0x21), (0xD1, 0x0F), (0xD2, 0x88),
    (0xE0, 0x01), (0xE1, 0x04), (0xE2, 0x41), (0xE3, 0xD6), (0xE4, 0x00), (0xE5, 0x0C),
    (0xE6, 0x0A), (0xE7, 0x00), (0xE8, 0x00), (0xE9, 0x00), (0xEE, 0x07), (0xEF, 0x01),
    (0x00, 0x1E), (0x01, 0x1E), (0x02, 0x0F), (0x03, 0x10), (0x04, 0x02), (0x05, 0x00),
    (0x06, 0xB0), (0x07, 0x04), (0x08, 0x0D), (0x09, 0x0E), (0x0A, 0x9C), (0x0B, 0x04),
    (0x0C, 0x05), (0x0D, 0x0F), (0x0E, 0x02), (0x0F, 0x12), (0x10, 0x02), (0x11, 0x02),
    (0x12, 0x00), (0x13, 0x01), (0x14, 0x05), (0x15, 0x07), (0x16, 0x05), (0x17, 0x07),
    (0x18, 0x01), (0x19, 0x04), (0x1A, 0x05), (0x1B, 0x0C), (0x1C, 0x2A), (0x1D, 0x01),
    (0x1E, 0x00), (0x21, 0x00), (0x22, 0x00), (0x23, 0x00), (0x25, 0x01), (0x26, 0x00),
    (0x27, 0x39), (0x28, 0x7F), (0x29, 0x08), (0x30, 0x03), (0x31, 0x00), (0x32, 0x1A),
    (0x33, 0x1A), (0x34, 0x07), (0x35, 0x07), (0x36, 0x01), (0x37, 0xFF), (0x38, 0x36),
    (0x39, 0x07), (0x3A, 0x00), (0x3E, 0xFF), (0x3F, 0x00), (0x40, 0x77), (0x41, 0x40),
    (0x42, 0x00), (0x43, 0x30), (0x44, 0xA0), (0x45, 0x5C), (0x46, 0x00), (0x47, 0x00),
    (0x48, 0x58), (0x4A, 0x1E), (0x4B, 0x1E), (0x4C, 0x00), (0x4D, 0x00), (0x4E, 0xA0),
    (0x4F, 0x80), (0x50, 0x00), (0x51, 0x00), (0x52, 0x00), (0x53, 0x00), (0x54, 0x00),
    (0x57, 0x80), (0x59, 0x10), (0x5A, 0x08), (0x5B, 0x94), (0x5C, 0xE8), (0x5D, 0x08),
    (0x5E, 0x3D), (0x5F, 0x99), (0x60, 0x45), (0x61, 0x40), (0x63, 0x2D), (0x64, 0x02),
    (0x65, 0x96), (0x66, 0x00), (0x67, 0x97), (0x68, 0x01), (0x69, 0xCD), (0x6A, 0x01),
    (0x6B, 0xB0), (0x6C, 0x04), (0x6D, 0x2C), (0x6E, 0x01), (0x6F, 0x32), (0x71, 0x00),
    (0x72, 0x01), (0x73, 0x35), (0x74, 0x00), (0x75, 0x33), (0x76, 0x31), (0x77, 0x01),
    (0x7C, 0x84), (0x7D, 0x03), (0x7E, 0x01),
];

/// Driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paj7620Error<E> {
    /// Bus transaction failed.
    I2c(E),
    /// Something answered at the address but it is not a PAJ7620.
    WrongPartId(u16),
}

impl<E> From<E> for Paj7620Error<E> {
    fn from(err: E) -> Self { Self::I2c(err) }
}

/// How the sensor is mounted relative to the display.
///
/// Directions are decoded on the datasheet axes (bit 0 of `0x43` is up).
/// Breakout boards such as the Grove Gesture sensor carry the chip a quarter
/// turn from those axes; the Arduino libraries for them name bit 0 "right"
/// and bit 1 "left". Mount such a board with its label upright and use
/// [`Orientation::Rotated90`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Sensor axes match the display.
    #[default]
    Normal,
    /// Quarter turn clockwise: sensor up is display right.
    Rotated90,
    /// Sensor is upside down; left/right and up/down swap.
    Rotated180,
    /// Quarter turn anticlockwise: sensor up is display left.
    Rotated270,
}

impl Orientation {
    /// Map a gesture from sensor axes to display axes.
    pub const fn apply(
        self,
        gesture: Gesture,
    ) -> Gesture {
        match self {
            Self::Normal => gesture,
            Self::Rotated90 => gesture.rotated_90(),
            Self::Rotated180 => gesture.rotated_180(),
            Self::Rotated270 => gesture.rotated_270(),
        }
    }
}

/// Decode the two interrupt flag registers into one gesture.
///
/// When several flags are set at once the first in register bit order wins;
/// wave is checked last.
pub const fn decode_flags(
    flags: u8,
    flags2: u8,
) -> Gesture {
    if flags & FLAG_UP != 0 {
        Gesture::Up
    } else if flags & FLAG_DOWN != 0 {
        Gesture::Down
    } else if flags & FLAG_LEFT != 0 {
        Gesture::Left
    } else if flags & FLAG_RIGHT != 0 {
        Gesture::Right
    } else if flags & FLAG_FORWARD != 0 {
        Gesture::Forward
    } else if flags & FLAG_BACKWARD != 0 {
        Gesture::Backward
    } else if flags & FLAG_CLOCKWISE != 0 {
        Gesture::Clockwise
    } else if flags & FLAG_ANTICLOCKWISE != 0 {
        Gesture::AntiClockwise
    } else if flags2 & FLAG_WAVE != 0 {
        Gesture::Wave
    } else {
        Gesture::None
    }
}

/// PAJ7620U2 on an I2C bus.
pub struct Paj7620<I2C> {
    i2c: I2C,
    address: u8,
    orientation: Orientation,
}

impl<I2C: I2c> Paj7620<I2C> {
    /// Driver at the fixed part address, normal orientation.
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: PAJ7620_ADDRESS,
            orientation: Orientation::Normal,
        }
    }

    /// Set the mounting orientation applied to every decoded gesture.
    pub fn with_orientation(
        mut self,
        orientation: Orientation,
    ) -> Self {
        self.orientation = orientation;
        self
    }

    /// Wake the part, check its id and load the gesture configuration.
    pub fn init(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Paj7620Error<I2C::Error>> {
        // Wake-up access; NACKed while the part is asleep
        let _ = self.read_register(REG_PART_ID_LOW);
        delay.delay_us(WAKE_UP_US);

        self.select_bank(BANK_0)?;
        let id = self.part_id()?;
        if id != PART_ID {
            return Err(Paj7620Error::WrongPartId(id));
        }

        for (reg, value) in INIT_REGISTERS {
            self.write_register(reg, value)?;
        }
        self.select_bank(BANK_0)
    }

    /// Read the 16-bit part id from bank 0.
    pub fn part_id(&mut self) -> Result<u16, Paj7620Error<I2C::Error>> {
        let low = self.read_register(REG_PART_ID_LOW)?;
        let high = self.read_register(REG_PART_ID_HIGH)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Read and clear the gesture flags, returning the detected gesture.
    ///
    /// Returns [`Gesture::None`] when nothing happened since the last read.
    pub fn read_gesture(&mut self) -> Result<Gesture, Paj7620Error<I2C::Error>> {
        let flags = self.read_register(REG_INT_FLAG_1)?;
        let flags2 = self.read_register(REG_INT_FLAG_2)?;
        Ok(self.orientation.apply(decode_flags(flags, flags2)))
    }

    /// Give the bus back.
    pub fn release(self) -> I2C { self.i2c }

    fn select_bank(
        &mut self,
        bank: u8,
    ) -> Result<(), Paj7620Error<I2C::Error>> {
        self.write_register(REG_BANK_SELECT, bank)
    }

    fn write_register(
        &mut self,
        reg: u8,
        value: u8,
    ) -> Result<(), Paj7620Error<I2C::Error>> {
        self.i2c.write(self.address, &[reg, value])?;
        Ok(())
    }

    fn read_register(
        &mut self,
        reg: u8,
    ) -> Result<u8, Paj7620Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut buf)?;
        Ok(buf[0])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nack;

    impl embedded_hal::i2c::Error for Nack {
        fn kind(&self) -> ErrorKind { ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) }
    }

    /// Register-level model of the part: two banks, read-to-clear flags.
    struct FakeBus {
        banks: [[u8; 256]; 2],
        bank: usize,
        /// Transactions to NACK before the part is awake.
        asleep_for: usize,
        /// (bank, register, value) of every register write, in order.
        writes: Vec<(usize, u8, u8)>,
        /// Register pointer set by the last write without a value.
        pointer: u8,
    }

    impl FakeBus {
        fn new() -> Self {
            let mut banks = [[0u8; 256]; 2];
            banks[0][REG_PART_ID_LOW as usize] = 0x20;
            banks[0][REG_PART_ID_HIGH as usize] = 0x76;
            Self {
                banks,
                bank: 0,
                asleep_for: 1,
                writes: Vec::new(),
                pointer: 0,
            }
        }

        fn awake() -> Self {
            let mut bus = Self::new();
            bus.asleep_for = 0;
            bus
        }

        fn raise(
            &mut self,
            flags: u8,
            flags2: u8,
        ) {
            self.banks[0][REG_INT_FLAG_1 as usize] = flags;
            self.banks[0][REG_INT_FLAG_2 as usize] = flags2;
        }
    }

    impl ErrorType for FakeBus {
        type Error = Nack;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if address != PAJ7620_ADDRESS {
                return Err(Nack);
            }
            if self.asleep_for > 0 {
                self.asleep_for -= 1;
                return Err(Nack);
            }

            for op in operations {
                match op {
                    Operation::Write([reg]) => self.pointer = *reg,
                    Operation::Write([reg, value]) => {
                        self.writes.push((self.bank, *reg, *value));
                        if *reg == REG_BANK_SELECT {
                            self.bank = usize::from(*value & 1);
                        } else {
                            self.banks[self.bank][*reg as usize] = *value;
                        }
                    }
                    Operation::Write(_) => return Err(Nack),
                    Operation::Read(buf) => {
                        for byte in buf.iter_mut() {
                            let reg = self.pointer as usize;
                            *byte = self.banks[self.bank][reg];
                            if self.bank == 0 && (reg == REG_INT_FLAG_1 as usize || reg == REG_INT_FLAG_2 as usize) {
                                self.banks[0][reg] = 0;
                            }
                            self.pointer = self.pointer.wrapping_add(1);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    /// Records every requested wait.
    #[derive(Default)]
    struct RecordingDelay {
        waits_ns: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(
            &mut self,
            ns: u32,
        ) {
            self.waits_ns.push(ns);
        }
    }

    fn ready_driver() -> Paj7620<FakeBus> {
        let mut driver = Paj7620::new(FakeBus::awake());
        driver.init(&mut RecordingDelay::default()).unwrap();
        driver
    }

    #[test]
    fn test_init_waits_after_wake_up() {
        let mut driver = Paj7620::new(FakeBus::new());
        let mut delay = RecordingDelay::default();
        driver.init(&mut delay).unwrap();

        let total_ns: u64 = delay.waits_ns.iter().map(|&ns| u64::from(ns)).sum();
        assert!(total_ns >= 700_000, "waited only {total_ns} ns");
    }

    #[test]
    fn test_init_wakes_and_loads_table() {
        let mut driver = Paj7620::new(FakeBus::new());
        driver.init(&mut RecordingDelay::default()).unwrap();

        let bus = driver.release();
        // Bank select, the whole table, then back to bank 0
        assert_eq!(bus.writes.len(), INIT_REGISTERS.len() + 2);
        assert_eq!(bus.writes.last(), Some(&(1, REG_BANK_SELECT, BANK_0)));
        assert_eq!(bus.bank, 0);
        // A bank 1 register from the table landed in bank 1
        assert_eq!(bus.banks[1][0x7E], 0x01);
        assert!(bus.writes.contains(&(1, 0x7E, 0x01)));
    }

    #[test]
    fn test_init_rejects_wrong_part() {
        let mut bus = FakeBus::awake();
        bus.banks[0][REG_PART_ID_HIGH as usize] = 0x12;
        let mut driver = Paj7620::new(bus);
        assert_eq!(
            driver.init(&mut RecordingDelay::default()),
            Err(Paj7620Error::WrongPartId(0x1220))
        );
    }

    #[test]
    fn test_init_reports_bus_error() {
        let mut bus = FakeBus::new();
        bus.asleep_for = usize::MAX;
        let mut driver = Paj7620::new(bus);
        assert_eq!(driver.init(&mut RecordingDelay::default()), Err(Paj7620Error::I2c(Nack)));
    }

    #[test]
    fn test_part_id() {
        let mut driver = Paj7620::new(FakeBus::awake());
        assert_eq!(driver.part_id(), Ok(PART_ID));
    }

    #[test]
    fn test_read_gesture_clears_flags() {
        let mut driver = ready_driver();
        driver.i2c.raise(FLAG_RIGHT, 0);
        assert_eq!(driver.read_gesture(), Ok(Gesture::Right));
        assert_eq!(driver.read_gesture(), Ok(Gesture::None));
    }

    #[test]
    fn test_read_gesture_wave() {
        let mut driver = ready_driver();
        driver.i2c.raise(0, FLAG_WAVE);
        assert_eq!(driver.read_gesture(), Ok(Gesture::Wave));
    }

    #[test]
    fn test_read_gesture_orientation() {
        let mut driver = ready_driver().with_orientation(Orientation::Rotated180);
        driver.i2c.raise(FLAG_LEFT, 0);
        assert_eq!(driver.read_gesture(), Ok(Gesture::Right));
        driver.i2c.raise(FLAG_UP, 0);
        assert_eq!(driver.read_gesture(), Ok(Gesture::Down));
    }

    #[test]
    fn test_grove_board_swipes_move_carousel() {
        use station_common::{DwellConfig, Screen, ScreenCycle, Tick};

        let mut driver = ready_driver().with_orientation(Orientation::Rotated90);
        let mut cycle = ScreenCycle::new(Tick(0), DwellConfig::default());

        // Bit 0 is the board's right swipe
        driver.i2c.raise(1 << 0, 0);
        let gesture = driver.read_gesture().unwrap();
        assert_eq!(gesture, Gesture::Right);
        assert_eq!(cycle.step(gesture, Tick(10)), Some(Screen::Temperature));

        // Bit 1 is its left swipe
        driver.i2c.raise(1 << 1, 0);
        let gesture = driver.read_gesture().unwrap();
        assert_eq!(gesture, Gesture::Left);
        assert_eq!(cycle.step(gesture, Tick(20)), Some(Screen::Clock));

        // Bits 2 and 3 are its up and down
        driver.i2c.raise(1 << 2, 0);
        assert_eq!(driver.read_gesture(), Ok(Gesture::Up));
        driver.i2c.raise(1 << 3, 0);
        assert_eq!(driver.read_gesture(), Ok(Gesture::Down));
    }

    #[test]
    fn test_decode_each_flag() {
        let cases = [
            (FLAG_UP, Gesture::Up),
            (FLAG_DOWN, Gesture::Down),
            (FLAG_LEFT, Gesture::Left),
            (FLAG_RIGHT, Gesture::Right),
            (FLAG_FORWARD, Gesture::Forward),
            (FLAG_BACKWARD, Gesture::Backward),
            (FLAG_CLOCKWISE, Gesture::Clockwise),
            (FLAG_ANTICLOCKWISE, Gesture::AntiClockwise),
        ];
        for (flags, expected) in cases {
            assert_eq!(decode_flags(flags, 0), expected);
        }
        assert_eq!(decode_flags(0, 0), Gesture::None);
        assert_eq!(decode_flags(0, FLAG_WAVE), Gesture::Wave);
    }

    #[test]
    fn test_decode_priority() {
        assert_eq!(decode_flags(FLAG_LEFT | FLAG_RIGHT, 0), Gesture::Left);
        assert_eq!(decode_flags(FLAG_RIGHT | FLAG_CLOCKWISE, FLAG_WAVE), Gesture::Right);
        // Unused high bits of the second register are ignored
        assert_eq!(decode_flags(0, 0xFE), Gesture::None);
    }

    #[test]
    fn test_orientation_apply() {
        assert_eq!(Orientation::Normal.apply(Gesture::Left), Gesture::Left);
        assert_eq!(Orientation::Rotated180.apply(Gesture::Right), Gesture::Left);
        assert_eq!(Orientation::Rotated180.apply(Gesture::Wave), Gesture::Wave);
        assert_eq!(Orientation::Rotated90.apply(Gesture::Up), Gesture::Right);
        assert_eq!(Orientation::Rotated270.apply(Gesture::Up), Gesture::Left);
        assert_eq!(Orientation::Rotated270.apply(Gesture::Clockwise), Gesture::Clockwise);
    }
}

//! Wrapping millisecond tick used for relative timing.
//!
//! A [`Tick`] is a 32-bit millisecond counter that wraps roughly every
//! 49.7 days. Only differences between ticks are meaningful, and they are
//! computed with wrapping subtraction so the wrap point is invisible as long
//! as the two ticks are less than `u32::MAX` milliseconds apart.

/// Monotonic millisecond counter value.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick(pub u32);

impl Tick {
    /// Tick from a raw millisecond count.
    #[inline]
    pub const fn from_millis(ms: u32) -> Self { Self(ms) }

    /// Truncate a 64-bit uptime in milliseconds to a wrapping tick.
    #[inline]
    pub const fn from_uptime_millis(ms: u64) -> Self { Self(ms as u32) }

    /// Raw millisecond count.
    #[inline]
    pub const fn as_millis(self) -> u32 { self.0 }

    /// Tick `ms` milliseconds later, wrapping at `u32::MAX`.
    #[inline]
    pub const fn wrapping_add(
        self,
        ms: u32,
    ) -> Self {
        Self(self.0.wrapping_add(ms))
    }

    /// Milliseconds elapsed since `earlier`.
    #[inline]
    pub const fn millis_since(
        self,
        earlier: Self,
    ) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic time points and durations in clock ticks.
//!
//! [`HostTime`] is a reading from a [`Clock`](crate::clock::Clock). Readings
//! are only comparable within one process run; they carry no meaning across
//! runs. [`Timebase`] converts ticks to nanoseconds for display.

use core::fmt;

/// A point in time expressed as monotonic clock ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
///
/// `nanoseconds = ticks * numer / denom`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// A timebase where ticks are already nanoseconds (1:1).
    ///
    /// This is what [`StdClock`](crate::clock::StdClock) produces.
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let wide = ticks as u128 * self.numer as u128 / self.denom as u128;
        wide as u64
    }

    /// Converts a tick count to fractional microseconds.
    #[inline]
    #[must_use]
    pub const fn ticks_to_micros(self, ticks: u64) -> f64 {
        self.ticks_to_nanos(ticks) as f64 / 1000.0
    }
}

impl Default for Timebase {
    fn default() -> Self {
        Self::NANOS
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

/// A duration in clock ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_timebase_is_nanoseconds() {
        let tb = Timebase::NANOS;
        assert_eq!(tb.ticks_to_nanos(1_500), 1_500, "identity timebase");
        assert_eq!(tb.ticks_to_micros(2_500), 2.5);
    }

    #[test]
    fn scaled_timebase() {
        // 24 MHz tick source: 125/3 ns per tick.
        let tb = Timebase {
            numer: 125,
            denom: 3,
        };
        assert_eq!(tb.ticks_to_nanos(24_000_000), 1_000_000_000, "24 MHz → 1s");
        assert_eq!(tb.ticks_to_micros(24), 1.0);
    }

    #[test]
    fn large_tick_counts_do_not_overflow() {
        let tb = Timebase {
            numer: 125,
            denom: 3,
        };
        let _nanos = tb.ticks_to_nanos(u64::MAX / 2);
    }

    #[test]
    fn duration_since_saturates() {
        let t = HostTime(1000);
        assert_eq!(t.saturating_duration_since(HostTime(1500)), Duration::ZERO);
        assert_eq!(t.saturating_duration_since(HostTime(400)), Duration(600));
        assert_eq!(
            HostTime(u64::MAX).saturating_duration_since(HostTime(0)),
            Duration(u64::MAX)
        );
    }
}

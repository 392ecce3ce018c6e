// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic clocks for layout diagnostics.
//!
//! The attributed-tree builder reads a [`Clock`] twice per node to measure
//! how long that node's layout took (including all descendants). The core is
//! `no_std`, so the clock is supplied by the caller:
//!
//! - [`StdClock`] (requires `std`) reads `std::time::Instant`.
//! - [`ManualClock`] advances by a fixed step on every read, which makes
//!   durations deterministic in tests and replays.

use core::cell::Cell;

use crate::time::{HostTime, Timebase};

/// A source of monotonic [`HostTime`] readings.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> HostTime;

    /// Returns the conversion from this clock's ticks to nanoseconds.
    fn timebase(&self) -> Timebase {
        Timebase::NANOS
    }
}

/// A clock that advances by `step` ticks every time it is read.
///
/// The first read returns the start time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    next: Cell<u64>,
    step: u64,
}

impl ManualClock {
    /// Creates a clock starting at `start` and advancing by `step` per read.
    #[must_use]
    pub const fn new(start: u64, step: u64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    /// Returns the time the next read will produce, without advancing.
    #[must_use]
    pub fn peek(&self) -> HostTime {
        HostTime(self.next.get())
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> HostTime {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        HostTime(now)
    }
}

/// A clock backed by [`std::time::Instant`], in nanoseconds since creation.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock whose zero is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> HostTime {
        let nanos = self.origin.elapsed().as_nanos();
        HostTime(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_steps_per_read() {
        let clock = ManualClock::new(100, 10);
        assert_eq!(clock.now(), HostTime(100));
        assert_eq!(clock.now(), HostTime(110));
        assert_eq!(clock.peek(), HostTime(120));
        assert_eq!(clock.timebase(), Timebase::NANOS);
    }

    #[test]
    fn manual_clock_saturates() {
        let clock = ManualClock::new(u64::MAX - 1, 5);
        assert_eq!(clock.now(), HostTime(u64::MAX - 1));
        assert_eq!(clock.now(), HostTime(u64::MAX));
        assert_eq!(clock.now(), HostTime(u64::MAX));
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_clock_is_monotonic() {
        let clock = StdClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "std clock went backwards: {a:?} then {b:?}");
    }
}

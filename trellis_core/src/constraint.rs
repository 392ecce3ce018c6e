// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size constraints passed to intrinsic measurement.
//!
//! A [`SizeConstraint`] is pure data: one [`Axis`] per dimension, each either
//! bounded above or unconstrained. Nothing in this crate checks that a
//! measured size respects the bound; an element that returns a larger size
//! simply produces oversized geometry.

use kurbo::Size;

/// A limit along one dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    /// The measured extent should be at most this value.
    AtMost(f64),
    /// No limit.
    Unconstrained,
}

impl Axis {
    /// Returns the bound, or `f64::INFINITY` when unconstrained.
    #[inline]
    #[must_use]
    pub const fn maximum(self) -> f64 {
        match self {
            Self::AtMost(value) => value,
            Self::Unconstrained => f64::INFINITY,
        }
    }

    /// Returns the bound, or `None` when unconstrained.
    #[inline]
    #[must_use]
    pub const fn constrained_value(self) -> Option<f64> {
        match self {
            Self::AtMost(value) => Some(value),
            Self::Unconstrained => None,
        }
    }

    /// Whether this axis carries a bound.
    #[inline]
    #[must_use]
    pub const fn is_constrained(self) -> bool {
        matches!(self, Self::AtMost(_))
    }

    /// Shrinks the bound by `amount`, never below zero.
    ///
    /// Unconstrained axes stay unconstrained.
    #[must_use]
    pub fn inset(self, amount: f64) -> Self {
        match self {
            Self::AtMost(value) => Self::AtMost((value - amount).max(0.0)),
            Self::Unconstrained => Self::Unconstrained,
        }
    }
}

/// Per-axis limits handed to [`Element::measure`](crate::element::Element::measure).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeConstraint {
    /// Horizontal limit.
    pub width: Axis,
    /// Vertical limit.
    pub height: Axis,
}

impl SizeConstraint {
    /// No limit on either axis.
    pub const UNCONSTRAINED: Self = Self {
        width: Axis::Unconstrained,
        height: Axis::Unconstrained,
    };

    /// Bounds both axes by `size`.
    #[inline]
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            width: Axis::AtMost(size.width),
            height: Axis::AtMost(size.height),
        }
    }

    /// Creates a constraint from explicit axes.
    #[inline]
    #[must_use]
    pub const fn from_axes(width: Axis, height: Axis) -> Self {
        Self { width, height }
    }

    /// Returns the largest size allowed, with infinite extents on
    /// unconstrained axes.
    #[inline]
    #[must_use]
    pub const fn maximum(self) -> Size {
        Size::new(self.width.maximum(), self.height.maximum())
    }

    /// Shrinks both bounds, e.g. to account for padding.
    #[must_use]
    pub fn inset(self, width: f64, height: f64) -> Self {
        Self {
            width: self.width.inset(width),
            height: self.height.inset(height),
        }
    }
}

impl From<Size> for SizeConstraint {
    fn from(size: Size) -> Self {
        Self::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_maximum_is_infinite() {
        let max = SizeConstraint::UNCONSTRAINED.maximum();
        assert!(max.width.is_infinite());
        assert!(max.height.is_infinite());
        assert!(!SizeConstraint::UNCONSTRAINED.width.is_constrained());
    }

    #[test]
    fn bounded_axes() {
        let c = SizeConstraint::new(Size::new(100.0, 40.0));
        assert_eq!(c.width, Axis::AtMost(100.0));
        assert_eq!(c.height.constrained_value(), Some(40.0));
        assert_eq!(c.maximum(), Size::new(100.0, 40.0));
        assert_eq!(
            SizeConstraint::from(Size::ZERO),
            SizeConstraint::new(Size::ZERO)
        );
    }

    #[test]
    fn inset_clamps_at_zero() {
        let c = SizeConstraint::from_axes(Axis::AtMost(10.0), Axis::Unconstrained);
        let c = c.inset(15.0, 5.0);
        assert_eq!(c.width, Axis::AtMost(0.0));
        assert_eq!(c.height, Axis::Unconstrained);
    }
}

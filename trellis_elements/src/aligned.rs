// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size};
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;

/// Horizontal placement of a child inside its parent's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Against the left edge.
    Leading,
    /// Centered.
    #[default]
    Center,
    /// Against the right edge.
    Trailing,
    /// Stretched to the full width.
    Fill,
}

/// Vertical placement of a child inside its parent's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Against the top edge.
    Top,
    /// Centered.
    #[default]
    Center,
    /// Against the bottom edge.
    Bottom,
    /// Stretched to the full height.
    Fill,
}

impl HorizontalAlignment {
    /// Returns `(x, width)` for content of `measured` width in `min..max`.
    fn place(self, min: f64, max: f64, measured: f64) -> (f64, f64) {
        let available = max - min;
        let width = measured.min(available);
        match self {
            Self::Leading => (min, width),
            Self::Center => (min + (available - width) / 2.0, width),
            Self::Trailing => (max - width, width),
            Self::Fill => (min, available),
        }
    }
}

impl VerticalAlignment {
    /// Returns `(y, height)` for content of `measured` height in `min..max`.
    fn place(self, min: f64, max: f64, measured: f64) -> (f64, f64) {
        let available = max - min;
        let height = measured.min(available);
        match self {
            Self::Top => (min, height),
            Self::Center => (min + (available - height) / 2.0, height),
            Self::Bottom => (max - height, height),
            Self::Fill => (min, available),
        }
    }
}

/// Places a single child inside its bounds by alignment.
///
/// The child is measured against the bounds, clamped to them, and then
/// positioned on each axis independently.
#[derive(Clone)]
pub struct Aligned {
    /// Horizontal placement.
    pub horizontal: HorizontalAlignment,
    /// Vertical placement.
    pub vertical: VerticalAlignment,
    /// The aligned child.
    pub wrapped: ElementRef,
}

impl Aligned {
    /// Aligns `wrapped` within the bounds this element is given.
    #[must_use]
    pub fn new(
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
        wrapped: ElementRef,
    ) -> Self {
        Self {
            horizontal,
            vertical,
            wrapped,
        }
    }

    /// Frame of a child measuring `measured` inside `bounds`.
    fn child_frame(&self, bounds: Rect, measured: Size) -> Rect {
        let (x, width) = self.horizontal.place(bounds.x0, bounds.x1, measured.width);
        let (y, height) = self.vertical.place(bounds.y0, bounds.y1, measured.height);
        Rect::new(x, y, x + width, y + height)
    }
}

impl Element for Aligned {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.wrapped.measure(constraint)
    }

    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        let bounds = attributes.bounds;
        let measured = self.wrapped.measure(SizeConstraint::new(bounds.size()));
        crate::single_child(
            &self.wrapped,
            LayoutAttributes::new(self.child_frame(bounds, measured)),
        )
    }

    fn type_name(&self) -> &'static str {
        "Aligned"
    }
}

impl fmt::Debug for Aligned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aligned")
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .field("wrapped", &self.wrapped.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{build, leaf_frame};
    use crate::{ElementExt, Spacer};

    fn place(h: HorizontalAlignment, v: VerticalAlignment, child: Spacer) -> Rect {
        let frame = Rect::new(0.0, 0.0, 100.0, 60.0);
        let tree = build(child.aligned(h, v).into_ref(), frame);
        leaf_frame(&tree)
    }

    #[test]
    fn corners_and_center() {
        let s = Spacer::new(20.0, 10.0);
        assert_eq!(
            place(HorizontalAlignment::Leading, VerticalAlignment::Top, s),
            Rect::new(0.0, 0.0, 20.0, 10.0)
        );
        assert_eq!(
            place(HorizontalAlignment::Trailing, VerticalAlignment::Bottom, s),
            Rect::new(80.0, 50.0, 100.0, 60.0)
        );
        assert_eq!(
            place(HorizontalAlignment::Center, VerticalAlignment::Center, s),
            Rect::new(40.0, 25.0, 60.0, 35.0)
        );
    }

    #[test]
    fn fill_stretches_one_axis() {
        let s = Spacer::new(20.0, 10.0);
        assert_eq!(
            place(HorizontalAlignment::Fill, VerticalAlignment::Top, s),
            Rect::new(0.0, 0.0, 100.0, 10.0)
        );
        assert_eq!(
            place(HorizontalAlignment::Leading, VerticalAlignment::Fill, s),
            Rect::new(0.0, 0.0, 20.0, 60.0)
        );
    }

    #[test]
    fn oversized_child_is_clamped() {
        let s = Spacer::new(500.0, 500.0);
        assert_eq!(
            place(HorizontalAlignment::Trailing, VerticalAlignment::Bottom, s),
            Rect::new(0.0, 0.0, 100.0, 60.0)
        );
    }

    #[test]
    fn measure_passes_through() {
        let s = Spacer::new(7.0, 9.0);
        let aligned = s.aligned(HorizontalAlignment::Fill, VerticalAlignment::Fill);
        let size = aligned.measure(SizeConstraint::UNCONSTRAINED);
        assert_eq!(size, Size::new(7.0, 9.0));
    }
}

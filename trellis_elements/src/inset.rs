// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size};
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;

/// Distances from each edge of a box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Right edge.
    pub right: f64,
}

impl EdgeInsets {
    /// No inset.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates insets from each edge.
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every edge.
    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Total horizontal inset.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Shrinks `rect` by these insets, never producing a negative size.
    #[must_use]
    pub fn apply(&self, rect: Rect) -> Rect {
        let x0 = rect.x0 + self.left;
        let y0 = rect.y0 + self.top;
        let x1 = (rect.x1 - self.right).max(x0);
        let y1 = (rect.y1 - self.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Surrounds a single child with empty space.
#[derive(Clone)]
pub struct Inset {
    /// Space around the child.
    pub insets: EdgeInsets,
    /// The inset child.
    pub wrapped: ElementRef,
}

impl Inset {
    /// Insets `wrapped` by `insets`.
    #[must_use]
    pub fn new(insets: EdgeInsets, wrapped: ElementRef) -> Self {
        Self { insets, wrapped }
    }
}

impl Element for Inset {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        let inner = constraint.inset(self.insets.horizontal(), self.insets.vertical());
        let child = self.wrapped.measure(inner);
        Size::new(
            child.width + self.insets.horizontal(),
            child.height + self.insets.vertical(),
        )
    }

    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        crate::fill(&self.wrapped, self.insets.apply(attributes.bounds))
    }

    fn type_name(&self) -> &'static str {
        "Inset"
    }
}

impl fmt::Debug for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inset")
            .field("insets", &self.insets)
            .field("wrapped", &self.wrapped.type_name())
            .finish()
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, LayoutChild};
use trellis_core::geometry::LayoutAttributes;

/// Empty space of a fixed size.
///
/// The size is reported as-is, even when it exceeds the constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacer {
    /// Size reported by `measure`.
    pub size: Size,
}

impl Spacer {
    /// Creates a spacer of the given dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl From<Size> for Spacer {
    fn from(size: Size) -> Self {
        Self { size }
    }
}

impl Element for Spacer {
    fn measure(&self, _constraint: SizeConstraint) -> Size {
        self.size
    }

    fn layout(&self, _attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        Vec::new()
    }

    fn type_name(&self) -> &'static str {
        "Spacer"
    }
}

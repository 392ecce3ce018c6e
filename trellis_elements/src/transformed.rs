// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Size};
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;

/// Attaches an affine transform to a single child filling the bounds.
///
/// The transform does not affect measurement or the child's frame; it is
/// carried on the child's attributes for the rendering layer to apply.
#[derive(Clone)]
pub struct Transformed {
    /// Transform applied to the child.
    pub transform: Affine,
    /// The transformed child.
    pub wrapped: ElementRef,
}

impl Transformed {
    /// Transforms `wrapped` by `transform`.
    #[must_use]
    pub fn new(transform: Affine, wrapped: ElementRef) -> Self {
        Self { transform, wrapped }
    }
}

impl Element for Transformed {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.wrapped.measure(constraint)
    }

    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        crate::single_child(
            &self.wrapped,
            LayoutAttributes::new(attributes.bounds).with_transform(self.transform),
        )
    }

    fn type_name(&self) -> &'static str {
        "Transformed"
    }
}

impl fmt::Debug for Transformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformed")
            .field("transform", &self.transform)
            .field("wrapped", &self.wrapped.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use trellis_core::debugging::Debugging;
    use trellis_core::view::Color;

    use crate::testing::build;
    use crate::{Decorated, ElementExt};

    #[test]
    fn nested_transforms_compose_parent_first() {
        let rotate = Affine::rotate(0.5);
        let scale = Affine::scale(3.0);
        let element = Decorated::new(Color::BLACK)
            .transformed(scale)
            .transformed(rotate)
            .into_ref();
        let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
        let entries = build(element, frame).resolve(&Debugging::NONE);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1.layout_attributes.transform, rotate * scale);
        assert_eq!(entries[0].1.layout_attributes.frame, frame);
    }
}

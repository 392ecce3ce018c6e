// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;
use trellis_core::identity::IdentifierFactory;

/// Stacks children on top of each other, each filling the bounds.
///
/// Later children draw above earlier ones.
#[derive(Clone, Default)]
pub struct Overlay {
    /// Children from back to front.
    pub children: Vec<ElementRef>,
}

impl Overlay {
    /// Creates an overlay of `children`.
    #[must_use]
    pub fn new(children: impl IntoIterator<Item = ElementRef>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Adds a child on top.
    #[must_use]
    pub fn with_child(mut self, child: ElementRef) -> Self {
        self.children.push(child);
        self
    }
}

impl Element for Overlay {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.children
            .iter()
            .map(|child| child.measure(constraint))
            .fold(Size::ZERO, |acc, s| {
                Size::new(acc.width.max(s.width), acc.height.max(s.height))
            })
    }

    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        let mut ids = IdentifierFactory::new();
        self.children
            .iter()
            .map(|child| {
                LayoutChild::new(
                    ids.next_for(child.as_ref()),
                    LayoutAttributes::new(attributes.bounds),
                    child.clone(),
                )
            })
            .collect()
    }

    fn type_name(&self) -> &'static str {
        "Overlay"
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.children.iter().map(|e| e.type_name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use kurbo::Rect;
    use trellis_core::debugging::Debugging;
    use trellis_core::view::Color;

    use crate::testing::build;
    use crate::{Decorated, ElementExt, Spacer};

    #[test]
    fn measure_is_componentwise_max() {
        let overlay = Overlay::new([
            Spacer::new(10.0, 40.0).into_ref(),
            Spacer::new(30.0, 5.0).into_ref(),
        ]);
        let unconstrained = SizeConstraint::UNCONSTRAINED;
        assert_eq!(overlay.measure(unconstrained), Size::new(30.0, 40.0));
        assert_eq!(Overlay::default().measure(unconstrained), Size::ZERO);
    }

    #[test]
    fn siblings_of_one_type_get_distinct_identifiers() {
        let overlay = Overlay::default()
            .with_child(Decorated::new(Color::BLACK).into_ref())
            .with_child(Spacer::new(1.0, 1.0).into_ref())
            .with_child(Decorated::new(Color::WHITE).into_ref());
        let frame = Rect::new(5.0, 5.0, 25.0, 25.0);
        let tree = build(overlay.into_ref(), frame);

        let bounds = Rect::new(0.0, 0.0, 20.0, 20.0);
        for (_, child) in &tree.children {
            assert_eq!(child.layout_attributes.frame, bounds);
        }

        let entries = tree.resolve(&Debugging::NONE);
        let paths: Vec<_> = entries.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(paths, ["Decorated", "Decorated#1"]);
        // Re-rooted from the overlay's bounds into the root's parent space.
        assert_eq!(entries[1].1.layout_attributes.frame, frame);
        assert_eq!(entries[1].1.content.background, Some(Color::WHITE));
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size};
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;
use trellis_core::view::{Color, ViewDescription};

/// A view-backed box, optionally wrapping a child that fills it.
#[derive(Clone)]
pub struct Decorated {
    /// Fill color.
    pub background: Color,
    /// Corner radius in points.
    pub corner_radius: f64,
    /// Whether the wrapped child is clipped to the box.
    pub clips: bool,
    /// Content drawn on top of the background.
    pub wrapped: Option<ElementRef>,
}

impl Decorated {
    /// View type reported in render descriptions.
    pub const VIEW_TYPE: &'static str = "Decorated";

    /// Creates an empty box with the given fill.
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self {
            background,
            corner_radius: 0.0,
            clips: false,
            wrapped: None,
        }
    }

    /// Sets the content drawn on top of the background.
    #[must_use]
    pub fn wrapping(mut self, element: ElementRef) -> Self {
        self.wrapped = Some(element);
        self
    }

    /// Rounds the corners.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Clips the content to the box.
    #[must_use]
    pub fn clipping(mut self, clips: bool) -> Self {
        self.clips = clips;
        self
    }
}

impl Element for Decorated {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.wrapped
            .as_ref()
            .map_or(Size::ZERO, |child| child.measure(constraint))
    }

    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        match &self.wrapped {
            Some(child) => crate::fill(child, attributes.bounds),
            None => Vec::new(),
        }
    }

    fn render_description(
        &self,
        _bounds: Rect,
        _subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription> {
        let description = ViewDescription::new(Self::VIEW_TYPE)
            .with_background(self.background)
            .with_corner_radius(self.corner_radius)
            .clipping(self.clips);
        Some(description)
    }

    fn type_name(&self) -> &'static str {
        "Decorated"
    }
}

impl fmt::Debug for Decorated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated")
            .field("background", &self.background)
            .field("corner_radius", &self.corner_radius)
            .field("clips", &self.clips)
            .field("wrapped", &self.wrapped.as_ref().map(|e| e.type_name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use trellis_core::debugging::Debugging;

    use crate::testing::build;
    use crate::{ElementExt, Spacer};

    #[test]
    fn measures_wrapped_child() {
        let unconstrained = SizeConstraint::UNCONSTRAINED;
        let empty = Decorated::new(Color::BLACK);
        assert_eq!(empty.measure(unconstrained), Size::ZERO);

        let filled = Spacer::new(12.0, 4.0).decorated(Color::BLACK);
        assert_eq!(filled.measure(unconstrained), Size::new(12.0, 4.0));
    }

    #[test]
    fn resolves_to_one_view_with_child_filling_bounds() {
        let inner = Decorated::new(Color::WHITE)
            .with_corner_radius(3.0)
            .clipping(true);
        let outer = inner.decorated(Color::BLACK);
        let tree = build(outer.into_ref(), Rect::new(10.0, 10.0, 50.0, 30.0));

        let inner_node = &tree.children[0].1;
        let bounds = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(inner_node.layout_attributes.frame, bounds);

        let entries = tree.resolve(&Debugging::NONE);
        assert_eq!(entries.len(), 1);
        let outer_view = &entries[0].1;
        assert_eq!(outer_view.content.background, Some(Color::BLACK));
        let inner_view = &outer_view.children[0].1;
        assert_eq!(inner_view.content.corner_radius, 3.0);
        assert!(inner_view.content.clips_to_bounds);
        assert_eq!(entries[0].1.children[0].0.to_string(), "Decorated");
    }
}

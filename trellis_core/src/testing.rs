// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element fixtures shared by unit tests.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::constraint::SizeConstraint;
use crate::element::{Element, ElementRef, LayoutChild};
use crate::geometry::LayoutAttributes;
use crate::identity::IdentifierFactory;
use crate::view::ViewDescription;

/// An element whose children sit at fixed frames.
pub(crate) struct TestNode {
    name: &'static str,
    size: Size,
    description: Option<ViewDescription>,
    children: Vec<(LayoutAttributes, ElementRef)>,
}

impl TestNode {
    /// A node that renders nothing itself.
    pub(crate) fn group(name: &'static str) -> Self {
        Self {
            name,
            size: Size::ZERO,
            description: None,
            children: Vec::new(),
        }
    }

    /// A node backed by a view of type `name`.
    pub(crate) fn view(name: &'static str) -> Self {
        Self {
            description: Some(ViewDescription::new(name)),
            ..Self::group(name)
        }
    }

    pub(crate) fn sized(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub(crate) fn child(self, frame: Rect, child: Self) -> Self {
        self.child_with(LayoutAttributes::new(frame), child)
    }

    pub(crate) fn child_with(mut self, attributes: LayoutAttributes, child: Self) -> Self {
        self.children.push((attributes, child.into_ref()));
        self
    }

    pub(crate) fn into_ref(self) -> ElementRef {
        Arc::new(self)
    }
}

impl Element for TestNode {
    fn measure(&self, _constraint: SizeConstraint) -> Size {
        self.size
    }

    fn layout(&self, _attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        let mut ids = IdentifierFactory::new();
        self.children
            .iter()
            .map(|(attributes, element)| {
                let id = ids.next_for(element.as_ref());
                LayoutChild::new(id, *attributes, element.clone())
            })
            .collect()
    }

    fn render_description(
        &self,
        _bounds: Rect,
        _subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription> {
        self.description.clone()
    }

    fn type_name(&self) -> &'static str {
        self.name
    }
}

/// Shorthand for a rect at `(x, y)` with size `(w, h)`.
pub(crate) fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size((x, y), (w, h))
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attributed tree: every element annotated with its resolved geometry.
//!
//! [`AttributedNode::build`] walks the element tree top-down. For each node
//! it calls the element's [`layout`](crate::element::Element::layout) with
//! the node's attributes, then recursively builds each returned child.
//!
//! Each node records a [`DiagnosticInfo::layout_duration`] spanning its whole
//! recursive build, so the value is *subtree-inclusive*: a parent's duration
//! always covers its descendants' durations.
//!
//! The tree owns its children exclusively and is built fresh for every pass.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::clock::Clock;
use crate::element::ElementRef;
use crate::geometry::LayoutAttributes;
use crate::identity::ElementIdentifier;
use crate::time::Duration;
use crate::trace::{NodeLayoutEvent, Tracer, saturating_u32};

/// Diagnostics captured while building a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticInfo {
    /// Time spent laying out this node and all of its descendants.
    pub layout_duration: Duration,
}

/// One node of the attributed tree.
#[derive(Clone)]
pub struct AttributedNode {
    /// The element that was laid out.
    pub element: ElementRef,
    /// Geometry assigned to the element.
    pub layout_attributes: LayoutAttributes,
    /// Build diagnostics.
    pub diagnostic: DiagnosticInfo,
    /// Children in the order the element's layout returned them.
    pub children: Vec<(ElementIdentifier, Self)>,
}

impl AttributedNode {
    /// Builds the attributed tree for `element` with the given root
    /// attributes.
    #[must_use]
    pub fn build(element: ElementRef, attributes: LayoutAttributes, clock: &dyn Clock) -> Self {
        Self::build_traced(element, attributes, clock, &mut Tracer::none())
    }

    /// Builds the attributed tree for `element` laid out in `frame`.
    #[must_use]
    pub fn build_in_frame(element: ElementRef, frame: Rect, clock: &dyn Clock) -> Self {
        Self::build(element, LayoutAttributes::new(frame), clock)
    }

    /// Like [`build`](Self::build), emitting a
    /// [`NodeLayoutEvent`] per node to `tracer`.
    #[must_use]
    pub fn build_traced(
        element: ElementRef,
        attributes: LayoutAttributes,
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        Self::build_at_depth(element, attributes, clock, tracer, 0)
    }

    fn build_at_depth(
        element: ElementRef,
        attributes: LayoutAttributes,
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
        depth: u32,
    ) -> Self {
        let start = clock.now();
        let children: Vec<(ElementIdentifier, Self)> = element
            .layout(&attributes)
            .into_iter()
            .map(|child| {
                let node =
                    Self::build_at_depth(child.element, child.attributes, clock, tracer, depth + 1);
                (child.identifier, node)
            })
            .collect();
        let end = clock.now();

        tracer.node_layout(&NodeLayoutEvent {
            depth,
            element_type: element.type_name(),
            child_count: saturating_u32(children.len()),
            start,
            end,
        });

        Self {
            element,
            layout_attributes: attributes,
            diagnostic: DiagnosticInfo {
                layout_duration: end.saturating_duration_since(start),
            },
            children,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }

    /// Depth of this subtree; a node without children has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Visits every node in pre-order with its depth below `self`.
    pub fn walk(&self, visit: &mut impl FnMut(usize, &Self)) {
        self.walk_at(0, visit);
    }

    fn walk_at(&self, depth: usize, visit: &mut impl FnMut(usize, &Self)) {
        visit(depth, self);
        for (_, child) in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

impl fmt::Debug for AttributedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributedNode")
            .field("element", &self.element.type_name())
            .field("layout_attributes", &self.layout_attributes)
            .field("diagnostic", &self.diagnostic)
            .field("children", &self.children)
            .finish()
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element capability interface.
//!
//! Every layout strategy (stacking, insetting, alignment, absolute placement,
//! plain pass-through) is an independent implementer of [`Element`]. The core
//! only ever calls three things on it:
//!
//! - [`measure`](Element::measure): intrinsic size under a [`SizeConstraint`].
//! - [`layout`](Element::layout): ordered children with their attributes,
//!   expressed relative to this element's own coordinate space.
//! - [`render_description`](Element::render_description): what to draw, if
//!   anything.
//!
//! All three are assumed deterministic and free of side effects for a given
//! input.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size};

use crate::constraint::SizeConstraint;
use crate::geometry::LayoutAttributes;
use crate::identity::ElementIdentifier;
use crate::view::ViewDescription;

/// A declarative UI node, independent of any coordinate space.
pub trait Element: Send + Sync {
    /// Returns the size this element would like to be under `constraint`.
    ///
    /// The result is not checked against the constraint.
    fn measure(&self, constraint: SizeConstraint) -> Size;

    /// Positions this element's children, given the attributes assigned to
    /// the element itself.
    ///
    /// Child frames are relative to `attributes.bounds`. Identifiers must be
    /// unique among the returned siblings.
    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild>;

    /// Returns the description of the view backing this element, or `None`
    /// if the element renders nothing itself.
    ///
    /// `subtree_extent` is the union of the direct children's frames, or
    /// `None` when there are no children.
    fn render_description(
        &self,
        bounds: Rect,
        subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription> {
        _ = (bounds, subtree_extent);
        None
    }

    /// Name used in identifiers, debug overlays, and traces.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Shared handle to an element.
pub type ElementRef = Arc<dyn Element>;

/// One child produced by [`Element::layout`].
#[derive(Clone)]
pub struct LayoutChild {
    /// Identity among siblings.
    pub identifier: ElementIdentifier,
    /// Attributes assigned to the child.
    pub attributes: LayoutAttributes,
    /// The child element.
    pub element: ElementRef,
}

impl LayoutChild {
    /// Creates a child entry.
    #[must_use]
    pub fn new(
        identifier: ElementIdentifier,
        attributes: LayoutAttributes,
        element: ElementRef,
    ) -> Self {
        Self {
            identifier,
            attributes,
            element,
        }
    }
}

impl fmt::Debug for LayoutChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutChild")
            .field("identifier", &self.identifier)
            .field("attributes", &self.attributes)
            .field("element", &self.element.type_name())
            .finish()
    }
}

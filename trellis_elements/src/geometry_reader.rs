// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use trellis_core::constraint::SizeConstraint;
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;

/// What a [`GeometryReader`]'s builder can see about its surroundings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryProxy {
    /// During measurement, the constraint being measured against. During
    /// layout, the reader's bounds as an `AtMost` constraint.
    pub constraint: SizeConstraint,
}

impl GeometryProxy {
    /// Measures `element` against this proxy's constraint.
    #[must_use]
    pub fn measure(&self, element: &dyn Element) -> Size {
        element.measure(self.constraint)
    }
}

type Builder = dyn Fn(&GeometryProxy) -> ElementRef + Send + Sync;

/// Builds its content from the space it is offered.
///
/// The builder runs once per `measure` and once per `layout`, each time with
/// the constraint that applies. Its result fills the reader's bounds.
#[derive(Clone)]
pub struct GeometryReader {
    content: Arc<Builder>,
}

impl GeometryReader {
    /// Creates a reader whose content is produced by `content`.
    pub fn new(content: impl Fn(&GeometryProxy) -> ElementRef + Send + Sync + 'static) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    /// Runs the builder for `constraint`.
    #[must_use]
    pub fn content(&self, constraint: SizeConstraint) -> ElementRef {
        (self.content)(&GeometryProxy { constraint })
    }
}

impl Element for GeometryReader {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.content(constraint).measure(constraint)
    }

    fn layout(&self, attributes: &LayoutAttributes) -> Vec<LayoutChild> {
        let bounds = attributes.bounds;
        let child = self.content(SizeConstraint::new(bounds.size()));
        crate::fill(&child, bounds)
    }

    fn type_name(&self) -> &'static str {
        "GeometryReader"
    }
}

impl fmt::Debug for GeometryReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryReader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    use crate::testing::{build, leaf_frame};
    use crate::{ElementExt, HorizontalAlignment, Spacer, VerticalAlignment};

    #[test]
    fn measures_by_constraint() {
        let reader = GeometryReader::new(|geometry| {
            if geometry.constraint.width.is_constrained() {
                Spacer::new(100.0, 100.0).into_ref()
            } else {
                Spacer::new(200.0, 200.0).into_ref()
            }
        });

        assert_eq!(
            reader.measure(SizeConstraint::UNCONSTRAINED),
            Size::new(200.0, 200.0)
        );
        assert_eq!(
            reader.measure(SizeConstraint::new(Size::ZERO)),
            Size::new(100.0, 100.0)
        );
    }

    #[test]
    fn lays_out_against_bounds() {
        let reader = GeometryReader::new(|geometry| {
            let max = geometry.constraint.maximum();
            Spacer::new(max.width / 2.0, max.height / 2.0)
                .aligned(HorizontalAlignment::Trailing, VerticalAlignment::Bottom)
                .into_ref()
        });

        let tree = build(reader.into_ref(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(leaf_frame(&tree), Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn proxy_measures_with_its_constraint() {
        let proxy = GeometryProxy {
            constraint: SizeConstraint::new(Size::new(10.0, 10.0)),
        };
        assert_eq!(proxy.measure(&Spacer::new(3.0, 4.0)), Size::new(3.0, 4.0));
    }
}

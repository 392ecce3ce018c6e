// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved geometry for one node in one layout pass.
//!
//! A node's `frame` is expressed in its parent's coordinate space. Its
//! `bounds` is the interior box that children's frames are relative to; by
//! default it is the frame's size at the origin, but an element may inset it.
//!
//! # Re-rooting
//!
//! When resolve drops a pass-through node, the geometry of that node's
//! render-node descendants was computed relative to it and has to be
//! re-expressed relative to the grandparent. [`LayoutAttributes::within`]
//! does this:
//!
//! ```text
//! frame     = child.frame + parent.frame.origin
//! transform = parent.transform * child.transform
//! opacity   = parent.opacity * child.opacity
//! hidden    = parent.hidden || child.hidden
//! ```
//!
//! Each rule is associative, so re-rooting once per skipped level while the
//! recursion unwinds gives the same result as a single re-root across all of
//! them.

use kurbo::{Affine, Point, Rect};

/// Frame, interior bounds, and compositing properties assigned to a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// Box in the parent's coordinate space.
    pub frame: Rect,
    /// Interior box exposed to children.
    pub bounds: Rect,
    /// Affine transform applied to the node and its subtree.
    pub transform: Affine,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Whether the node (and its subtree) is hidden.
    pub hidden: bool,
}

impl LayoutAttributes {
    /// Creates attributes for `frame` with bounds of the same size at the
    /// origin, identity transform, full opacity, and visible.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            bounds: Rect::from_origin_size(Point::ORIGIN, frame.size()),
            transform: Affine::IDENTITY,
            opacity: 1.0,
            hidden: false,
        }
    }

    /// Replaces the interior bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Replaces the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Replaces the hidden flag.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Origin of the frame in the parent's coordinate space.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point {
        self.frame.origin()
    }

    /// Re-expresses these attributes, currently relative to `ancestor`, in
    /// `ancestor`'s own parent space.
    #[must_use]
    pub fn within(&self, ancestor: &Self) -> Self {
        Self {
            frame: self.frame + ancestor.frame.origin().to_vec2(),
            bounds: self.bounds,
            transform: ancestor.transform * self.transform,
            opacity: ancestor.opacity * self.opacity,
            hidden: ancestor.hidden || self.hidden,
        }
    }

    /// Whether every numeric field is finite.
    ///
    /// Layout never checks this; it is here for callers that want to reject
    /// degenerate geometry before rendering.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.frame.is_finite()
            && self.bounds.is_finite()
            && self.transform.is_finite()
            && self.opacity.is_finite()
    }
}

impl Default for LayoutAttributes {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

/// Returns the union of all `frames`, or `None` if there are none.
#[must_use]
pub fn union_of_frames(frames: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    let mut frames = frames.into_iter();
    let first = frames.next()?;
    Some(frames.fold(first, |acc, frame| acc.union(frame)))
}

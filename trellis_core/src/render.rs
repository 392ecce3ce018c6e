// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening the attributed tree into render nodes.
//!
//! [`AttributedNode::resolve`] works bottom-up:
//!
//! 1. Resolve every child and prepend the child's identifier to each path it
//!    returned.
//! 2. Union the direct children's frames into the node's *subtree extent*.
//! 3. Ask the element for a render description of its bounds, then apply the
//!    [`Debugging`] overlay policy.
//! 4. With a description, the node is a render boundary: it returns a single
//!    entry at [`ElementPath::EMPTY`] that owns all the children's entries.
//! 5. Without one, the node is pass-through: it returns the children's
//!    entries directly, with each node's attributes re-rooted into this
//!    node's parent space (see [`LayoutAttributes::within`]).
//!
//! The output is a pre-order listing of render boundaries in sibling order,
//! and is never deeper than the attributed tree.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::attributed::AttributedNode;
use crate::debugging::Debugging;
use crate::geometry::{LayoutAttributes, union_of_frames};
use crate::identity::ElementPath;
use crate::view::ViewDescription;

/// A renderable node: a view description plus its geometry.
///
/// `layout_attributes` is relative to the nearest render-node ancestor (or to
/// the resolution root for top-level entries).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
    /// What to draw.
    pub content: ViewDescription,
    /// Geometry relative to the parent render node.
    pub layout_attributes: LayoutAttributes,
    /// Rendered descendants, keyed by their path from this node.
    pub children: Vec<(ElementPath, Self)>,
}

impl RenderNode {
    /// Number of render nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + count_render_nodes(&self.children)
    }
}

impl AttributedNode {
    /// Flattens this subtree into render nodes, keyed by path from `self`.
    #[must_use]
    pub fn resolve(&self, debugging: &Debugging) -> Vec<(ElementPath, RenderNode)> {
        let resolved_children: Vec<(ElementPath, RenderNode)> = self
            .children
            .iter()
            .flat_map(|(identifier, child)| {
                child
                    .resolve(debugging)
                    .into_iter()
                    .map(move |(mut path, node)| {
                        path.prepend(identifier.clone());
                        (path, node)
                    })
            })
            .collect();

        let subtree_extent = union_of_frames(
            self.children
                .iter()
                .map(|(_, child)| child.layout_attributes.frame),
        );

        match self.view_description_for_display(subtree_extent, debugging) {
            Some(content) => vec![(
                ElementPath::EMPTY,
                RenderNode {
                    content,
                    layout_attributes: self.layout_attributes,
                    children: resolved_children,
                },
            )],
            None => resolved_children
                .into_iter()
                .map(|(path, mut node)| {
                    node.layout_attributes = node.layout_attributes.within(&self.layout_attributes);
                    (path, node)
                })
                .collect(),
        }
    }

    fn view_description_for_display(
        &self,
        subtree_extent: Option<Rect>,
        debugging: &Debugging,
    ) -> Option<ViewDescription> {
        let bounds = self.layout_attributes.bounds;
        let original = self.element.render_description(bounds, subtree_extent);
        debugging.decorate(original, self.element.type_name(), bounds)
    }
}

/// Counts every render node in `entries`, including nested children.
#[must_use]
pub fn count_render_nodes(entries: &[(ElementPath, RenderNode)]) -> usize {
    entries.iter().map(|(_, node)| node.node_count()).sum()
}

/// Lists every render node in `entries` in pre-order, each with its depth
/// and its full path from the resolution root.
#[must_use]
pub fn preorder(entries: &[(ElementPath, RenderNode)]) -> Vec<(usize, ElementPath, &RenderNode)> {
    let mut out = Vec::new();
    collect_preorder(entries, &ElementPath::EMPTY, 0, &mut out);
    out
}

fn collect_preorder<'a>(
    entries: &'a [(ElementPath, RenderNode)],
    prefix: &ElementPath,
    depth: usize,
    out: &mut Vec<(usize, ElementPath, &'a RenderNode)>,
) {
    for (path, node) in entries {
        let absolute = prefix.joined(path);
        out.push((depth, absolute.clone(), node));
        collect_preorder(&node.children, &absolute, depth + 1, out);
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug overlay policy.
//!
//! [`Debugging`] is threaded explicitly through every resolve call. It can
//! wrap a node's render description in a synthesized overlay that outlines
//! the node's bounds; layout is never affected.

use kurbo::Rect;

use crate::view::ViewDescription;

/// Which nodes get a debug overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayMode {
    /// No overlays; descriptions pass through unchanged.
    #[default]
    None,
    /// Every node is wrapped, including pass-through nodes, so every node
    /// becomes a render node.
    All,
    /// Only nodes that already have a description are wrapped.
    ViewBackedOnly,
}

/// Debugging options for a resolve pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Debugging {
    /// Overlay policy.
    pub overlay_mode: OverlayMode,
}

impl Debugging {
    /// No debugging.
    pub const NONE: Self = Self::new(OverlayMode::None);

    /// Creates options with the given overlay mode.
    #[must_use]
    pub const fn new(overlay_mode: OverlayMode) -> Self {
        Self { overlay_mode }
    }

    /// Applies the overlay policy to `original`, the description an element
    /// of type `element_type` returned for `bounds`.
    #[must_use]
    pub fn decorate(
        &self,
        original: Option<ViewDescription>,
        element_type: &'static str,
        bounds: Rect,
    ) -> Option<ViewDescription> {
        let overlay = |wrapped| ViewDescription::debug_overlay(element_type, bounds, wrapped);
        match self.overlay_mode {
            OverlayMode::None => original,
            OverlayMode::All => Some(overlay(original)),
            OverlayMode::ViewBackedOnly => original.map(|desc| overlay(Some(desc))),
        }
    }
}

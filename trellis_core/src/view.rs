// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render descriptions produced by view-backed elements.
//!
//! A [`ViewDescription`] tells the rendering layer which kind of native view
//! to create for a render node and how to configure it. Elements that only
//! organize children return no description and are dropped during resolve.

use alloc::boxed::Box;

use kurbo::Rect;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Diagnostics attached to a synthesized debug-overlay description.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugFrame {
    /// Type name of the element being visualized.
    pub element_type: &'static str,
    /// The element's interior bounds.
    pub bounds: Rect,
    /// The element's own description, if it had one.
    pub wrapped: Option<Box<ViewDescription>>,
}

/// How to build and configure the native view for one render node.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewDescription {
    /// Identifies the kind of native view; reconciliation reuses a view only
    /// when this matches.
    pub view_type: &'static str,
    /// Fill color, if any.
    pub background: Option<Color>,
    /// Corner radius in points.
    pub corner_radius: f64,
    /// Whether descendants are clipped to the view's bounds.
    pub clips_to_bounds: bool,
    /// Present only on debug overlays.
    pub debug: Option<DebugFrame>,
}

impl ViewDescription {
    /// View type used for synthesized debug overlays.
    pub const DEBUG_OVERLAY_TYPE: &'static str = "DebugElementFrame";

    /// Tint used for synthesized debug overlays.
    pub const DEBUG_OVERLAY_COLOR: Color = Color::rgba(255, 0, 128, 64);

    /// Creates a plain description of the given view type.
    #[must_use]
    pub const fn new(view_type: &'static str) -> Self {
        Self {
            view_type,
            background: None,
            corner_radius: 0.0,
            clips_to_bounds: false,
            debug: None,
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets whether descendants are clipped.
    #[must_use]
    pub fn clipping(mut self, clips: bool) -> Self {
        self.clips_to_bounds = clips;
        self
    }

    /// Synthesizes a debug overlay around `wrapped` (which may be absent)
    /// for an element of type `element_type` with interior `bounds`.
    #[must_use]
    pub fn debug_overlay(element_type: &'static str, bounds: Rect, wrapped: Option<Self>) -> Self {
        Self {
            view_type: Self::DEBUG_OVERLAY_TYPE,
            background: Some(Self::DEBUG_OVERLAY_COLOR),
            corner_radius: 0.0,
            clips_to_bounds: false,
            debug: Some(DebugFrame {
                element_type,
                bounds,
                wrapped: wrapped.map(Box::new),
            }),
        }
    }

    /// Whether this description is a synthesized debug overlay.
    #[must_use]
    pub fn is_debug_overlay(&self) -> bool {
        self.debug.is_some()
    }

    /// The description wrapped by a debug overlay, if any.
    #[must_use]
    pub fn unwrapped(&self) -> Option<&Self> {
        self.debug.as_ref()?.wrapped.as_deref()
    }
}

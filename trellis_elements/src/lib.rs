// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference layout elements for `trellis_core`.
//!
//! Each element here is an independent implementer of
//! [`Element`](trellis_core::element::Element). Most are pass-through: they
//! position children but render nothing, so resolve drops them and re-roots
//! their children. [`Decorated`] is the only view-backed element.
//!
//! | Element            | Children | Renders | Strategy                                 |
//! |--------------------|----------|---------|------------------------------------------|
//! | [`Spacer`]         | 0        | no      | fixed size                               |
//! | [`Decorated`]      | 0..=1    | yes     | background view, child fills bounds      |
//! | [`Aligned`]        | 1        | no      | measure child, place by alignment        |
//! | [`Inset`]          | 1        | no      | shrink by edge insets                    |
//! | [`Overlay`]        | n        | no      | every child fills bounds                 |
//! | [`Transformed`]    | 1        | no      | child fills bounds with an affine        |
//! | [`GeometryReader`] | 1        | no      | builds its child from the constraint     |
//!
//! [`ElementExt`] adds modifier-style constructors to every element:
//!
//! ```
//! use trellis_elements::{ElementExt, HorizontalAlignment, Spacer, VerticalAlignment};
//!
//! let badge = Spacer::new(8.0, 8.0)
//!     .aligned(HorizontalAlignment::Trailing, VerticalAlignment::Top)
//!     .into_ref();
//! # let _ = badge;
//! ```

#![no_std]

extern crate alloc;

mod aligned;
mod decorated;
mod geometry_reader;
mod inset;
mod overlay;
mod spacer;
mod transformed;

pub use aligned::{Aligned, HorizontalAlignment, VerticalAlignment};
pub use decorated::Decorated;
pub use geometry_reader::{GeometryProxy, GeometryReader};
pub use inset::{EdgeInsets, Inset};
pub use overlay::Overlay;
pub use spacer::Spacer;
pub use transformed::Transformed;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Affine, Rect};
use trellis_core::element::{Element, ElementRef, LayoutChild};
use trellis_core::geometry::LayoutAttributes;
use trellis_core::identity::ElementIdentifier;
use trellis_core::view::Color;

/// Modifier-style constructors available on every element.
pub trait ElementExt: Element + Sized + 'static {
    /// Wraps `self` in a shared handle.
    fn into_ref(self) -> ElementRef {
        Arc::new(self)
    }

    /// Places `self` inside its parent's bounds by alignment.
    fn aligned(self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Aligned {
        Aligned::new(horizontal, vertical, self.into_ref())
    }

    /// Insets `self` by `insets`.
    fn inset(self, insets: EdgeInsets) -> Inset {
        Inset::new(insets, self.into_ref())
    }

    /// Attaches `transform` to `self`.
    fn transformed(self, transform: Affine) -> Transformed {
        Transformed::new(transform, self.into_ref())
    }

    /// Draws a `background` view behind `self`.
    fn decorated(self, background: Color) -> Decorated {
        Decorated::new(background).wrapping(self.into_ref())
    }
}

impl<E: Element + 'static> ElementExt for E {}

/// Lays out a single `element` with `attributes`.
fn single_child(element: &ElementRef, attributes: LayoutAttributes) -> Vec<LayoutChild> {
    vec![LayoutChild::new(
        ElementIdentifier::first_of(element.as_ref()),
        attributes,
        element.clone(),
    )]
}

/// Lays out a single `element` filling `bounds`.
fn fill(element: &ElementRef, bounds: Rect) -> Vec<LayoutChild> {
    single_child(element, LayoutAttributes::new(bounds))
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed element trees and render-node flattening.
//!
//! `trellis_core` turns a declarative tree of [`Element`](element::Element)s
//! into a fully positioned tree, then collapses that tree into the minimal,
//! ordered set of view-backed render nodes a display layer has to draw. It is
//! `no_std` compatible (with `alloc`) and holds no state between passes.
//!
//! # Architecture
//!
//! ```text
//!   Element tree + root LayoutAttributes
//!       │
//!       ▼
//!   AttributedNode::build() ──► AttributedNode (geometry + timing per node)
//!                                     │
//!                 ┌───────────────────┘
//!                 ▼
//!   AttributedNode::resolve(&Debugging) ──► [(ElementPath, RenderNode)]
//!                                                │
//!                                                ▼
//!                                   rendering / reconciliation layer
//! ```
//!
//! **[`element`]**: The capability interface (`measure`, `layout`,
//! `render_description`) that concrete layout strategies implement.
//!
//! **[`attributed`]**: Top-down construction of the attributed tree, with a
//! subtree-inclusive layout duration recorded for every node.
//!
//! **[`render`]**: Bottom-up flattening into render nodes. Pass-through
//! nodes (no render description) are dropped and their children's geometry
//! is re-rooted into the nearest rendering ancestor.
//!
//! **[`geometry`]**: [`LayoutAttributes`](geometry::LayoutAttributes) and the
//! re-rooting rule.
//!
//! **[`identity`]**: Sibling identifiers and the paths built from them.
//!
//! **[`constraint`]**: Per-axis size constraints handed to measurement.
//!
//! **[`debugging`]**: Overlay policy for visualizing element frames.
//!
//! **[`pass`]**: A traced driver running build and resolve back to back.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! layout-pass instrumentation, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`time`]** / **[`clock`]**: Monotonic ticks and the clocks that produce
//! them.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and
//!   provides [`StdClock`](clock::StdClock).
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-pass
//!   render-node records.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod attributed;
pub mod clock;
pub mod constraint;
pub mod debugging;
pub mod element;
pub mod geometry;
pub mod identity;
pub mod pass;
pub mod render;
pub mod time;
pub mod trace;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! attributed-tree builder and [`LayoutPass`](crate::pass::LayoutPass) call at
//! each stage. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! [`PassSummaryBuilder`] collects phase timestamps during a pass and
//! produces a [`PassSummary`] at the end.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`RenderNodeRecord`] events plus
//!   the corresponding `TraceSink` method.

use kurbo::Rect;

use crate::debugging::OverlayMode;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which phase of a layout pass is being measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassPhase {
    /// Attributed-tree construction.
    Layout,
    /// Flattening into render nodes.
    Resolve,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a layout pass starts.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Caller-supplied pass counter.
    pub pass_index: u64,
    /// Host time at the start of the pass.
    pub timestamp: HostTime,
    /// Frame assigned to the root element.
    pub root_frame: Rect,
    /// Overlay policy in effect.
    pub overlay_mode: OverlayMode,
}

/// Marks the beginning of a pass phase.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBeginEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Which phase is starting.
    pub phase: PassPhase,
    /// Host time at the start of the phase.
    pub timestamp: HostTime,
}

/// Marks the end of a pass phase.
#[derive(Clone, Copy, Debug)]
pub struct PhaseEndEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Which phase is ending.
    pub phase: PassPhase,
    /// Host time at the end of the phase.
    pub timestamp: HostTime,
}

/// Emitted once per attributed node, after its whole subtree is built.
///
/// Events arrive in post-order: children before their parent.
#[derive(Clone, Copy, Debug)]
pub struct NodeLayoutEvent {
    /// Depth below the root (root is 0).
    pub depth: u32,
    /// Element type name.
    pub element_type: &'static str,
    /// Number of direct children.
    pub child_count: u32,
    /// Host time before the element's `layout` was called.
    pub start: HostTime,
    /// Host time after the last descendant was built.
    pub end: HostTime,
}

/// Per-pass summary produced by [`PassSummaryBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Pass counter.
    pub pass_index: u64,
    /// Nodes in the attributed tree.
    pub attributed_nodes: u32,
    /// Render nodes emitted by resolve (counting nested ones).
    pub render_nodes: u32,
    /// Depth of the attributed tree (a lone root is 1).
    pub max_depth: u32,
    /// Layout phase duration in ticks (0 if not measured).
    pub layout_ticks: u64,
    /// Resolve phase duration in ticks (0 if not measured).
    pub resolve_ticks: u64,
}

/// A render node emitted by a pass.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct RenderNodeRecord {
    /// Number of render-node ancestors.
    pub depth: u32,
    /// View type of the node's description.
    pub view_type: &'static str,
    /// Frame relative to the nearest render-node ancestor.
    pub frame: Rect,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from layout passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a pass starts.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called at the beginning of a pass phase.
    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        _ = e;
    }

    /// Called at the end of a pass phase.
    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        _ = e;
    }

    /// Called after each attributed node is built.
    fn on_node_layout(&mut self, e: &NodeLayoutEvent) {
        _ = e;
    }

    /// Called with a per-pass summary.
    fn on_pass_summary(&mut self, s: &PassSummary) {
        _ = s;
    }

    /// Called with every render node a pass produced, in pre-order
    /// (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_render_nodes(&mut self, pass_index: u64, nodes: &[RenderNodeRecord]) {
        _ = (pass_index, nodes);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Whether events reach a sink.
    ///
    /// Always `false` without the `trace` feature; callers use it to skip
    /// building event payloads nobody will see.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseBeginEvent`].
    #[inline]
    pub fn phase_begin(&mut self, e: &PhaseBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseEndEvent`].
    #[inline]
    pub fn phase_end(&mut self, e: &PhaseEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NodeLayoutEvent`].
    #[inline]
    pub fn node_layout(&mut self, e: &NodeLayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_node_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_summary(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits render-node records (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn render_nodes(&mut self, pass_index: u64, nodes: &[RenderNodeRecord]) {
        if let Some(s) = &mut self.sink {
            s.on_render_nodes(pass_index, nodes);
        }
    }
}

// ---------------------------------------------------------------------------
// PassSummaryBuilder
// ---------------------------------------------------------------------------

/// Collects phase timestamps and counts during a pass and produces a
/// [`PassSummary`].
#[derive(Debug)]
pub struct PassSummaryBuilder {
    pass_index: u64,
    phase_starts: [Option<HostTime>; 2],
    phase_ends: [Option<HostTime>; 2],
    attributed_nodes: u32,
    render_nodes: u32,
    max_depth: u32,
}

impl PassSummaryBuilder {
    /// Starts building a summary for the given pass.
    #[must_use]
    pub fn new(pass_index: u64) -> Self {
        Self {
            pass_index,
            phase_starts: [None; 2],
            phase_ends: [None; 2],
            attributed_nodes: 0,
            render_nodes: 0,
            max_depth: 0,
        }
    }

    /// Records the start of a phase.
    pub fn phase_begin(&mut self, phase: PassPhase, t: HostTime) {
        self.phase_starts[phase_index(phase)] = Some(t);
    }

    /// Records the end of a phase.
    pub fn phase_end(&mut self, phase: PassPhase, t: HostTime) {
        self.phase_ends[phase_index(phase)] = Some(t);
    }

    /// Records the size of the attributed tree.
    pub fn set_attributed_tree(&mut self, nodes: usize, depth: usize) {
        self.attributed_nodes = saturating_u32(nodes);
        self.max_depth = saturating_u32(depth);
    }

    /// Records how many render nodes resolve produced.
    pub fn set_render_nodes(&mut self, nodes: usize) {
        self.render_nodes = saturating_u32(nodes);
    }

    /// Consumes the builder and produces the final [`PassSummary`].
    #[must_use]
    pub fn finish(self) -> PassSummary {
        PassSummary {
            pass_index: self.pass_index,
            attributed_nodes: self.attributed_nodes,
            render_nodes: self.render_nodes,
            max_depth: self.max_depth,
            layout_ticks: self.phase_duration(PassPhase::Layout),
            resolve_ticks: self.phase_duration(PassPhase::Resolve),
        }
    }

    fn phase_duration(&self, phase: PassPhase) -> u64 {
        let idx = phase_index(phase);
        match (self.phase_starts[idx], self.phase_ends[idx]) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).ticks(),
            _ => 0,
        }
    }
}

/// Maps a [`PassPhase`] to an array index.
const fn phase_index(phase: PassPhase) -> usize {
    match phase {
        PassPhase::Layout => 0,
        PassPhase::Resolve => 1,
    }
}

pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node_event() -> NodeLayoutEvent {
        NodeLayoutEvent {
            depth: 2,
            element_type: "Spacer",
            child_count: 0,
            start: HostTime(1_000),
            end: HostTime(1_250),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_pass_begin(&PassBeginEvent {
            pass_index: 0,
            timestamp: HostTime(0),
            root_frame: Rect::ZERO,
            overlay_mode: OverlayMode::None,
        });
        sink.on_node_layout(&sample_node_event());
        sink.on_pass_summary(&PassSummary::default());
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_active());
        tracer.node_layout(&sample_node_event());
        tracer.pass_summary(&PassSummary::default());
    }

    #[test]
    fn summary_builder_computes_durations() {
        let mut builder = PassSummaryBuilder::new(9);
        builder.phase_begin(PassPhase::Layout, HostTime(1_000));
        builder.phase_end(PassPhase::Layout, HostTime(1_400));
        builder.phase_begin(PassPhase::Resolve, HostTime(1_400));
        builder.phase_end(PassPhase::Resolve, HostTime(1_450));
        builder.set_attributed_tree(12, 4);
        builder.set_render_nodes(5);

        let summary = builder.finish();
        assert_eq!(summary.pass_index, 9);
        assert_eq!(summary.layout_ticks, 400);
        assert_eq!(summary.resolve_ticks, 50);
        assert_eq!(summary.attributed_nodes, 12);
        assert_eq!(summary.max_depth, 4);
        assert_eq!(summary.render_nodes, 5);
    }

    #[test]
    fn summary_builder_missing_phases_are_zero() {
        let summary = PassSummaryBuilder::new(0).finish();
        assert_eq!(summary.layout_ticks, 0);
        assert_eq!(summary.resolve_ticks, 0);
    }

    #[test]
    fn counts_saturate() {
        assert_eq!(saturating_u32(7), 7);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            depths: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_node_layout(&mut self, e: &NodeLayoutEvent) {
                self.depths.push(e.depth);
            }
        }

        let mut sink = RecordingSink { depths: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        assert!(tracer.is_active());
        tracer.node_layout(&sample_node_event());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.depths, &[2]);
    }
}

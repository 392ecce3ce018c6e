// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Node lines
//! are indented by depth. Timestamps are converted to microseconds using a
//! [`Timebase`].

use std::io::Write;

use trellis_core::time::{HostTime, Timebase};
use trellis_core::trace::{
    NodeLayoutEvent, PassBeginEvent, PassPhase, PassSummary, PhaseBeginEvent, PhaseEndEvent,
    RenderNodeRecord, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_micros(ticks)
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

fn phase_name(phase: PassPhase) -> &'static str {
    match phase {
        PassPhase::Layout => "layout",
        PassPhase::Resolve => "resolve",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let f = e.root_frame;
        let _ = writeln!(
            self.writer,
            "[pass] #{} at {:.1}µs root=({}, {}, {}×{}) overlay={:?}",
            e.pass_index,
            self.host_us(e.timestamp),
            f.x0,
            f.y0,
            f.width(),
            f.height(),
            e.overlay_mode,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:begin] pass={} {} at {:.1}µs",
            e.pass_index,
            phase_name(e.phase),
            self.host_us(e.timestamp),
        );
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:end] pass={} {} at {:.1}µs",
            e.pass_index,
            phase_name(e.phase),
            self.host_us(e.timestamp),
        );
    }

    fn on_node_layout(&mut self, e: &NodeLayoutEvent) {
        let indent = e.depth as usize * 2;
        let _ = writeln!(
            self.writer,
            "[node] {:indent$}{} children={} took={:.1}µs",
            "",
            e.element_type,
            e.child_count,
            self.ticks_to_us(e.end.saturating_duration_since(e.start).ticks()),
        );
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] pass={} nodes={} depth={} render={} layout={:.1}µs resolve={:.1}µs",
            s.pass_index,
            s.attributed_nodes,
            s.max_depth,
            s.render_nodes,
            self.ticks_to_us(s.layout_ticks),
            self.ticks_to_us(s.resolve_ticks),
        );
    }

    fn on_render_nodes(&mut self, pass_index: u64, nodes: &[RenderNodeRecord]) {
        let count = nodes.len();
        let _ = writeln!(self.writer, "[render] pass={pass_index} nodes={count}");
        for n in nodes {
            let indent = n.depth as usize * 2 + 2;
            let _ = writeln!(
                self.writer,
                "[render] {:indent$}{} ({}, {}, {}×{})",
                "",
                n.view_type,
                n.frame.x0,
                n.frame.y0,
                n.frame.width(),
                n.frame.height(),
            );
        }
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as tagged little-endian records. [`decode`] reads them back as
//! an iterator of [`RecordedEvent`].
//!
//! Element type names are stored as a `u32` byte length followed by UTF-8
//! bytes. Render-node records
//! ([`on_render_nodes`](TraceSink::on_render_nodes)) store only the count.
//!
//! Decoding stops at the first unknown tag or truncated record.

use kurbo::Rect;
use trellis_core::debugging::OverlayMode;
use trellis_core::time::HostTime;
use trellis_core::trace::{
    NodeLayoutEvent, PassBeginEvent, PassPhase, PassSummary, PhaseBeginEvent, PhaseEndEvent,
    RenderNodeRecord, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_PASS_BEGIN: u8 = 1;
const TAG_PHASE_BEGIN: u8 = 2;
const TAG_PHASE_END: u8 = 3;
const TAG_NODE_LAYOUT: u8 = 4;
const TAG_PASS_SUMMARY: u8 = 5;
const TAG_RENDER_NODES_COUNT: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_rect(&mut self, r: Rect) {
        self.write_f64(r.x0);
        self.write_f64(r.y0);
        self.write_f64(r.x1);
        self.write_f64(r.y1);
    }

    fn write_str(&mut self, s: &str) {
        let len = u32::try_from(s.len()).unwrap_or(u32::MAX);
        self.write_u32(len);
        self.buf.extend_from_slice(&s.as_bytes()[..len as usize]);
    }

    fn write_phase(&mut self, p: PassPhase) {
        self.write_u8(match p {
            PassPhase::Layout => 0,
            PassPhase::Resolve => 1,
        });
    }

    fn write_overlay_mode(&mut self, m: OverlayMode) {
        self.write_u8(match m {
            OverlayMode::None => 0,
            OverlayMode::All => 1,
            OverlayMode::ViewBackedOnly => 2,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.write_u8(TAG_PASS_BEGIN);
        self.write_u64(e.pass_index);
        self.write_u64(e.timestamp.ticks());
        self.write_rect(e.root_frame);
        self.write_overlay_mode(e.overlay_mode);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.write_u8(TAG_PHASE_BEGIN);
        self.write_u64(e.pass_index);
        self.write_phase(e.phase);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.write_u8(TAG_PHASE_END);
        self.write_u64(e.pass_index);
        self.write_phase(e.phase);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_node_layout(&mut self, e: &NodeLayoutEvent) {
        self.write_u8(TAG_NODE_LAYOUT);
        self.write_u32(e.depth);
        self.write_str(e.element_type);
        self.write_u32(e.child_count);
        self.write_u64(e.start.ticks());
        self.write_u64(e.end.ticks());
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.write_u8(TAG_PASS_SUMMARY);
        self.write_u64(s.pass_index);
        self.write_u32(s.attributed_nodes);
        self.write_u32(s.render_nodes);
        self.write_u32(s.max_depth);
        self.write_u64(s.layout_ticks);
        self.write_u64(s.resolve_ticks);
    }

    fn on_render_nodes(&mut self, pass_index: u64, nodes: &[RenderNodeRecord]) {
        self.write_u8(TAG_RENDER_NODES_COUNT);
        self.write_u64(pass_index);
        self.write_u32(u32::try_from(nodes.len()).unwrap_or(u32::MAX));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded [`NodeLayoutEvent`], owning its type name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedNodeLayout {
    /// Depth below the root (root is 0).
    pub depth: u32,
    /// Element type name.
    pub element_type: String,
    /// Number of direct children.
    pub child_count: u32,
    /// Host time before the element's layout was called.
    pub start: HostTime,
    /// Host time after the last descendant was built.
    pub end: HostTime,
}

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`PassBeginEvent`].
    PassBegin(PassBeginEvent),
    /// A [`PhaseBeginEvent`].
    PhaseBegin(PhaseBeginEvent),
    /// A [`PhaseEndEvent`].
    PhaseEnd(PhaseEndEvent),
    /// A [`NodeLayoutEvent`].
    NodeLayout(RecordedNodeLayout),
    /// A [`PassSummary`].
    PassSummary(PassSummary),
    /// Render-node count for a pass.
    RenderNodesCount {
        /// Pass counter.
        pass_index: u64,
        /// Number of render nodes.
        count: u32,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take(&mut self, n: usize) -> Option<&[u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    fn read_u32(&mut self) -> Option<u32> {
        Some(u32::from_le_bytes(self.take(4)?.try_into().ok()?))
    }

    fn read_u64(&mut self) -> Option<u64> {
        Some(u64::from_le_bytes(self.take(8)?.try_into().ok()?))
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_le_bytes(self.take(8)?.try_into().ok()?))
    }

    fn read_rect(&mut self) -> Option<Rect> {
        Some(Rect::new(
            self.read_f64()?,
            self.read_f64()?,
            self.read_f64()?,
            self.read_f64()?,
        ))
    }

    fn read_string(&mut self) -> Option<String> {
        let len = usize::try_from(self.read_u32()?).ok()?;
        let bytes = self.take(len)?;
        Some(String::from_utf8_lossy(bytes).into_owned())
    }

    fn read_phase(&mut self) -> Option<PassPhase> {
        Some(match self.read_u8()? {
            0 => PassPhase::Layout,
            _ => PassPhase::Resolve,
        })
    }

    fn read_overlay_mode(&mut self) -> Option<OverlayMode> {
        Some(match self.read_u8()? {
            0 => OverlayMode::None,
            1 => OverlayMode::All,
            _ => OverlayMode::ViewBackedOnly,
        })
    }

    fn decode_pass_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PassBegin(PassBeginEvent {
            pass_index: self.read_u64()?,
            timestamp: HostTime(self.read_u64()?),
            root_frame: self.read_rect()?,
            overlay_mode: self.read_overlay_mode()?,
        }))
    }

    fn decode_phase_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseBegin(PhaseBeginEvent {
            pass_index: self.read_u64()?,
            phase: self.read_phase()?,
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_phase_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseEnd(PhaseEndEvent {
            pass_index: self.read_u64()?,
            phase: self.read_phase()?,
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_node_layout(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::NodeLayout(RecordedNodeLayout {
            depth: self.read_u32()?,
            element_type: self.read_string()?,
            child_count: self.read_u32()?,
            start: HostTime(self.read_u64()?),
            end: HostTime(self.read_u64()?),
        }))
    }

    fn decode_pass_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PassSummary(PassSummary {
            pass_index: self.read_u64()?,
            attributed_nodes: self.read_u32()?,
            render_nodes: self.read_u32()?,
            max_depth: self.read_u32()?,
            layout_ticks: self.read_u64()?,
            resolve_ticks: self.read_u64()?,
        }))
    }

    fn decode_render_nodes_count(&mut self) -> Option<RecordedEvent> {
        let pass_index = self.read_u64()?;
        let count = self.read_u32()?;
        Some(RecordedEvent::RenderNodesCount { pass_index, count })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_PASS_BEGIN => self.decode_pass_begin(),
            TAG_PHASE_BEGIN => self.decode_phase_begin(),
            TAG_PHASE_END => self.decode_phase_end(),
            TAG_NODE_LAYOUT => self.decode_node_layout(),
            TAG_PASS_SUMMARY => self.decode_pass_summary(),
            TAG_RENDER_NODES_COUNT => self.decode_render_nodes_count(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

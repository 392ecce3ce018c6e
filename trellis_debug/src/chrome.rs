// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Phases become `B`/`E` duration pairs on thread 0. Every laid-out node
//! becomes a complete (`X`) event on thread 1, so nested elements stack into
//! a flame graph of the build.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use trellis_core::time::Timebase;

use crate::recorder::{RecordedEvent, decode};

const PHASE_TID: u32 = 0;
const NODE_TID: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes)
        .map(|recorded| to_trace_event(recorded, timebase))
        .collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn to_trace_event(recorded: RecordedEvent, timebase: Timebase) -> Value {
    let us = |ticks: u64| timebase.ticks_to_micros(ticks);
    match recorded {
        RecordedEvent::PassBegin(e) => json!({
            "ph": "i",
            "name": "Pass",
            "cat": "Pass",
            "ts": us(e.timestamp.ticks()),
            "pid": 0,
            "tid": PHASE_TID,
            "s": "g",
            "args": {
                "pass_index": e.pass_index,
                "root_frame": [e.root_frame.x0, e.root_frame.y0, e.root_frame.x1, e.root_frame.y1],
                "overlay_mode": format!("{:?}", e.overlay_mode),
            }
        }),
        RecordedEvent::PhaseBegin(e) => json!({
            "ph": "B",
            "name": format!("{:?}", e.phase),
            "cat": "Phase",
            "ts": us(e.timestamp.ticks()),
            "pid": 0,
            "tid": PHASE_TID,
            "args": {
                "pass_index": e.pass_index,
            }
        }),
        RecordedEvent::PhaseEnd(e) => json!({
            "ph": "E",
            "name": format!("{:?}", e.phase),
            "cat": "Phase",
            "ts": us(e.timestamp.ticks()),
            "pid": 0,
            "tid": PHASE_TID,
            "args": {
                "pass_index": e.pass_index,
            }
        }),
        RecordedEvent::NodeLayout(e) => json!({
            "ph": "X",
            "name": e.element_type,
            "cat": "Layout",
            "ts": us(e.start.ticks()),
            "dur": us(e.end.saturating_duration_since(e.start).ticks()),
            "pid": 0,
            "tid": NODE_TID,
            "args": {
                "depth": e.depth,
                "child_count": e.child_count,
            }
        }),
        RecordedEvent::PassSummary(s) => json!({
            "ph": "i",
            "name": "PassSummary",
            "cat": "Summary",
            "ts": 0,
            "pid": 0,
            "tid": PHASE_TID,
            "s": "g",
            "args": {
                "pass_index": s.pass_index,
                "attributed_nodes": s.attributed_nodes,
                "render_nodes": s.render_nodes,
                "max_depth": s.max_depth,
                "layout_us": us(s.layout_ticks),
                "resolve_us": us(s.resolve_ticks),
            }
        }),
        RecordedEvent::RenderNodesCount { pass_index, count } => json!({
            "ph": "i",
            "name": "RenderNodes",
            "cat": "Rich",
            "ts": 0,
            "pid": 0,
            "tid": PHASE_TID,
            "s": "p",
            "args": {
                "pass_index": pass_index,
                "count": count,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use trellis_core::time::HostTime;
    use trellis_core::trace::{
        NodeLayoutEvent, PassPhase, PhaseBeginEvent, PhaseEndEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_phase_begin(&PhaseBeginEvent {
            pass_index: 0,
            phase: PassPhase::Layout,
            timestamp: HostTime(1_000_000),
        });
        rec.on_node_layout(&NodeLayoutEvent {
            depth: 0,
            element_type: "Overlay",
            child_count: 2,
            start: HostTime(1_000_010),
            end: HostTime(1_002_010),
        });
        rec.on_phase_end(&PhaseEndEvent {
            pass_index: 0,
            phase: PassPhase::Layout,
            timestamp: HostTime(1_003_000),
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), Timebase::NANOS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[0]["name"], "Layout");

        assert_eq!(parsed[1]["ph"], "X");
        assert_eq!(parsed[1]["name"], "Overlay");
        assert_eq!(parsed[1]["ts"], 1_000.01);
        assert_eq!(parsed[1]["dur"], 2.0);
        assert_eq!(parsed[1]["tid"], NODE_TID);
        assert_eq!(parsed[1]["args"]["child_count"], 2);

        assert_eq!(parsed[2]["ph"], "E");
        assert_eq!(parsed[2]["name"], "Layout");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], Timebase::NANOS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}

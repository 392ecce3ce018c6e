// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete layout pass: build, then resolve.
//!
//! [`LayoutPass::run`] is the traced entry point hosts call once per update.
//! It reads the clock around each phase, forwards events to the supplied
//! [`Tracer`], and returns the render nodes together with a [`PassSummary`].
//! Nothing is cached between runs; every call rebuilds from the element tree.

use alloc::vec::Vec;

use crate::attributed::AttributedNode;
use crate::clock::Clock;
use crate::debugging::Debugging;
use crate::element::ElementRef;
use crate::geometry::LayoutAttributes;
use crate::identity::ElementPath;
use crate::render::{RenderNode, count_render_nodes};
use crate::time::HostTime;
use crate::trace::{
    PassBeginEvent, PassPhase, PassSummary, PassSummaryBuilder, PhaseBeginEvent, PhaseEndEvent,
    Tracer,
};

/// Result of one [`LayoutPass::run`].
#[derive(Clone, Debug)]
pub struct PassOutput {
    /// Resolved render nodes, keyed by path from the root element.
    pub nodes: Vec<(ElementPath, RenderNode)>,
    /// Counts and phase durations for the pass.
    pub summary: PassSummary,
}

/// Options shared by every pass a host runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutPass {
    /// Overlay policy applied during resolve.
    pub debugging: Debugging,
}

impl LayoutPass {
    /// Creates a pass driver with the given debugging options.
    #[must_use]
    pub const fn new(debugging: Debugging) -> Self {
        Self { debugging }
    }

    /// Lays out `element` with `attributes` as its root geometry and
    /// flattens the result.
    pub fn run(
        &self,
        pass_index: u64,
        element: ElementRef,
        attributes: LayoutAttributes,
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
    ) -> PassOutput {
        let mut summary = PassSummaryBuilder::new(pass_index);

        tracer.pass_begin(&PassBeginEvent {
            pass_index,
            timestamp: clock.now(),
            root_frame: attributes.frame,
            overlay_mode: self.debugging.overlay_mode,
        });

        let layout = begin_phase(pass_index, PassPhase::Layout, clock, tracer, &mut summary);
        let tree = AttributedNode::build_traced(element, attributes, clock, tracer);
        end_phase(layout, clock, tracer, &mut summary);
        summary.set_attributed_tree(tree.node_count(), tree.depth());

        let resolve = begin_phase(pass_index, PassPhase::Resolve, clock, tracer, &mut summary);
        let nodes = tree.resolve(&self.debugging);
        end_phase(resolve, clock, tracer, &mut summary);
        summary.set_render_nodes(count_render_nodes(&nodes));

        #[cfg(feature = "trace-rich")]
        if tracer.is_active() {
            let records = render_records(&nodes);
            tracer.render_nodes(pass_index, &records);
        }

        let summary = summary.finish();
        tracer.pass_summary(&summary);

        PassOutput { nodes, summary }
    }
}

/// A phase that has begun and not yet ended.
#[derive(Clone, Copy, Debug)]
struct PhaseStart {
    pass_index: u64,
    phase: PassPhase,
    timestamp: HostTime,
}

fn begin_phase(
    pass_index: u64,
    phase: PassPhase,
    clock: &dyn Clock,
    tracer: &mut Tracer<'_>,
    summary: &mut PassSummaryBuilder,
) -> PhaseStart {
    let timestamp = clock.now();
    summary.phase_begin(phase, timestamp);
    tracer.phase_begin(&PhaseBeginEvent {
        pass_index,
        phase,
        timestamp,
    });
    PhaseStart {
        pass_index,
        phase,
        timestamp,
    }
}

fn end_phase(
    start: PhaseStart,
    clock: &dyn Clock,
    tracer: &mut Tracer<'_>,
    summary: &mut PassSummaryBuilder,
) {
    // Never report an end before its start, even with a misbehaving clock.
    let timestamp = clock.now().max(start.timestamp);
    summary.phase_end(start.phase, timestamp);
    tracer.phase_end(&PhaseEndEvent {
        pass_index: start.pass_index,
        phase: start.phase,
        timestamp,
    });
}

#[cfg(feature = "trace-rich")]
fn render_records(nodes: &[(ElementPath, RenderNode)]) -> Vec<crate::trace::RenderNodeRecord> {
    crate::render::preorder(nodes)
        .into_iter()
        .map(|(depth, _, node)| crate::trace::RenderNodeRecord {
            depth: crate::trace::saturating_u32(depth),
            view_type: node.content.view_type,
            frame: node.layout_attributes.frame,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::debugging::OverlayMode;
    use crate::testing::{TestNode, rect};

    fn sample() -> ElementRef {
        TestNode::group("Root")
            .child(
                rect(0.0, 0.0, 40.0, 40.0),
                TestNode::view("Card").child(rect(4.0, 4.0, 8.0, 8.0), TestNode::view("Badge")),
            )
            .child(rect(40.0, 0.0, 40.0, 40.0), TestNode::group("Gap"))
            .into_ref()
    }

    #[test]
    fn run_matches_build_then_resolve() {
        let attrs = LayoutAttributes::new(rect(0.0, 0.0, 80.0, 40.0));
        let pass = LayoutPass::default();
        let clock = ManualClock::default();
        let output = pass.run(0, sample(), attrs, &clock, &mut Tracer::none());

        let tree = AttributedNode::build(sample(), attrs, &clock);
        assert_eq!(output.nodes, tree.resolve(&Debugging::NONE));
    }

    #[test]
    fn summary_counts_and_durations() {
        let clock = ManualClock::new(100, 1);
        let pass = LayoutPass::new(Debugging::new(OverlayMode::All));
        let output = pass.run(
            3,
            sample(),
            LayoutAttributes::new(rect(0.0, 0.0, 80.0, 40.0)),
            &clock,
            &mut Tracer::none(),
        );

        let summary = output.summary;
        assert_eq!(summary.pass_index, 3);
        assert_eq!(summary.attributed_nodes, 4);
        assert_eq!(summary.max_depth, 3);
        assert_eq!(summary.render_nodes, 4, "every node is wrapped under All");
        // Layout phase: begin read, two reads per node, end read.
        assert_eq!(summary.layout_ticks, 9);
        assert_eq!(summary.resolve_ticks, 1);
    }

    #[test]
    fn passes_are_independent() {
        let pass = LayoutPass::default();
        let clock = ManualClock::default();
        let attrs = LayoutAttributes::new(rect(0.0, 0.0, 80.0, 40.0));
        let a = pass.run(0, sample(), attrs, &clock, &mut Tracer::none());
        let b = pass.run(1, sample(), attrs, &clock, &mut Tracer::none());
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.summary.render_nodes, 2);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn emits_events_in_order() {
        use crate::trace::{NodeLayoutEvent, TraceSink};

        #[derive(Default)]
        struct Log(Vec<&'static str>);
        impl TraceSink for Log {
            fn on_pass_begin(&mut self, _e: &PassBeginEvent) {
                self.0.push("pass");
            }
            fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
                self.0.push(match e.phase {
                    PassPhase::Layout => "layout{",
                    PassPhase::Resolve => "resolve{",
                });
            }
            fn on_phase_end(&mut self, _e: &PhaseEndEvent) {
                self.0.push("}");
            }
            fn on_node_layout(&mut self, _e: &NodeLayoutEvent) {
                self.0.push("node");
            }
            fn on_pass_summary(&mut self, _s: &PassSummary) {
                self.0.push("summary");
            }
        }

        let mut log = Log::default();
        let mut tracer = Tracer::new(&mut log);
        let _ = LayoutPass::default().run(
            0,
            sample(),
            LayoutAttributes::default(),
            &ManualClock::default(),
            &mut tracer,
        );
        drop(tracer);

        assert_eq!(
            log.0.join(" "),
            "pass layout{ node node node node } resolve{ } summary"
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn phase_end_is_never_before_its_start() {
        use crate::trace::TraceSink;
        use core::cell::Cell;

        /// Runs backwards by ten ticks per read.
        struct Rewinding(Cell<u64>);
        impl Clock for Rewinding {
            fn now(&self) -> HostTime {
                let t = self.0.get();
                self.0.set(t.saturating_sub(10));
                HostTime(t)
            }
        }

        #[derive(Default)]
        struct Spans(Vec<(HostTime, HostTime)>);
        impl TraceSink for Spans {
            fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
                self.0.push((e.timestamp, e.timestamp));
            }
            fn on_phase_end(&mut self, e: &PhaseEndEvent) {
                if let Some(span) = self.0.last_mut() {
                    span.1 = e.timestamp;
                }
            }
        }

        let clock = Rewinding(Cell::new(1_000));
        let mut spans = Spans::default();
        let mut tracer = Tracer::new(&mut spans);
        let attrs = LayoutAttributes::default();
        let output = LayoutPass::default().run(0, sample(), attrs, &clock, &mut tracer);
        drop(tracer);

        assert_eq!(spans.0.len(), 2);
        for (start, end) in spans.0 {
            assert_eq!(end, start);
        }
        assert_eq!(output.summary.layout_ticks, 0);
        assert_eq!(output.summary.resolve_ticks, 0);
    }

    #[cfg(feature = "trace-rich")]
    #[test]
    fn rich_trace_lists_render_nodes() {
        use crate::trace::{RenderNodeRecord, TraceSink};

        #[derive(Default)]
        struct Records(Vec<(u32, &'static str)>);
        impl TraceSink for Records {
            fn on_render_nodes(&mut self, _pass_index: u64, nodes: &[RenderNodeRecord]) {
                self.0.extend(nodes.iter().map(|n| (n.depth, n.view_type)));
            }
        }

        let mut sink = Records::default();
        let mut tracer = Tracer::new(&mut sink);
        let _ = LayoutPass::default().run(
            0,
            sample(),
            LayoutAttributes::default(),
            &ManualClock::default(),
            &mut tracer,
        );
        drop(tracer);
        assert_eq!(sink.0, [(0, "Card"), (1, "Badge")]);
    }
}

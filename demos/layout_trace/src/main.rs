// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traced layout passes over a small card UI.
//!
//! Lays out the same element tree once per [`OverlayMode`], sending events to
//! both a [`PrettyPrintSink`](trellis_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](trellis_debug::recorder::RecorderSink). Afterwards it
//! prints the last pass's render nodes as JSON and exports a Chrome trace.

use std::fs::File;
use std::io::BufWriter;

use kurbo::{Affine, Rect};
use trellis_core::clock::{Clock, StdClock};
use trellis_core::debugging::{Debugging, OverlayMode};
use trellis_core::element::ElementRef;
use trellis_core::geometry::LayoutAttributes;
use trellis_core::pass::LayoutPass;
use trellis_core::trace::{
    NodeLayoutEvent, PassBeginEvent, PassSummary, PhaseBeginEvent, PhaseEndEvent, RenderNodeRecord,
    TraceSink, Tracer,
};
use trellis_core::view::Color;
use trellis_debug::pretty::PrettyPrintSink;
use trellis_debug::recorder::RecorderSink;
use trellis_elements::{
    Decorated, EdgeInsets, ElementExt, GeometryReader, HorizontalAlignment, Overlay, Spacer,
    VerticalAlignment,
};

const MODES: [OverlayMode; 3] = [
    OverlayMode::None,
    OverlayMode::ViewBackedOnly,
    OverlayMode::All,
];

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TraceSink,
    second: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.first.on_pass_begin(e);
        self.second.on_pass_begin(e);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.first.on_phase_begin(e);
        self.second.on_phase_begin(e);
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.first.on_phase_end(e);
        self.second.on_phase_end(e);
    }

    fn on_node_layout(&mut self, e: &NodeLayoutEvent) {
        self.first.on_node_layout(e);
        self.second.on_node_layout(e);
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.first.on_pass_summary(s);
        self.second.on_pass_summary(s);
    }

    fn on_render_nodes(&mut self, pass_index: u64, nodes: &[RenderNodeRecord]) {
        self.first.on_render_nodes(pass_index, nodes);
        self.second.on_render_nodes(pass_index, nodes);
    }
}

/// A rounded card with a badge in its top-right corner, a content area
/// sized from the available space, and a slightly rotated sticker.
fn card() -> ElementRef {
    let badge = Decorated::new(Color::rgba(220, 40, 40, 255))
        .with_corner_radius(6.0)
        .wrapping(Spacer::new(12.0, 12.0).into_ref())
        .aligned(HorizontalAlignment::Trailing, VerticalAlignment::Top)
        .inset(EdgeInsets::uniform(8.0));

    let content = GeometryReader::new(|geometry| {
        let max = geometry.constraint.maximum();
        Decorated::new(Color::WHITE)
            .wrapping(Spacer::new(max.width * 0.75, max.height * 0.5).into_ref())
            .aligned(HorizontalAlignment::Center, VerticalAlignment::Bottom)
            .into_ref()
    })
    .inset(EdgeInsets::new(32.0, 16.0, 16.0, 16.0));

    let sticker = Decorated::new(Color::rgba(250, 200, 0, 255))
        .wrapping(Spacer::new(24.0, 24.0).into_ref())
        .transformed(Affine::rotate(0.1))
        .aligned(HorizontalAlignment::Leading, VerticalAlignment::Top);

    Overlay::new([
        Decorated::new(Color::rgba(40, 40, 48, 255))
            .with_corner_radius(12.0)
            .clipping(true)
            .into_ref(),
        content.into_ref(),
        badge.into_ref(),
        sticker.into_ref(),
    ])
    .into_ref()
}

fn main() {
    let clock = StdClock::new();
    let timebase = clock.timebase();

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::stderr(timebase);
    let mut recorder = RecorderSink::new();

    let root = card();
    let attributes = LayoutAttributes::new(Rect::new(0.0, 0.0, 320.0, 200.0));

    let mut last = None;
    for (pass_index, mode) in (0_u64..).zip(MODES) {
        let mut tee = Tee {
            first: &mut pretty,
            second: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        let pass = LayoutPass::new(Debugging::new(mode));
        let output = pass.run(pass_index, root.clone(), attributes, &clock, &mut tracer);
        last = Some(output);
    }

    if let Some(output) = last {
        let mut stdout = std::io::stdout().lock();
        trellis_debug::dump::write_render_nodes(&output.nodes, &mut stdout)
            .expect("failed to write render nodes");
        println!();
    }

    // -- export Chrome trace -----------------------------------------------
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "layout_trace.json".to_owned());
    let file = File::create(&path).expect("failed to create trace file");
    let mut writer = BufWriter::new(file);
    trellis_debug::chrome::export(recorder.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    eprintln!("Wrote {path} ({} passes)", MODES.len());
}

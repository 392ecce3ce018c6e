// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, Chrome trace export, and JSON dumps for
//! trellis layout passes.
//!
//! The first three are [`TraceSink`](trellis_core::trace::TraceSink)
//! companions for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes, with one complete event per laid-out node.
//!
//! [`dump`] renders attributed trees and resolved render nodes as JSON for
//! snapshotting and inspection.

pub mod chrome;
pub mod dump;
pub mod pretty;
pub mod recorder;

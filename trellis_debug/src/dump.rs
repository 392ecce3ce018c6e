// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of attributed trees and resolved render nodes.
//!
//! Frames are written as `[x0, y0, x1, y1]` and transforms as the six affine
//! coefficients. Render-node paths are relative to the enclosing render node,
//! exactly as [`AttributedNode::resolve`] returns them.

use std::io::{self, Write};

use serde_json::{Map, Value, json};

use kurbo::{Affine, Rect};
use trellis_core::attributed::AttributedNode;
use trellis_core::geometry::LayoutAttributes;
use trellis_core::identity::ElementPath;
use trellis_core::render::RenderNode;
use trellis_core::time::Timebase;
use trellis_core::view::{Color, ViewDescription};

/// Renders resolved render nodes as a JSON array.
#[must_use]
pub fn render_nodes(entries: &[(ElementPath, RenderNode)]) -> Value {
    let nodes = entries.iter().map(|(path, node)| render_node(path, node));
    Value::Array(nodes.collect())
}

/// Renders an attributed tree as nested JSON objects, with each node's
/// subtree-inclusive layout duration in microseconds.
#[must_use]
pub fn attributed_tree(root: &AttributedNode, timebase: Timebase) -> Value {
    attributed_node("", root, timebase)
}

/// Writes [`render_nodes`] to `writer` as pretty-printed JSON.
pub fn write_render_nodes(
    entries: &[(ElementPath, RenderNode)],
    writer: &mut dyn Write,
) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &render_nodes(entries))?;
    Ok(())
}

fn render_node(path: &ElementPath, node: &RenderNode) -> Value {
    let mut object = Map::new();
    object.insert("path".into(), path.to_string().into());
    object.insert("content".into(), description(&node.content));
    insert_attributes(&mut object, &node.layout_attributes);
    if !node.children.is_empty() {
        object.insert("children".into(), render_nodes(&node.children));
    }
    Value::Object(object)
}

fn attributed_node(identifier: &str, node: &AttributedNode, timebase: Timebase) -> Value {
    let mut object = Map::new();
    object.insert("identifier".into(), identifier.into());
    object.insert("element".into(), node.element.type_name().into());
    insert_attributes(&mut object, &node.layout_attributes);
    object.insert(
        "layout_us".into(),
        timebase
            .ticks_to_micros(node.diagnostic.layout_duration.ticks())
            .into(),
    );
    if !node.children.is_empty() {
        let children = node
            .children
            .iter()
            .map(|(id, child)| attributed_node(&id.to_string(), child, timebase))
            .collect();
        object.insert("children".into(), Value::Array(children));
    }
    Value::Object(object)
}

fn insert_attributes(object: &mut Map<String, Value>, attributes: &LayoutAttributes) {
    object.insert("frame".into(), rect(attributes.frame));
    if attributes.bounds != Rect::from_origin_size((0.0, 0.0), attributes.frame.size()) {
        object.insert("bounds".into(), rect(attributes.bounds));
    }
    if attributes.transform != Affine::IDENTITY {
        object.insert("transform".into(), json!(attributes.transform.as_coeffs()));
    }
    if attributes.opacity != 1.0 {
        object.insert("opacity".into(), attributes.opacity.into());
    }
    if attributes.hidden {
        object.insert("hidden".into(), true.into());
    }
}

fn description(desc: &ViewDescription) -> Value {
    let mut object = Map::new();
    object.insert("view_type".into(), desc.view_type.into());
    if let Some(color) = desc.background {
        object.insert("background".into(), hex(color).into());
    }
    if desc.corner_radius != 0.0 {
        object.insert("corner_radius".into(), desc.corner_radius.into());
    }
    if desc.clips_to_bounds {
        object.insert("clips_to_bounds".into(), true.into());
    }
    if let Some(debug) = &desc.debug {
        object.insert(
            "debug".into(),
            json!({
                "element_type": debug.element_type,
                "bounds": rect(debug.bounds),
                "wrapped": debug.wrapped.as_deref().map(description),
            }),
        );
    }
    Value::Object(object)
}

fn rect(r: Rect) -> Value {
    json!([r.x0, r.y0, r.x1, r.y1])
}

fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

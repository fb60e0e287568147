//! Rendering: builds the canvas display list and draws it as SVG.
//!
//! [`build_scene`] is the only input a host painter needs: one rectangle per
//! placed instance in paint order, each flagged as selected or overflowing.
//! [`to_svg`] draws that list; browser hosts may paint the same list onto a
//! 2D context instead. Nothing here mutates editor state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    ITEM_FILL, ITEM_STROKE, LABEL_FONT_SIZE, OVERFLOW_DASH, ROOM_FILL, ROOM_STROKE, SELECTED_FILL, SELECTED_STROKE,
};
use crate::placement::{InstanceId, PlacementStore};
use crate::room::Room;

/// One placed instance as drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemShape {
    pub id: InstanceId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub selected: bool,
    /// The footprint extends past the room border.
    pub overflows: bool,
}

/// Everything needed to paint the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Canvas width; always the room width.
    pub width: f64,
    /// Canvas height; always the room height.
    pub height: f64,
    /// Instances bottom first.
    pub items: Vec<ItemShape>,
}

impl Scene {
    /// The highlighted item, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ItemShape> {
        self.items.iter().find(|item| item.selected)
    }
}

/// Snapshot the room and store into a display list.
#[must_use]
pub fn build_scene(room: &Room, store: &PlacementStore) -> Scene {
    let selected = store.selection();
    let items = store
        .instances()
        .iter()
        .map(|instance| ItemShape {
            id: instance.id,
            label: instance.name.clone(),
            x: instance.x,
            y: instance.y,
            width: instance.width,
            height: instance.height,
            selected: selected == Some(instance.id),
            overflows: !room.contains(instance),
        })
        .collect();
    Scene { width: room.width(), height: room.height(), items }
}

/// Draw `scene` as a standalone SVG document.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height,
    );
    out.push_str(&format!(
        "  <rect class=\"room\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{ROOM_FILL}\" stroke=\"{ROOM_STROKE}\" stroke-width=\"2\"/>\n",
        scene.width, scene.height,
    ));
    for item in &scene.items {
        out.push_str(&draw_item(item));
    }
    out.push_str("</svg>\n");
    out
}

fn draw_item(item: &ItemShape) -> String {
    let (fill, stroke, stroke_width) =
        if item.selected { (SELECTED_FILL, SELECTED_STROKE, 3) } else { (ITEM_FILL, ITEM_STROKE, 1) };
    let class = if item.selected { "item selected" } else { "item" };
    let dash = if item.overflows { format!(" stroke-dasharray=\"{OVERFLOW_DASH}\"") } else { String::new() };
    let cx = item.x + item.width / 2.0;
    let cy = item.y + item.height / 2.0;
    format!(
        "  <g class=\"{class}\" data-id=\"{id}\">\n    <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"{dash}/>\n    <text x=\"{cx}\" y=\"{cy}\" font-size=\"{LABEL_FONT_SIZE}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{label}</text>\n  </g>\n",
        id = item.id,
        x = item.x,
        y = item.y,
        w = item.width,
        h = item.height,
        label = escape_xml(&item.label),
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

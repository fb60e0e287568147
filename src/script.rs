//! Scripted editor sessions.
//!
//! A script is a JSON array of events, each tagged by `type`. Pointer
//! coordinates are viewport (client) coordinates; the canvas rectangle is
//! recomputed from the current room size before every event, the way a
//! browser host re-reads the element's bounding box.
//!
//! ```json
//! [
//!   { "type": "resize", "width": 500 },
//!   { "type": "drop", "name": "Sofa", "width": 200, "height": 90, "x": 40, "y": 60 },
//!   { "type": "click", "x": 50, "y": 70 },
//!   { "type": "drag", "from": [50, 70], "to": [150, 120] },
//!   { "type": "key", "key": "Delete" }
//! ]
//! ```

use layout::engine::Action;
use layout::input::{Button, Key, Modifiers};
use layout::keyboard::KeyboardHub;
use layout::placement::FurnitureTemplate;
use layout::view::EditorView;
use layout::viewport::{CanvasRect, Point};
use serde::Deserialize;
use tracing::debug;

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

/// Errors from loading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("script parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One scripted editor input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Edit the room dimension inputs.
    Resize {
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    /// Drag a catalog template and drop it at a point.
    Drop {
        name: String,
        width: f64,
        height: f64,
        #[serde(default)]
        depth: f64,
        #[serde(default)]
        description: String,
        x: f64,
        y: f64,
    },
    /// Drop arbitrary text, as another application might.
    DropRaw { data: String, x: f64, y: f64 },
    /// Primary-button press and release at one point.
    Click { x: f64, y: f64 },
    /// Primary-button press, move and release.
    Drag { from: [f64; 2], to: [f64; 2] },
    /// A document-level key press.
    Key { key: String },
    /// The "clear room" action.
    Clear,
}

/// Counts of what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub placed: usize,
    pub moved: usize,
    pub removed: usize,
    /// Events that produced no actions at all.
    pub ignored: usize,
}

impl ReplaySummary {
    fn record(&mut self, actions: &[Action]) {
        self.events += 1;
        if actions.is_empty() {
            self.ignored += 1;
            return;
        }
        let mut moved = false;
        for action in actions {
            match action {
                Action::InstancePlaced(_) => self.placed += 1,
                Action::InstanceRemoved { .. } => self.removed += 1,
                Action::InstanceMoved { .. } => moved = true,
                _ => {}
            }
        }
        if moved {
            self.moved += 1;
        }
    }
}

/// Parse a script document.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] if `raw` is not a JSON array of events.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    Ok(serde_json::from_str(raw)?)
}

/// Feed `events` into `view`. Key events go through `hub`, so they reach the
/// view only while it is mounted. `origin` is the canvas's top-left corner in
/// viewport coordinates.
pub fn replay(view: &EditorView, hub: &KeyboardHub, origin: Point, events: &[ScriptEvent]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for event in events {
        let canvas = canvas_rect(view, origin);
        let actions = apply(view, hub, canvas, event);
        debug!(?event, actions = actions.len(), "script event replayed");
        summary.record(&actions);
    }
    summary
}

fn canvas_rect(view: &EditorView, origin: Point) -> CanvasRect {
    let core = view.core();
    CanvasRect::new(origin.x, origin.y, core.room.width(), core.room.height())
}

fn apply(view: &EditorView, hub: &KeyboardHub, canvas: CanvasRect, event: &ScriptEvent) -> Vec<Action> {
    match event {
        ScriptEvent::Resize { width, height } => {
            let mut actions = Vec::new();
            if let Some(w) = width {
                actions.extend(view.set_room_width(*w));
            }
            if let Some(h) = height {
                actions.extend(view.set_room_height(*h));
            }
            actions
        }
        ScriptEvent::Drop { name, width, height, depth, description, x, y } => {
            let template = FurnitureTemplate {
                name: name.clone(),
                width: *width,
                height: *height,
                depth: *depth,
                description: description.clone(),
            };
            match view.start_drag(&template) {
                Ok(payload) => view.on_drop(&payload.data, Point::new(*x, *y), canvas),
                Err(e) => {
                    debug!(error = %e, "drag refused");
                    Vec::new()
                }
            }
        }
        ScriptEvent::DropRaw { data, x, y } => view.on_drop(data, Point::new(*x, *y), canvas),
        ScriptEvent::Click { x, y } => {
            let at = Point::new(*x, *y);
            let mut actions = view.on_pointer_down(at, Button::Primary, canvas);
            actions.extend(view.on_pointer_up(at, Button::Primary, canvas));
            actions
        }
        ScriptEvent::Drag { from, to } => {
            let start = Point::new(from[0], from[1]);
            let end = Point::new(to[0], to[1]);
            let mut actions = view.on_pointer_down(start, Button::Primary, canvas);
            actions.extend(view.on_pointer_move(end, canvas));
            actions.extend(view.on_pointer_up(end, Button::Primary, canvas));
            actions
        }
        ScriptEvent::Key { key } => {
            hub.dispatch(&Key::new(key.as_str()), Modifiers::default());
            view.take_actions()
        }
        ScriptEvent::Clear => view.clear_room(),
    }
}

#![allow(clippy::float_cmp)]

use layout::engine::EditorCore;
use layout::room::{Room, RoomBounds};

use super::*;

fn mounted() -> (KeyboardHub, EditorView) {
    let hub = KeyboardHub::new();
    let view = EditorView::mount(&hub, EditorCore::new(Room::new(400.0, 300.0, RoomBounds::default())));
    (hub, view)
}

fn run(raw: &str) -> (EditorView, ReplaySummary) {
    let (hub, view) = mounted();
    let events = parse_script(raw).unwrap();
    let summary = replay(&view, &hub, Point::new(0.0, 0.0), &events);
    (view, summary)
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn parses_every_event_kind() {
    let events = parse_script(
        r#"[
            {"type": "resize", "width": 500},
            {"type": "drop", "name": "Sofa", "width": 200, "height": 90, "x": 10, "y": 20},
            {"type": "drop_raw", "data": "hello", "x": 0, "y": 0},
            {"type": "click", "x": 5, "y": 5},
            {"type": "drag", "from": [1, 2], "to": [3, 4]},
            {"type": "key", "key": "Delete"},
            {"type": "clear"}
        ]"#,
    )
    .unwrap();
    assert_eq!(events.len(), 7);
    assert_eq!(events[0], ScriptEvent::Resize { width: Some(500.0), height: None });
    assert_eq!(events[4], ScriptEvent::Drag { from: [1.0, 2.0], to: [3.0, 4.0] });
    assert_eq!(events[6], ScriptEvent::Clear);
}

#[test]
fn unknown_event_type_is_parse_error() {
    assert!(matches!(parse_script(r#"[{"type": "teleport"}]"#), Err(ScriptError::Parse(_))));
}

#[test]
fn non_array_is_parse_error() {
    assert!(parse_script(r#"{"type": "clear"}"#).is_err());
}

// =============================================================================
// REPLAY
// =============================================================================

#[test]
fn drop_places_at_room_local_point() {
    let (hub, view) = mounted();
    let events = parse_script(r#"[{"type": "drop", "name": "Desk", "width": 120, "height": 60, "x": 150, "y": 90}]"#).unwrap();
    let summary = replay(&view, &hub, Point::new(100.0, 50.0), &events);

    assert_eq!(summary.placed, 1);
    let core = view.core();
    let placed = &core.store.instances()[0];
    assert_eq!(placed.name, "Desk");
    assert_eq!((placed.x, placed.y), (50.0, 40.0));
}

#[test]
fn malformed_raw_drop_is_ignored() {
    let (view, summary) = run(r#"[{"type": "drop_raw", "data": "not json", "x": 10, "y": 10}]"#);
    assert_eq!(summary.ignored, 1);
    assert!(view.core().store.is_empty());
}

#[test]
fn legacy_raw_drop_is_placed() {
    let (view, summary) =
        run(r#"[{"type": "drop_raw", "data": "{\"name\":\"Chair\",\"width\":40,\"height\":40}", "x": 10, "y": 10}]"#);
    assert_eq!(summary.placed, 1);
    assert_eq!(view.core().store.instances()[0].name, "Chair");
}

#[test]
fn drop_with_invalid_template_is_ignored() {
    let (view, summary) = run(r#"[{"type": "drop", "name": "", "width": 10, "height": 10, "x": 0, "y": 0}]"#);
    assert_eq!(summary.ignored, 1);
    assert!(view.core().store.is_empty());
}

#[test]
fn click_then_delete_removes_instance() {
    let (view, summary) = run(
        r#"[
            {"type": "drop", "name": "Sofa", "width": 200, "height": 90, "x": 10, "y": 10},
            {"type": "click", "x": 50, "y": 50},
            {"type": "key", "key": "Delete"}
        ]"#,
    );
    assert_eq!(summary.placed, 1);
    assert_eq!(summary.removed, 1);
    assert!(view.core().store.is_empty());
    assert!(view.core().selection().is_none());
}

#[test]
fn delete_without_selection_is_ignored() {
    let (view, summary) = run(
        r#"[
            {"type": "drop", "name": "Sofa", "width": 200, "height": 90, "x": 10, "y": 10},
            {"type": "key", "key": "Backspace"}
        ]"#,
    );
    assert_eq!(summary.removed, 0);
    assert_eq!(summary.ignored, 1);
    assert_eq!(view.core().store.len(), 1);
}

#[test]
fn drag_moves_by_pointer_delta() {
    let (view, summary) = run(
        r#"[
            {"type": "drop", "name": "Bed", "width": 100, "height": 100, "x": 20, "y": 20},
            {"type": "drag", "from": [30, 30], "to": [130, 80]}
        ]"#,
    );
    assert_eq!(summary.moved, 1);
    let core = view.core();
    let bed = &core.store.instances()[0];
    assert_eq!((bed.x, bed.y), (120.0, 70.0));
}

#[test]
fn resize_clamps_and_rescopes_canvas() {
    let (view, summary) = run(r#"[{"type": "resize", "width": 5000, "height": 50}]"#);
    assert_eq!(summary.events, 1);
    assert_eq!(view.core().room.width(), 1000.0);
    assert_eq!(view.core().room.height(), 100.0);
}

#[test]
fn clear_empties_room() {
    let (view, summary) = run(
        r#"[
            {"type": "drop", "name": "A", "width": 10, "height": 10, "x": 0, "y": 0},
            {"type": "drop", "name": "B", "width": 10, "height": 10, "x": 50, "y": 50},
            {"type": "clear"}
        ]"#,
    );
    assert_eq!(summary.placed, 2);
    assert!(view.core().store.is_empty());
}

#[test]
fn keys_after_unmount_do_nothing() {
    let (hub, view) = mounted();
    let events = parse_script(
        r#"[
            {"type": "drop", "name": "Sofa", "width": 200, "height": 90, "x": 10, "y": 10},
            {"type": "click", "x": 50, "y": 50}
        ]"#,
    )
    .unwrap();
    replay(&view, &hub, Point::new(0.0, 0.0), &events);
    let core = view.unmount();

    assert!(!hub.dispatch(&Key::new("Delete"), Modifiers::default()));
    assert_eq!(core.store.len(), 1);
}

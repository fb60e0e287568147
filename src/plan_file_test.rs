#![allow(clippy::float_cmp)]

use layout::placement::{FurnitureFootprint, PlacementStore};
use layout::room::RoomBounds;
use layout::viewport::Point;

use super::*;

fn furnished() -> (Room, PlacementStore) {
    let room = Room::new(500.0, 350.0, RoomBounds::default());
    let mut store = PlacementStore::new();
    let sofa = FurnitureFootprint { name: "Sofa".into(), width: 200.0, height: 90.0 };
    let lamp = FurnitureFootprint { name: "Lamp".into(), width: 30.0, height: 30.0 };
    store.add_instance(&sofa, Point::new(20.0, 40.0));
    store.add_instance(&lamp, Point::new(480.0, 10.0));
    (room, store)
}

#[test]
fn save_writes_plan_readable_by_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let (room, store) = furnished();

    let mut sink = JsonFilePlanSink::new(&path);
    sink.save(&room, store.instances()).unwrap();

    let plan = load_plan(&path).unwrap();
    assert_eq!(plan.width, 500.0);
    assert_eq!(plan.height, 350.0);
    assert_eq!(plan.instances, store.instances());
}

#[test]
fn save_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let (room, mut store) = furnished();

    let mut sink = JsonFilePlanSink::new(&path);
    sink.save(&room, store.instances()).unwrap();
    store.clear_all();
    sink.save(&room, store.instances()).unwrap();

    assert!(load_plan(&path).unwrap().instances.is_empty());
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("plan.json");
    let (room, store) = furnished();

    let err = JsonFilePlanSink::new(&path).save(&room, store.instances()).unwrap_err();
    assert!(matches!(err, SaveError::Io(_)), "{err:?}");
}

#[test]
fn load_rejects_non_plan_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.json");
    std::fs::write(&path, "{\"rooms\": []}").unwrap();
    assert!(matches!(load_plan(&path), Err(SaveError::Encode(_))));
}

#[test]
fn path_accessor_returns_target() {
    let sink = JsonFilePlanSink::new("/tmp/plan.json");
    assert_eq!(sink.path(), Path::new("/tmp/plan.json"));
}

#[test]
fn saved_plan_reopens_in_editor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let (room, store) = furnished();
    JsonFilePlanSink::new(&path).save(&room, store.instances()).unwrap();

    let core = layout::engine::EditorCore::from_plan(&load_plan(&path).unwrap(), RoomBounds::default());
    assert_eq!(core.room, room);
    assert_eq!(core.store.instances(), store.instances());
    assert_eq!(core.selection(), None);
}

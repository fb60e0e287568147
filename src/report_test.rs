use layout::placement::FurnitureFootprint;
use layout::room::{Room, RoomBounds};
use layout::viewport::Point;

use super::*;

fn template(name: &str) -> FurnitureTemplate {
    FurnitureTemplate { name: name.to_owned(), width: 80.0, height: 40.0, depth: 30.0, description: "x".into() }
}

#[test]
fn items_table_aligns_non_ascii_names() {
    let table = items_table(&[template("Élan Chaise"), template("Desk")]);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);

    let width_col = |line: &str| line.chars().position(|c| c.is_ascii_digit()).unwrap();
    assert_eq!(width_col(lines[1]), width_col(lines[2]));
    assert!(lines[0].starts_with("NAME        "));
}

#[test]
fn items_table_header_only_when_empty() {
    let table = items_table(&[]);
    assert_eq!(table.lines().count(), 1);
    assert!(table.starts_with("NAME  "));
}

#[test]
fn room_listing_flags_overflow() {
    let mut core = EditorCore::new(Room::new(400.0, 300.0, RoomBounds::default()));
    let sofa = FurnitureFootprint { name: "Sofa".into(), width: 180.0, height: 80.0 };
    core.store.add_instance(&sofa, Point::new(10.0, 10.0));
    core.store.add_instance(&sofa, Point::new(350.0, 10.0));

    let listing = room_listing(&core);
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines[0], "room 400x300 with 2 item(s)");
    assert_eq!(lines[1], "  Sofa at (10, 10) 180x80");
    assert_eq!(lines[2], "  Sofa at (350, 10) 180x80  (outside room)");
}

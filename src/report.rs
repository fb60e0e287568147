//! Plain-text output for the CLI.

use layout::engine::EditorCore;
use layout::placement::FurnitureTemplate;

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

/// Catalog templates as an aligned table. Column widths count characters,
/// not bytes.
#[must_use]
pub fn items_table(items: &[FurnitureTemplate]) -> String {
    let name_width = items.iter().map(|t| t.name.chars().count()).max().unwrap_or(0).max("NAME".len());
    let mut out = String::new();
    out.push_str(&format!("{:<name_width$}  {:>8}  {:>8}  {:>8}  DESCRIPTION\n", "NAME", "WIDTH", "HEIGHT", "DEPTH"));
    for item in items {
        out.push_str(&format!(
            "{:<name_width$}  {:>8}  {:>8}  {:>8}  {}\n",
            item.name, item.width, item.height, item.depth, item.description
        ));
    }
    out
}

/// The room size and every placed instance, flagging ones that stick out.
#[must_use]
pub fn room_listing(core: &EditorCore) -> String {
    let mut out = String::new();
    out.push_str(&format!("room {}x{} with {} item(s)\n", core.room.width(), core.room.height(), core.store.len()));
    for instance in core.store.instances() {
        let fits = if core.room.contains(instance) { "" } else { "  (outside room)" };
        out.push_str(&format!(
            "  {} at ({}, {}) {}x{}{fits}\n",
            instance.name, instance.x, instance.y, instance.width, instance.height
        ));
    }
    out
}

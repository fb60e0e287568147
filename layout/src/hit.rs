#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::placement::{InstanceId, PlacementStore};
use crate::viewport::Point;

/// The topmost instance under `room_pt`, if any.
///
/// Instances are checked in reverse paint order so the one drawn on top wins
/// where footprints overlap.
#[must_use]
pub fn hit_test(room_pt: Point, store: &PlacementStore) -> Option<InstanceId> {
    store
        .instances()
        .iter()
        .rev()
        .find(|instance| instance.contains_point(room_pt))
        .map(|instance| instance.id)
}

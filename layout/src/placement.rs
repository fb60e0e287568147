//! Placement model: furniture templates, placed instances, and the store.
//!
//! A [`FurnitureTemplate`] is an immutable catalog definition. Placing one
//! copies its [`FurnitureFootprint`] (name, width, height) into a fresh
//! [`PlacedFurniture`] with its own id and position, so later catalog changes
//! never reach instances already on the canvas.
//!
//! [`PlacementStore`] owns the ordered instance list and the selection. List
//! order is insertion order and doubles as paint order: later entries draw on
//! top and win hit tests.
//!
//! Positions are stored exactly as given. Nothing here clamps an instance to
//! the room or rejects overlaps; see [`crate::room::Room::contains`] for the
//! reporting side of that policy.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::viewport::Point;

/// Unique identifier for a placed instance.
pub type InstanceId = Uuid;

/// A furniture definition as supplied by the catalog.
///
/// Identity is structural; there is no stored id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureTemplate {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub description: String,
}

impl FurnitureTemplate {
    /// The subset of the template that placement needs.
    #[must_use]
    pub fn footprint(&self) -> FurnitureFootprint {
        FurnitureFootprint { name: self.name.clone(), width: self.width, height: self.height }
    }
}

/// Name and floor footprint carried from a template into a placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureFootprint {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl From<&FurnitureTemplate> for FurnitureFootprint {
    fn from(template: &FurnitureTemplate) -> Self {
        template.footprint()
    }
}

/// A furniture item placed in the room.
///
/// Only `x` and `y` change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedFurniture {
    pub id: InstanceId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Left edge in room-local coordinates.
    pub x: f64,
    /// Top edge in room-local coordinates.
    pub y: f64,
}

impl PlacedFurniture {
    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `pt` falls inside the footprint. Left/top edges are inclusive,
    /// right/bottom edges exclusive.
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.x + self.width && pt.y >= self.y && pt.y < self.y + self.height
    }
}

/// Ordered collection of placed instances plus the single selection.
#[derive(Debug, Clone, Default)]
pub struct PlacementStore {
    instances: Vec<PlacedFurniture>,
    selected: Option<InstanceId>,
}

impl PlacementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved instances, keeping their ids and
    /// paint order. Later duplicates of an id are dropped. Nothing is selected.
    #[must_use]
    pub fn restore(saved: impl IntoIterator<Item = PlacedFurniture>) -> Self {
        let mut store = Self::new();
        for instance in saved {
            if !store.contains(&instance.id) {
                store.instances.push(instance);
            }
        }
        store
    }

    /// Place a copy of `footprint` at `position` and return the new id.
    ///
    /// Always succeeds. The instance is appended, so it paints above every
    /// existing instance.
    pub fn add_instance(&mut self, footprint: &FurnitureFootprint, position: Point) -> InstanceId {
        let id = Uuid::new_v4();
        self.instances.push(PlacedFurniture {
            id,
            name: footprint.name.clone(),
            width: footprint.width,
            height: footprint.height,
            x: position.x,
            y: position.y,
        });
        id
    }

    /// Replace the position of `id`. Returns false if no such instance exists.
    pub fn move_instance(&mut self, id: &InstanceId, position: Point) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| &i.id == id) else {
            return false;
        };
        instance.x = position.x;
        instance.y = position.y;
        true
    }

    /// Remove `id`, clearing the selection if it pointed there.
    ///
    /// Returns the removed instance, or `None` if it was already gone.
    pub fn remove_instance(&mut self, id: &InstanceId) -> Option<PlacedFurniture> {
        let index = self.instances.iter().position(|i| &i.id == id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Some(self.instances.remove(index))
    }

    /// Select `id`. Ids that are not in the store (for example from a
    /// pointer event delivered after the instance was deleted) are ignored
    /// and leave the selection untouched.
    pub fn select_instance(&mut self, id: &InstanceId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selected = Some(*id);
        true
    }

    /// Drop the selection without touching any instance.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove every instance and clear the selection.
    pub fn clear_all(&mut self) {
        self.instances.clear();
        self.selected = None;
    }

    /// The selected instance id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<InstanceId> {
        self.selected
    }

    /// The selected instance, if any.
    #[must_use]
    pub fn selected_instance(&self) -> Option<&PlacedFurniture> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&PlacedFurniture> {
        self.instances.iter().find(|i| &i.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.get(id).is_some()
    }

    /// All instances in paint order (bottom first).
    #[must_use]
    pub fn instances(&self) -> &[PlacedFurniture] {
        &self.instances
    }

    /// Number of placed instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

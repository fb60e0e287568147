use crate::drag::{self, DragError, DragMessage, DragPayload};
use crate::hit::hit_test;
use crate::input::{Button, InputState, Key};
use crate::placement::{FurnitureTemplate, InstanceId, PlacedFurniture, PlacementStore};
use crate::plan::{PlanSink, RoomPlan, SaveError};
use crate::render::{self, Scene};
use crate::room::{Room, RoomBounds};
use crate::selection::{self, ClickOutcome};
use crate::viewport::{CanvasRect, Point};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InstancePlaced(PlacedFurniture),
    InstanceMoved { id: InstanceId, x: f64, y: f64 },
    InstanceRemoved { id: InstanceId },
    SelectionChanged(Option<InstanceId>),
    RoomResized { width: f64, height: f64 },
    RoomCleared,
    RenderNeeded,
}

/// Editor state and event routing.
///
/// Every pointer or drop handler takes the canvas's current [`CanvasRect`];
/// the mapping to room coordinates is recomputed per event.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    pub room: Room,
    pub store: PlacementStore,
    pub input: InputState,
}

impl EditorCore {
    #[must_use]
    pub fn new(room: Room) -> Self {
        Self { room, store: PlacementStore::new(), input: InputState::Idle }
    }

    /// Reopen a saved plan. The room size is clamped into `bounds`;
    /// instance positions are kept as saved.
    #[must_use]
    pub fn from_plan(plan: &RoomPlan, bounds: RoomBounds) -> Self {
        Self {
            room: Room::new(plan.width, plan.height, bounds),
            store: PlacementStore::restore(plan.instances.iter().cloned()),
            input: InputState::Idle,
        }
    }

    // --- Room ---

    /// Edit the room width (clamped to the room's bounds).
    pub fn set_room_width(&mut self, width: f64) -> Vec<Action> {
        let before = self.room.width();
        if self.room.set_width(width) == before {
            return Vec::new();
        }
        self.resized()
    }

    /// Edit the room height (clamped to the room's bounds).
    pub fn set_room_height(&mut self, height: f64) -> Vec<Action> {
        let before = self.room.height();
        if self.room.set_height(height) == before {
            return Vec::new();
        }
        self.resized()
    }

    fn resized(&self) -> Vec<Action> {
        vec![
            Action::RoomResized { width: self.room.width(), height: self.room.height() },
            Action::RenderNeeded,
        ]
    }

    /// Empty the room. Any selection goes with it.
    pub fn clear_room(&mut self) -> Vec<Action> {
        let had_selection = self.store.selection().is_some();
        self.store.clear_all();
        self.input = InputState::Idle;
        let mut actions = vec![Action::RoomCleared];
        if had_selection {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Drag and drop ---

    /// Payload for dragging `template` out of the catalog list.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::InvalidTemplate`] if the template cannot be placed.
    pub fn start_drag(&self, template: &FurnitureTemplate) -> Result<DragPayload, DragError> {
        drag::start_drag(template)
    }

    /// Handle drop data released at viewport point `client` over the canvas.
    ///
    /// Malformed data is ignored and yields no actions.
    pub fn on_drop(&mut self, data: &str, client: Point, canvas: CanvasRect) -> Vec<Action> {
        let Ok(message) = DragMessage::decode(data) else {
            return Vec::new();
        };
        match message {
            DragMessage::PlaceTemplate { template } => {
                let id = self.store.add_instance(&template, canvas.to_room(client));
                match self.store.get(&id) {
                    Some(placed) => vec![Action::InstancePlaced(placed.clone()), Action::RenderNeeded],
                    None => Vec::new(),
                }
            }
        }
    }

    // --- Pointer ---

    /// Primary-button press: select the topmost instance under the pointer
    /// and start moving it. Presses on empty floor do nothing.
    pub fn on_pointer_down(&mut self, client: Point, button: Button, canvas: CanvasRect) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let room_pt = canvas.to_room(client);
        let Some(id) = hit_test(room_pt, &self.store) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        match selection::click_instance(&mut self.store, &id) {
            ClickOutcome::Changed(_) => {
                actions.push(Action::SelectionChanged(Some(id)));
                actions.push(Action::RenderNeeded);
            }
            ClickOutcome::Unchanged => {}
            ClickOutcome::Ignored => return actions,
        }

        if let Some(instance) = self.store.get(&id) {
            self.input = InputState::MovingInstance {
                id,
                grab_offset: room_pt.offset_from(instance.position()),
                moved: false,
            };
        }
        actions
    }

    /// Pointer motion. Moves the grabbed instance, if any.
    pub fn on_pointer_move(&mut self, client: Point, canvas: CanvasRect) -> Vec<Action> {
        let InputState::MovingInstance { id, grab_offset, .. } = self.input else {
            return Vec::new();
        };
        let Some(current) = self.store.get(&id).map(PlacedFurniture::position) else {
            // The instance was deleted mid-gesture.
            self.input = InputState::Idle;
            return Vec::new();
        };

        let target = canvas.to_room(client).offset_from(grab_offset);
        if target == current || !self.store.move_instance(&id, target) {
            return Vec::new();
        }
        self.input = InputState::MovingInstance { id, grab_offset, moved: true };
        vec![Action::InstanceMoved { id, x: target.x, y: target.y }, Action::RenderNeeded]
    }

    /// Primary-button release. Applies the final position and ends the gesture.
    pub fn on_pointer_up(&mut self, client: Point, button: Button, canvas: CanvasRect) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let actions = self.on_pointer_move(client, canvas);
        self.input = InputState::Idle;
        actions
    }

    /// The pointer left the window or the gesture was interrupted.
    pub fn on_pointer_cancel(&mut self) {
        self.input = InputState::Idle;
    }

    // --- Keyboard ---

    /// Delete/Backspace removes the selected instance.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let Some(removed) = selection::handle_key(&mut self.store, key) else {
            return Vec::new();
        };
        if self.input.moving_id() == Some(removed.id) {
            self.input = InputState::Idle;
        }
        vec![Action::InstanceRemoved { id: removed.id }, Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Output ---

    /// Display list for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render::build_scene(&self.room, &self.store)
    }

    /// Snapshot of the room and its instances.
    #[must_use]
    pub fn plan(&self) -> RoomPlan {
        RoomPlan::capture(&self.room, self.store.instances())
    }

    /// Hand the current plan to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`SaveError`].
    pub fn save_plan(&self, sink: &mut dyn PlanSink) -> Result<(), SaveError> {
        sink.save(&self.room, self.store.instances())
    }

    // --- Queries ---

    /// The currently selected instance, if any.
    #[must_use]
    pub fn selection(&self) -> Option<InstanceId> {
        self.store.selection()
    }

    /// Look up an instance by id.
    #[must_use]
    pub fn instance(&self, id: &InstanceId) -> Option<&PlacedFurniture> {
        self.store.get(id)
    }
}

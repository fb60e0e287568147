//! Mounted editor view.
//!
//! [`EditorView`] is the lifecycle object a host creates when the planner page
//! mounts. Mounting acquires a document-level key subscription that routes
//! Delete/Backspace into the editor; dropping (or [`EditorView::unmount`]ing)
//! the view releases it. Actions produced by key presses are queued and
//! collected with [`EditorView::take_actions`], since they arrive outside the
//! host's own handler calls.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::drag::{DragError, DragPayload};
use crate::engine::{Action, EditorCore};
use crate::input::Button;
use crate::keyboard::{KeySubscription, KeyboardHub};
use crate::placement::FurnitureTemplate;
use crate::plan::{PlanSink, SaveError};
use crate::render::Scene;
use crate::viewport::{CanvasRect, Point};

/// A mounted editor: core state plus its keyboard subscription.
pub struct EditorView {
    core: Rc<RefCell<EditorCore>>,
    key_actions: Rc<RefCell<Vec<Action>>>,
    keys: KeySubscription,
}

impl EditorView {
    /// Mount `core`, subscribing to key events on `hub`.
    #[must_use]
    pub fn mount(hub: &KeyboardHub, core: EditorCore) -> Self {
        let core = Rc::new(RefCell::new(core));
        let key_actions = Rc::new(RefCell::new(Vec::new()));

        let weak_core = Rc::downgrade(&core);
        let weak_actions = Rc::downgrade(&key_actions);
        let keys = hub.subscribe(move |key, _modifiers| {
            let (Some(core), Some(queue)) = (weak_core.upgrade(), weak_actions.upgrade()) else {
                return false;
            };
            let Ok(mut editor) = core.try_borrow_mut() else {
                return false;
            };
            let actions = editor.on_key_down(key);
            let handled = !actions.is_empty();
            queue.borrow_mut().extend(actions);
            handled
        });

        Self { core, key_actions, keys }
    }

    /// Release the key subscription and return the final editor state.
    #[must_use]
    pub fn unmount(self) -> EditorCore {
        let Self { core, keys, .. } = self;
        drop(keys);
        match Rc::try_unwrap(core) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.borrow().clone(),
        }
    }

    /// Whether the key listener is still registered.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.keys.is_active()
    }

    /// Read access to the editor state.
    #[must_use]
    pub fn core(&self) -> Ref<'_, EditorCore> {
        self.core.borrow()
    }

    /// Drain actions produced by key presses since the last call.
    pub fn take_actions(&self) -> Vec<Action> {
        std::mem::take(&mut *self.key_actions.borrow_mut())
    }

    // --- Delegated editor inputs ---

    pub fn set_room_width(&self, width: f64) -> Vec<Action> {
        self.core.borrow_mut().set_room_width(width)
    }

    pub fn set_room_height(&self, height: f64) -> Vec<Action> {
        self.core.borrow_mut().set_room_height(height)
    }

    pub fn clear_room(&self) -> Vec<Action> {
        self.core.borrow_mut().clear_room()
    }

    /// # Errors
    ///
    /// Returns [`DragError::InvalidTemplate`] if the template cannot be placed.
    pub fn start_drag(&self, template: &FurnitureTemplate) -> Result<DragPayload, DragError> {
        self.core.borrow().start_drag(template)
    }

    pub fn on_drop(&self, data: &str, client: Point, canvas: CanvasRect) -> Vec<Action> {
        self.core.borrow_mut().on_drop(data, client, canvas)
    }

    pub fn on_pointer_down(&self, client: Point, button: Button, canvas: CanvasRect) -> Vec<Action> {
        self.core.borrow_mut().on_pointer_down(client, button, canvas)
    }

    pub fn on_pointer_move(&self, client: Point, canvas: CanvasRect) -> Vec<Action> {
        self.core.borrow_mut().on_pointer_move(client, canvas)
    }

    pub fn on_pointer_up(&self, client: Point, button: Button, canvas: CanvasRect) -> Vec<Action> {
        self.core.borrow_mut().on_pointer_up(client, button, canvas)
    }

    pub fn on_pointer_cancel(&self) {
        self.core.borrow_mut().on_pointer_cancel();
    }

    // --- Delegated output ---

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.core.borrow().scene()
    }

    /// # Errors
    ///
    /// Propagates the sink's [`SaveError`].
    pub fn save_plan(&self, sink: &mut dyn PlanSink) -> Result<(), SaveError> {
        self.core.borrow().save_plan(sink)
    }
}

//! Single-selection state machine and the delete shortcut.
//!
//! ```text
//!   Unselected ──click(id)──▶ Selected(id) ──click(other)──▶ Selected(other)
//!        ▲                        │
//!        └── Delete/Backspace ────┤  (removes the instance)
//!        └── removed elsewhere ───┘  (e.g. clear room)
//! ```
//!
//! The selection value itself lives in [`PlacementStore`], which keeps it
//! consistent with removals. This module layers the transitions on top.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::input::Key;
use crate::placement::{InstanceId, PlacedFurniture, PlacementStore};

/// Observable selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(InstanceId),
}

impl SelectionState {
    /// Read the state from the store.
    #[must_use]
    pub fn of(store: &PlacementStore) -> Self {
        store.selection().map_or(Self::Unselected, Self::Selected)
    }

    #[must_use]
    pub fn selected_id(self) -> Option<InstanceId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::Unselected => None,
        }
    }
}

/// Result of a click on a placed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Selection moved to the clicked instance.
    Changed(SelectionState),
    /// The instance was already selected.
    Unchanged,
    /// The id no longer exists (stale pointer event); nothing happened.
    Ignored,
}

/// Apply a click on instance `id`.
pub fn click_instance(store: &mut PlacementStore, id: &InstanceId) -> ClickOutcome {
    if store.selection().as_ref() == Some(id) {
        return ClickOutcome::Unchanged;
    }
    if store.select_instance(id) {
        ClickOutcome::Changed(SelectionState::Selected(*id))
    } else {
        ClickOutcome::Ignored
    }
}

/// Apply a key press. Delete and Backspace remove the selected instance and
/// return it; every other key, or any key with nothing selected, is a no-op.
pub fn handle_key(store: &mut PlacementStore, key: &Key) -> Option<PlacedFurniture> {
    if !key.is_delete() {
        return None;
    }
    let id = store.selection()?;
    store.remove_instance(&id)
}

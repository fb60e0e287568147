//! Input model: pointer buttons, modifier keys, keys, and the pointer gesture
//! state machine.
//!
//! `InputState` tracks the gesture between pointer-down and pointer-up so the
//! engine can turn pointer moves into position updates for the instance being
//! repositioned.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::placement::InstanceId;
use crate::viewport::Point;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Whether this key deletes the selected instance (Delete or Backspace).
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }
}

/// Pointer gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A placed instance is being repositioned.
    MovingInstance {
        /// Instance being moved.
        id: InstanceId,
        /// Pointer position minus the instance's top-left at grab time, so the
        /// instance keeps its offset under the pointer.
        grab_offset: Point,
        /// Whether any pointer-move has been applied yet.
        moved: bool,
    },
}

impl InputState {
    /// The instance under an active move gesture, if any.
    #[must_use]
    pub fn moving_id(&self) -> Option<InstanceId> {
        match self {
            Self::MovingInstance { id, .. } => Some(*id),
            Self::Idle => None,
        }
    }
}

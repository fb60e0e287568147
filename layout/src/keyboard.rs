//! Document-scoped keyboard listeners with scoped subscriptions.
//!
//! [`KeyboardHub`] stands in for the document/window key event target: the
//! host forwards every `keydown` to [`KeyboardHub::dispatch`]. Views register
//! through [`KeyboardHub::subscribe`] and get back a [`KeySubscription`] whose
//! drop removes the listener, so a torn-down view can never receive keys.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::input::{Key, Modifiers};

type Handler = Rc<RefCell<dyn FnMut(&Key, Modifiers) -> bool>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Handler)>,
}

/// Fan-out point for document-level key events.
///
/// Cloning yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    listeners: Rc<RefCell<Listeners>>,
}

impl KeyboardHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every dispatched key. The handler returns
    /// whether it consumed the key. The listener stays registered until the
    /// returned subscription is dropped.
    #[must_use = "dropping the subscription deregisters the listener immediately"]
    pub fn subscribe<F>(&self, handler: F) -> KeySubscription
    where
        F: FnMut(&Key, Modifiers) -> bool + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let handler: Handler = Rc::new(RefCell::new(handler));
        listeners.entries.push((id, handler));
        KeySubscription { listeners: Rc::downgrade(&self.listeners), id }
    }

    /// Deliver a key to every registered listener in registration order.
    ///
    /// Returns `true` if any listener consumed it, in which case the host
    /// should suppress the browser default (e.g. Backspace navigation).
    pub fn dispatch(&self, key: &Key, modifiers: Modifiers) -> bool {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<(u64, Handler)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        let mut handled = false;
        for (id, handler) in snapshot {
            // An earlier listener may have dropped this one's subscription.
            if !self.is_registered(id) {
                continue;
            }
            if let Ok(mut f) = handler.try_borrow_mut() {
                handled |= (*f)(key, modifiers);
            }
        }
        handled
    }

    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().entries.iter().any(|(entry, _)| *entry == id)
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Guard for a registered key listener. Dropping it deregisters the listener.
pub struct KeySubscription {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl KeySubscription {
    /// Whether the listener is still registered with a live hub.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.borrow().entries.iter().any(|(id, _)| *id == self.id))
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

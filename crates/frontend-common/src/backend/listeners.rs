//! Session-change listener registry.
//!
//! Backend implementations embed a [`SessionListeners`] and notify it
//! whenever the session changes (sign-in, sign-out, token refresh). The
//! returned [`SessionSubscription`] unregisters its listener on drop, so a
//! component that unmounts cannot leak a listener per mount.

use super::types::Session;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::Callback;

/// Callback invoked with the new session value (`None` on sign-out).
pub type SessionListener = Callback<Option<Session>>;

type Registry = Rc<RefCell<Vec<(u64, SessionListener)>>>;

/// Listener registry shared by a backend implementation.
#[derive(Clone, Default)]
pub struct SessionListeners {
    registry: Registry,
    next_id: Rc<RefCell<u64>>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: SessionListener) -> SessionSubscription {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.registry.borrow_mut().push((id, listener));
        SessionSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notify every registered listener. Listeners are invoked outside the
    /// registry borrow so a handler may subscribe or unsubscribe reentrantly.
    pub fn notify(&self, session: Option<&Session>) {
        let listeners: Vec<SessionListener> = self
            .registry
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener.emit(session.cloned());
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty()
    }
}

/// Handle to a registered session listener.
pub struct SessionSubscription {
    id: u64,
    registry: Weak<RefCell<Vec<(u64, SessionListener)>>>,
}

impl SessionSubscription {
    /// Explicitly unregister; equivalent to dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_listener(count: Rc<Cell<u32>>) -> SessionListener {
        Callback::from(move |_| count.set(count.get() + 1))
    }

    #[test]
    fn notify_reaches_all_subscribers() {
        let listeners = SessionListeners::new();
        let count = Rc::new(Cell::new(0));
        let _a = listeners.subscribe(counting_listener(count.clone()));
        let _b = listeners.subscribe(counting_listener(count.clone()));

        listeners.notify(None);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let listeners = SessionListeners::new();
        let count = Rc::new(Cell::new(0));
        let sub = listeners.subscribe(counting_listener(count.clone()));
        assert_eq!(listeners.len(), 1);

        sub.unsubscribe();
        assert!(listeners.is_empty());

        listeners.notify(None);
        assert_eq!(count.get(), 0);
    }
}

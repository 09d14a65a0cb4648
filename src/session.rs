//! Session accessor.
//!
//! Components never touch a global user directly; they read through
//! [`SessionAccessor`] and, when they need to react to sign-in changes,
//! subscribe for notifications.  The store is single-threaded (`Rc`/`RefCell`)
//! like the rest of the UI state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SessionUser;

pub type SessionListener = Rc<dyn Fn(Option<&SessionUser>)>;

/// Read-only view of the signed-in user.
pub trait SessionAccessor {
    fn current(&self) -> Option<SessionUser>;

    /// Register `listener`; it fires after every change.
    fn subscribe(&self, listener: SessionListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    user: Option<SessionUser>,
    listeners: Vec<(SubscriptionId, SessionListener)>,
    next_id: u64,
}

/// Owner of the session state.  Cloning shares the same store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session user and notify listeners.  No notification when
    /// nothing changed.
    pub fn set(&self, user: Option<SessionUser>) {
        let listeners: Vec<SessionListener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.user == user {
                return;
            }
            inner.user = user.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Borrow released: listeners may read the store again.
        for listener in listeners {
            listener(user.as_ref());
        }
    }
}

impl SessionAccessor for SessionStore {
    fn current(&self) -> Option<SessionUser> {
        self.inner.borrow().user.clone()
    }

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().listeners.retain(|(i, _)| *i != id);
    }
}

thread_local! {
    /// Process-wide session store; handed out as a [`SessionAccessor`].
    pub static SESSION: SessionStore = SessionStore::new();
}

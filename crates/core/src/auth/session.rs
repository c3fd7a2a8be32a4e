//! Application-wide token cache
//!
//! The cache is passed explicitly to whoever needs it. The browser runs a
//! single thread, so the shared handle is `Rc<RefCell<_>>`.

use super::SessionToken;
use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to the cached session token
pub trait SessionContext {
    /// Currently cached token, if any
    fn cached_token(&self) -> Option<SessionToken>;

    /// Replace the cached token
    fn cache_token(&self, token: SessionToken);

    /// Drop the cached token
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.cached_token().is_some()
    }
}

/// Cloneable handle to one shared token cache
#[derive(Clone, Default)]
pub struct SharedSession {
    token: Rc<RefCell<Option<SessionToken>>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionContext for SharedSession {
    fn cached_token(&self) -> Option<SessionToken> {
        self.token.borrow().clone()
    }

    fn cache_token(&self, token: SessionToken) {
        *self.token.borrow_mut() = Some(token);
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

// Handles compare by identity so UI contexts only re-render on a new cache.
impl PartialEq for SharedSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.token, &other.token)
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSession")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

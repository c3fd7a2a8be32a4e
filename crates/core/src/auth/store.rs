//! Persistent token storage

use super::SessionToken;
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Persistent client-side storage for the access token
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore {
    /// Load the stored token. An empty stored value counts as no token.
    fn load(&self) -> Result<Option<SessionToken>>;

    /// Overwrite the stored token
    fn save(&self, token: &SessionToken) -> Result<()>;

    /// Remove the stored token
    fn remove(&self) -> Result<()>;
}

/// In-memory store, used off-browser and in tests
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value, as if written by an earlier login
    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        Ok(SessionToken::from_stored(self.raw()))
    }

    fn save(&self, token: &SessionToken) -> Result<()> {
        *self.value.borrow_mut() = Some(token.as_str().to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        self.value.borrow_mut().take();
        Ok(())
    }
}

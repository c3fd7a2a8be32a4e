//! Login and logout bookkeeping

use crate::client::set_auth_token;
use crate::storage::LocalTokenStore;
use lmm_core::{SessionContext, SessionToken, SharedSession, TokenStore};
use tracing::warn;

/// Persist a freshly issued token and cache it for the running app
pub fn establish_session(session: &SharedSession, token: SessionToken) {
    if let Err(e) = LocalTokenStore.save(&token) {
        warn!(error = %e, "Failed to persist access token");
    }
    set_auth_token(Some(&token));
    session.cache_token(token);
}

/// Forget the token in storage and in the running app
pub fn end_session(session: &SharedSession) {
    if let Err(e) = LocalTokenStore.remove() {
        warn!(error = %e, "Failed to remove stored access token");
    }
    set_auth_token(None);
    session.clear();
}

//! `localStorage`-backed token store

use lmm_core::{AuthConfig, Error, Result, SessionToken, TokenStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Token store over the browser's `localStorage`, holding the raw token
/// under [`AuthConfig::ACCESS_TOKEN_KEY`]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

/// Get localStorage
fn get_local_storage() -> Result<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(Error::StorageUnavailable)
}

fn storage_error(err: &JsValue) -> Error {
    Error::Storage(format!("{err:?}"))
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        let raw = get_local_storage()?
            .get_item(AuthConfig::ACCESS_TOKEN_KEY)
            .map_err(|e| storage_error(&e))?;
        Ok(SessionToken::from_stored(raw))
    }

    fn save(&self, token: &SessionToken) -> Result<()> {
        get_local_storage()?
            .set_item(AuthConfig::ACCESS_TOKEN_KEY, token.as_str())
            .map_err(|e| storage_error(&e))
    }

    fn remove(&self) -> Result<()> {
        get_local_storage()?
            .remove_item(AuthConfig::ACCESS_TOKEN_KEY)
            .map_err(|e| storage_error(&e))
    }
}

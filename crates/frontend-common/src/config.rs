//! Runtime environment served next to the bundle

use lmm_http::types::RuntimeEnv;
use tracing::{debug, warn};

/// Origin of the current page, if running in a browser
pub fn window_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

/// Fetch the runtime environment from the serving host.
///
/// Falls back to defaults (same-origin API, no asset host) when the
/// document is missing or unreadable.
pub async fn load_runtime_env() -> RuntimeEnv {
    let Some(origin) = window_origin() else {
        return RuntimeEnv::default();
    };

    match fetch_runtime_env(&origin).await {
        Ok(env) => {
            debug!(api_url = %env.api_url, asset_url = %env.asset_url, "Loaded runtime env");
            env
        }
        Err(e) => {
            warn!(error = %e, "Runtime env unavailable, using defaults");
            RuntimeEnv::default()
        }
    }
}

async fn fetch_runtime_env(origin: &str) -> Result<RuntimeEnv, reqwest::Error> {
    reqwest::get(format!("{origin}{}", RuntimeEnv::PATH))
        .await?
        .error_for_status()?
        .json()
        .await
}

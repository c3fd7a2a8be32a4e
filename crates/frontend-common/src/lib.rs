//! Shared front-end pieces: session handling, the route guard, API client
//! wiring and small components

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod storage;

pub use auth::{AuthGuard, RedirectQuery, SessionProvider, use_is_authenticated, use_session};
pub use client::{configure_client, create_api_client};
pub use components::Spinner;
pub use config::load_runtime_env;
pub use storage::LocalTokenStore;

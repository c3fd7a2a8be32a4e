//! LMM core: the route authentication gate and the session types it works on

pub mod auth;
pub mod config;
pub mod error;

#[cfg(all(feature = "tracing", not(target_arch = "wasm32")))]
pub mod tracing;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthGate, AuthRoutes, GateDecision, LoginRedirect, MemoryTokenStore, Navigation, RefreshError,
    RouteRequest, SessionContext, SessionToken, SharedSession, TokenRefresher, TokenStore,
};
pub use config::AuthConfig;
pub use error::{Error, Result};

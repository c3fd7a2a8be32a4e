//! Authentication module

pub mod gate;
pub mod refresh;
pub mod route;
pub mod session;
pub mod store;
pub mod token;

pub use gate::{AuthGate, GateDecision};
pub use refresh::{RefreshError, TokenRefresher};
pub use route::{AuthRoutes, LoginRedirect, Navigation, RouteRequest};
pub use session::{SessionContext, SharedSession};
pub use store::{MemoryTokenStore, TokenStore};
pub use token::SessionToken;

#[cfg(test)]
pub use store::MockTokenStore;

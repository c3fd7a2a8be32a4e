//! Authentication module

pub mod context;
pub mod guard;
pub mod refresher;
pub mod session;

use serde::{Deserialize, Serialize};

// Re-export commonly used items
pub use context::{SessionProvider, use_is_authenticated, use_session};
pub use guard::AuthGuard;
pub use refresher::BrowserRefresher;
pub use session::{end_session, establish_session};

/// Query string of the login route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectQuery {
    /// Path to return to after login
    pub redirect: String,
}

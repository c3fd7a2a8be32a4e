//! Route authentication gate
//!
//! Runs once per navigation attempt, before the target route renders. It
//! either lets the navigation through or names the login redirect to apply.
//! A stored token with an empty session cache triggers exactly one refresh
//! call; every failure along the way ends in the same redirect.

use super::{
    AuthRoutes, LoginRedirect, Navigation, SessionContext, TokenRefresher, TokenStore,
};
use tracing::{debug, warn};

/// Outcome of one gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(LoginRedirect),
}

impl GateDecision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Authentication gate over an injected store, session cache and refresher
pub struct AuthGate<S, C, R> {
    store: S,
    session: C,
    refresher: R,
    routes: AuthRoutes,
}

impl<S, C, R> AuthGate<S, C, R>
where
    S: TokenStore,
    C: SessionContext,
    R: TokenRefresher,
{
    pub fn new(store: S, session: C, refresher: R) -> Self {
        Self {
            store,
            session,
            refresher,
            routes: AuthRoutes::default(),
        }
    }

    #[must_use]
    pub fn with_routes(mut self, routes: AuthRoutes) -> Self {
        self.routes = routes;
        self
    }

    /// Decide whether `navigation` may proceed
    pub async fn check(&self, navigation: &Navigation) -> GateDecision {
        let path = navigation.route.path.as_str();

        if navigation.prerender_without_request {
            debug!(path, "Pre-render without request, deferring to client");
            return GateDecision::Allow;
        }

        if self.routes.is_login(path) {
            return GateDecision::Allow;
        }

        if self.session.is_authenticated() {
            return GateDecision::Allow;
        }

        let stored = self.store.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read stored token");
            None
        });

        let Some(stored) = stored else {
            debug!(path, "No token, redirecting to login");
            return self.redirect(path);
        };

        match self.refresher.refresh(&stored).await {
            Ok(fresh) => {
                if let Err(e) = self.store.save(&fresh) {
                    warn!(error = %e, "Failed to persist refreshed token");
                }
                self.session.cache_token(fresh);
                debug!(path, "Token refreshed");
                GateDecision::Allow
            }
            Err(e) => {
                warn!(path, reason = %e.reason, "Token refresh failed, redirecting to login");
                self.redirect(path)
            }
        }
    }

    fn redirect(&self, path: &str) -> GateDecision {
        GateDecision::Redirect(self.routes.redirect_to_login(path))
    }
}

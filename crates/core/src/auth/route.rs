//! Navigation targets and the login redirect rule

use crate::config::AuthConfig;
use std::fmt;

/// Target of one navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub path: String,
    pub query: Option<String>,
}

impl RouteRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.trim_start_matches('?');
        self.query = (!query.is_empty()).then(|| query.to_string());
        self
    }
}

/// Everything the gate knows about a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Server-side pre-render pass with no inbound request to inspect
    pub prerender_without_request: bool,
    pub route: RouteRequest,
}

impl Navigation {
    /// Client-side navigation
    pub fn client(route: RouteRequest) -> Self {
        Self {
            prerender_without_request: false,
            route,
        }
    }

    /// Pre-render pass without a request
    pub fn prerender(route: RouteRequest) -> Self {
        Self {
            prerender_without_request: true,
            route,
        }
    }
}

/// Where an unauthenticated navigation is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub login_path: String,
    /// Path to return to after login
    pub return_to: Option<String>,
}

impl LoginRedirect {
    pub fn to_url(&self) -> String {
        match &self.return_to {
            Some(path) => format!(
                "{}?{}={}",
                self.login_path,
                AuthConfig::REDIRECT_QUERY_KEY,
                path
            ),
            None => self.login_path.clone(),
        }
    }
}

impl fmt::Display for LoginRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Login and logout paths the gate treats specially
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRoutes {
    pub login_path: String,
    pub logout_path: String,
}

impl Default for AuthRoutes {
    fn default() -> Self {
        Self {
            login_path: AuthConfig::LOGIN_PATH.to_string(),
            logout_path: AuthConfig::LOGOUT_PATH.to_string(),
        }
    }
}

impl AuthRoutes {
    pub fn is_login(&self, path: &str) -> bool {
        path == self.login_path
    }

    /// Login redirect for a navigation to `path`; the logout path is never
    /// carried as a return target.
    pub fn redirect_to_login(&self, path: &str) -> LoginRedirect {
        let return_to = (path != self.logout_path).then(|| path.to_string());
        LoginRedirect {
            login_path: self.login_path.clone(),
            return_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_keeps_original_path() {
        let routes = AuthRoutes::default();
        assert_eq!(
            routes.redirect_to_login("/articles").to_url(),
            "/login?redirect=/articles"
        );
    }

    #[test]
    fn redirect_from_logout_has_no_query() {
        let routes = AuthRoutes::default();
        let redirect = routes.redirect_to_login("/logout");
        assert_eq!(redirect.return_to, None);
        assert_eq!(redirect.to_string(), "/login");
    }

    #[test]
    fn query_is_normalized() {
        let route = RouteRequest::new("/a").with_query("?page=2");
        assert_eq!(route.query.as_deref(), Some("page=2"));
        assert_eq!(RouteRequest::new("/a").with_query("").query, None);
    }
}

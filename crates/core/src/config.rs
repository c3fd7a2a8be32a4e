//! Authentication constants shared by the front-ends

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Persistent storage key holding the raw access token
    pub const ACCESS_TOKEN_KEY: &'static str = "accessToken";

    /// Route that never requires a token
    pub const LOGIN_PATH: &'static str = "/login";

    /// Route whose redirect to login drops the return path
    pub const LOGOUT_PATH: &'static str = "/logout";

    /// Query parameter carrying the return path on the login route
    pub const REDIRECT_QUERY_KEY: &'static str = "redirect";

    /// Token validation/refresh endpoint
    pub const TOKEN_REFRESH_PATH: &'static str = "/v1/auth/token";

    /// Name/password sign-in endpoint
    pub const SIGN_IN_PATH: &'static str = "/v1/auth/login";
}

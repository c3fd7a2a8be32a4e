use super::SessionToken;
use async_trait::async_trait;
use thiserror::Error;

/// Why a refresh attempt did not yield a token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Token refresh failed: {reason}")]
pub struct RefreshError {
    pub reason: String,
}

impl RefreshError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Exchanges a stored token for a fresh access token.
///
/// One call is one attempt; implementations must not retry.
#[async_trait(?Send)]
pub trait TokenRefresher {
    async fn refresh(&self, token: &SessionToken) -> Result<SessionToken, RefreshError>;
}

//! Authentication endpoints

use super::{ApiClient, ClientError};
use crate::types::{SignInRequest, TokenResponse};
use async_trait::async_trait;
use lmm_core::{AuthConfig, RefreshError, SessionToken, TokenRefresher};
use reqwest::Method;

impl ApiClient {
    /// Exchange `token` for a fresh access token.
    ///
    /// Sends an empty POST authenticated with `token`, whatever token the
    /// client itself holds.
    pub async fn refresh_access_token(
        &self,
        token: &SessionToken,
    ) -> Result<TokenResponse, ClientError> {
        let request = self.request_as(Method::POST, AuthConfig::TOKEN_REFRESH_PATH, Some(token));
        self.execute(request).await
    }

    /// Sign in with name and password
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<TokenResponse, ClientError> {
        let request = self
            .request(Method::POST, AuthConfig::SIGN_IN_PATH)
            .json(request);
        self.execute(request).await
    }
}

impl TokenResponse {
    /// Validated access token
    pub fn into_token(self) -> Result<SessionToken, ClientError> {
        Ok(SessionToken::new(self.access_token)?)
    }
}

#[async_trait(?Send)]
impl TokenRefresher for ApiClient {
    async fn refresh(&self, token: &SessionToken) -> Result<SessionToken, RefreshError> {
        self.refresh_access_token(token)
            .await
            .and_then(TokenResponse::into_token)
            .map_err(|e| RefreshError::new(e.to_string()))
    }
}

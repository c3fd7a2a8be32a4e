use crate::client::{create_api_client, set_auth_token};
use async_trait::async_trait;
use lmm_core::{RefreshError, SessionToken, TokenRefresher};

/// Refreshes through the shared API client
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRefresher;

#[async_trait(?Send)]
impl TokenRefresher for BrowserRefresher {
    async fn refresh(&self, token: &SessionToken) -> Result<SessionToken, RefreshError> {
        let client = create_api_client().map_err(|e| RefreshError::new(e.to_string()))?;
        let fresh = client.refresh(token).await?;
        set_auth_token(Some(&fresh));
        Ok(fresh)
    }
}

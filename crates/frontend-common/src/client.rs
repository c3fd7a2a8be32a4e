//! Client configuration and initialization

use crate::config::window_origin;
use lmm_core::SessionToken;
use lmm_http::types::RuntimeEnv;
use lmm_http::{ApiClient, ClientError};
use std::cell::RefCell;

thread_local! {
    static API_CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
    static AUTH_TOKEN: RefCell<Option<SessionToken>> = const { RefCell::new(None) };
}

/// Get the base URL for API calls
fn get_base_url(env: &RuntimeEnv) -> String {
    if env.api_url.is_empty() {
        window_origin().unwrap_or_default()
    } else {
        env.api_url.clone()
    }
}

/// Point the shared client at the API named by `env`
pub fn configure_client(env: &RuntimeEnv) -> Result<(), ClientError> {
    let client = ApiClient::new(get_base_url(env))?;
    API_CLIENT.with(|c| *c.borrow_mut() = Some(client));
    Ok(())
}

/// Set or clear the token sent with every request of the shared client
pub fn set_auth_token(token: Option<&SessionToken>) {
    AUTH_TOKEN.with(|t| *t.borrow_mut() = token.cloned());
}

/// Get the shared API client, building a same-origin one if none was configured
pub fn create_api_client() -> Result<ApiClient, ClientError> {
    let mut client = match API_CLIENT.with(|c| c.borrow().clone()) {
        Some(client) => client,
        None => {
            let client = ApiClient::new(get_base_url(&RuntimeEnv::default()))?;
            API_CLIENT.with(|c| *c.borrow_mut() = Some(client.clone()));
            client
        }
    };

    client.set_token(AUTH_TOKEN.with(|t| t.borrow().clone()));
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configure() {
        configure_client(&RuntimeEnv {
            api_url: "http://api.test".into(),
            asset_url: String::new(),
        })
        .unwrap();
    }

    #[test]
    fn shared_client_follows_auth_token() {
        configure();
        set_auth_token(None);
        assert!(create_api_client().unwrap().token().is_none());

        let token = SessionToken::new("T1").unwrap();
        set_auth_token(Some(&token));
        let client = create_api_client().unwrap();
        assert_eq!(client.base_url(), "http://api.test");
        assert_eq!(client.token(), Some(&token));

        set_auth_token(None);
        assert!(create_api_client().unwrap().token().is_none());
    }

    #[test]
    fn reconfiguring_keeps_the_token() {
        let token = SessionToken::new("T2").unwrap();
        set_auth_token(Some(&token));
        configure();
        assert_eq!(create_api_client().unwrap().token(), Some(&token));
        set_auth_token(None);
    }
}

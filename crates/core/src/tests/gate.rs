//! Gate behaviour against in-memory stores and a scripted refresher

use crate::auth::{
    AuthGate, AuthRoutes, GateDecision, LoginRedirect, MemoryTokenStore, MockTokenStore,
    Navigation, RefreshError, RouteRequest, SessionContext, SessionToken, SharedSession,
    TokenRefresher,
};
use crate::Error;
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

/// Refresher that answers from a script and records the tokens it saw
#[derive(Clone)]
struct ScriptedRefresher {
    reply: Result<&'static str, &'static str>,
    seen: Rc<RefCell<Vec<String>>>,
}

impl ScriptedRefresher {
    fn succeeding(token: &'static str) -> Self {
        Self {
            reply: Ok(token),
            seen: Rc::default(),
        }
    }

    fn failing(reason: &'static str) -> Self {
        Self {
            reply: Err(reason),
            seen: Rc::default(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TokenRefresher for ScriptedRefresher {
    async fn refresh(&self, token: &SessionToken) -> Result<SessionToken, RefreshError> {
        self.seen.borrow_mut().push(token.as_str().to_string());
        match self.reply {
            Ok(fresh) => SessionToken::new(fresh).map_err(|e| RefreshError::new(e.to_string())),
            Err(reason) => Err(RefreshError::new(reason)),
        }
    }
}

fn token(value: &str) -> SessionToken {
    SessionToken::new(value).unwrap()
}

fn client(path: &str) -> Navigation {
    Navigation::client(RouteRequest::new(path))
}

fn login_redirect(return_to: Option<&str>) -> GateDecision {
    GateDecision::Redirect(LoginRedirect {
        login_path: "/login".to_string(),
        return_to: return_to.map(str::to_string),
    })
}

#[tokio::test]
async fn login_path_is_always_allowed() {
    let refresher = ScriptedRefresher::succeeding("T2");
    let gate = AuthGate::new(
        MemoryTokenStore::with_raw("T1"),
        SharedSession::new(),
        refresher.clone(),
    );

    assert_eq!(gate.check(&client("/login")).await, GateDecision::Allow);
    assert!(refresher.calls().is_empty());
}

#[tokio::test]
async fn prerender_without_request_is_allowed() {
    let refresher = ScriptedRefresher::succeeding("T2");
    let gate = AuthGate::new(MemoryTokenStore::new(), SharedSession::new(), refresher.clone());

    let navigation = Navigation::prerender(RouteRequest::new("/articles"));
    assert_eq!(gate.check(&navigation).await, GateDecision::Allow);
    assert!(refresher.calls().is_empty());
}

#[tokio::test]
async fn missing_token_redirects_with_return_path() {
    let gate = AuthGate::new(
        MemoryTokenStore::new(),
        SharedSession::new(),
        ScriptedRefresher::succeeding("T2"),
    );

    let decision = gate.check(&client("/articles")).await;
    assert_eq!(decision, login_redirect(Some("/articles")));
    if let GateDecision::Redirect(redirect) = decision {
        assert_eq!(redirect.to_url(), "/login?redirect=/articles");
    }
}

#[tokio::test]
async fn missing_token_on_logout_redirects_without_query() {
    let gate = AuthGate::new(
        MemoryTokenStore::new(),
        SharedSession::new(),
        ScriptedRefresher::succeeding("T2"),
    );

    assert_eq!(gate.check(&client("/logout")).await, login_redirect(None));
}

#[tokio::test]
async fn empty_stored_token_counts_as_missing() {
    let refresher = ScriptedRefresher::succeeding("T2");
    let gate = AuthGate::new(
        MemoryTokenStore::with_raw(""),
        SharedSession::new(),
        refresher.clone(),
    );

    assert_eq!(gate.check(&client("/")).await, login_redirect(Some("/")));
    assert!(refresher.calls().is_empty());
}

#[tokio::test]
async fn successful_refresh_updates_store_and_session() {
    let store = MemoryTokenStore::with_raw("T1");
    let session = SharedSession::new();
    let refresher = ScriptedRefresher::succeeding("T2");
    let gate = AuthGate::new(store.clone(), session.clone(), refresher.clone());

    assert_eq!(gate.check(&client("/articles")).await, GateDecision::Allow);
    assert_eq!(refresher.calls(), vec!["T1".to_string()]);
    assert_eq!(store.raw().as_deref(), Some("T2"));
    assert_eq!(session.cached_token(), Some(token("T2")));
}

#[tokio::test]
async fn failed_refresh_redirects_and_leaves_session_empty() {
    let store = MemoryTokenStore::with_raw("T1");
    let session = SharedSession::new();
    let refresher = ScriptedRefresher::failing("401 Unauthorized");
    let gate = AuthGate::new(store.clone(), session.clone(), refresher.clone());

    assert_eq!(
        gate.check(&client("/articles")).await,
        login_redirect(Some("/articles"))
    );
    assert_eq!(refresher.calls().len(), 1);
    assert!(!session.is_authenticated());
    // The stored token is never deleted by the gate.
    assert_eq!(store.raw().as_deref(), Some("T1"));
}

#[tokio::test]
async fn failed_refresh_on_logout_drops_return_path() {
    let gate = AuthGate::new(
        MemoryTokenStore::with_raw("T1"),
        SharedSession::new(),
        ScriptedRefresher::failing("network down"),
    );

    assert_eq!(gate.check(&client("/logout")).await, login_redirect(None));
}

#[tokio::test]
async fn cached_session_skips_storage_and_network() {
    let session = SharedSession::new();
    session.cache_token(token("cached"));
    let refresher = ScriptedRefresher::succeeding("T2");

    // No expectations: any storage access fails the test.
    let store = MockTokenStore::new();
    let gate = AuthGate::new(store, session.clone(), refresher.clone());

    assert_eq!(gate.check(&client("/articles")).await, GateDecision::Allow);
    assert!(refresher.calls().is_empty());
    assert_eq!(session.cached_token(), Some(token("cached")));
}

#[tokio::test]
async fn refreshed_token_is_written_once() {
    let mut store = MockTokenStore::new();
    store.expect_load().times(1).returning(|| Ok(Some(token("T1"))));
    store
        .expect_save()
        .withf(|saved| saved.as_str() == "T2")
        .times(1)
        .returning(|_| Ok(()));

    let gate = AuthGate::new(store, SharedSession::new(), ScriptedRefresher::succeeding("T2"));
    assert!(gate.check(&client("/")).await.is_allowed());
}

#[tokio::test]
async fn storage_write_failure_still_allows() {
    let mut store = MockTokenStore::new();
    store.expect_load().returning(|| Ok(Some(token("T1"))));
    store
        .expect_save()
        .returning(|_| Err(Error::Storage("quota exceeded".into())));

    let session = SharedSession::new();
    let gate = AuthGate::new(store, session.clone(), ScriptedRefresher::succeeding("T2"));

    assert_eq!(gate.check(&client("/")).await, GateDecision::Allow);
    assert_eq!(session.cached_token(), Some(token("T2")));
}

#[tokio::test]
async fn storage_read_failure_redirects() {
    let mut store = MockTokenStore::new();
    store
        .expect_load()
        .returning(|| Err(Error::StorageUnavailable));
    let refresher = ScriptedRefresher::succeeding("T2");

    let gate = AuthGate::new(store, SharedSession::new(), refresher.clone());

    assert_eq!(gate.check(&client("/drafts")).await, login_redirect(Some("/drafts")));
    assert!(refresher.calls().is_empty());
}

#[tokio::test]
async fn custom_routes_are_honoured() {
    let routes = AuthRoutes {
        login_path: "/signin".to_string(),
        logout_path: "/signout".to_string(),
    };
    let gate = AuthGate::new(
        MemoryTokenStore::new(),
        SharedSession::new(),
        ScriptedRefresher::succeeding("T2"),
    )
    .with_routes(routes);

    assert_eq!(gate.check(&client("/signin")).await, GateDecision::Allow);
    match gate.check(&client("/signout")).await {
        GateDecision::Redirect(redirect) => assert_eq!(redirect.to_url(), "/signin"),
        GateDecision::Allow => panic!("expected redirect"),
    }
}

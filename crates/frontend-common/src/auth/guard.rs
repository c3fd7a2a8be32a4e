//! Route guard running the auth gate on every location change

use super::{BrowserRefresher, RedirectQuery, use_session};
use crate::components::Spinner;
use crate::storage::LocalTokenStore;
use lmm_core::{AuthConfig, AuthGate, AuthRoutes, GateDecision, Navigation, RouteRequest};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, error};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps<R: Routable + 'static> {
    /// Login route; navigations that fail the gate land here
    pub login: R,
    pub children: Children,
}

/// Route the gate last allowed; children render only while it is the current one
fn is_allowed_for(allowed: Option<&RouteRequest>, route: &RouteRequest) -> bool {
    allowed == Some(route)
}

/// Liveness of one gate run; cancelled once the location moves on
#[derive(Clone, Debug, Default)]
struct GateRun(Rc<Cell<bool>>);

impl GateRun {
    fn cancel(&self) {
        self.0.set(true);
    }

    fn is_current(&self) -> bool {
        !self.0.get()
    }
}

/// Build the gate input for the current location.
///
/// Without a browser window there is no real request to judge, which is the
/// pre-render case.
fn navigation_for(route: RouteRequest, in_browser: bool) -> Navigation {
    if in_browser {
        Navigation::client(route)
    } else {
        Navigation::prerender(route)
    }
}

fn routes_for<R: Routable>(login: &R) -> AuthRoutes {
    AuthRoutes {
        login_path: login.to_path(),
        logout_path: AuthConfig::LOGOUT_PATH.to_string(),
    }
}

/// Renders its children only once the gate allows the current route
#[function_component(AuthGuard)]
pub fn auth_guard<R>(props: &AuthGuardProps<R>) -> Html
where
    R: Routable + 'static,
{
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();
    let allowed = use_state_eq(|| Option::<RouteRequest>::None);

    let route = location.as_ref().map_or_else(
        || RouteRequest::new("/"),
        |l| RouteRequest::new(l.path()).with_query(l.query_str()),
    );

    {
        let allowed = allowed.clone();
        let login = props.login.clone();
        use_effect_with(route.clone(), move |route| {
            let navigation = navigation_for(route.clone(), web_sys::window().is_some());
            let gate = AuthGate::new(LocalTokenStore, session, BrowserRefresher)
                .with_routes(routes_for(&login));
            let run = GateRun::default();

            {
                let run = run.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let decision = gate.check(&navigation).await;
                    if !run.is_current() {
                        debug!(path = %navigation.route.path, "Location changed, dropping gate result");
                        return;
                    }
                    match decision {
                        GateDecision::Allow => allowed.set(Some(navigation.route)),
                        GateDecision::Redirect(redirect) => {
                            debug!(to = %redirect, "Redirecting to login");
                            let Some(navigator) = navigator else {
                                error!("AuthGuard must be rendered inside a router");
                                return;
                            };
                            match redirect.return_to {
                                Some(redirect) => {
                                    if let Err(e) = navigator
                                        .replace_with_query(&login, &RedirectQuery { redirect })
                                    {
                                        error!(error = %e, "Failed to redirect to login");
                                    }
                                }
                                None => navigator.replace(&login),
                            }
                        }
                    }
                });
            }
            move || run.cancel()
        });
    }

    if is_allowed_for((*allowed).as_ref(), &route) {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Spinner text={"Checking authentication..."} /> }
    }
}

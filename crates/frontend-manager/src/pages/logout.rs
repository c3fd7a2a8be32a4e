use crate::app::Route;
use lmm_frontend_common::auth::end_session;
use lmm_frontend_common::{Spinner, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

/// Clears the session, then hands over to the login page
#[function_component(Logout)]
pub fn logout() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        end_session(&session);
        tracing::info!("Signed out");
        if let Some(navigator) = navigator {
            navigator.replace(&Route::Login);
        }
        || ()
    });

    html! { <Spinner text={"Signing out..."} /> }
}

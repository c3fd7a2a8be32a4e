use crate::app::Route;
use lmm_frontend_common::auth::establish_session;
use lmm_frontend_common::{RedirectQuery, create_api_client, use_session};
use lmm_http::ClientError;
use lmm_http::types::{SignInRequest, TokenResponse};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Message shown for a failed sign-in
fn sign_in_error_message(error: &ClientError) -> String {
    match error {
        ClientError::BadRequest(_) => "Name and password are required".to_string(),
        ClientError::NotFound(_) | ClientError::AuthenticationFailed(_) => {
            "Invalid user name or password".to_string()
        }
        other => other.to_string(),
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();

    let name = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let redirect = location
        .and_then(|l| l.query::<RedirectQuery>().ok())
        .map(|q| q.redirect);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let request = SignInRequest {
                name: (*name).clone(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let target = Route::after_login(redirect.as_deref());
            let error = error.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match create_api_client() {
                    Ok(client) => client
                        .sign_in(&request)
                        .await
                        .and_then(TokenResponse::into_token),
                    Err(e) => Err(e),
                };

                match result {
                    Ok(token) => {
                        establish_session(&session, token);
                        tracing::info!(user = %request.name, "Signed in");
                        if let Some(navigator) = navigator {
                            navigator.replace(&target);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Sign-in failed");
                        error.set(Some(sign_in_error_message(&e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="login-card" onsubmit={on_submit}>
            <h2>{"Sign in"}</h2>
            <input
                type="text"
                placeholder="Name"
                autocomplete="username"
                value={(*name).clone()}
                oninput={on_name_input}
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                value={(*password).clone()}
                oninput={on_password_input}
            />
            if let Some(message) = &*error {
                <p class="error">{message.clone()}</p>
            }
            <button type="submit" disabled={*submitting}>
                {if *submitting { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

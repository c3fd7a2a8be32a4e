//! Session context and provider

use lmm_core::{SessionContext, SharedSession};
use yew::prelude::*;

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provides one [`SharedSession`] to every component below it
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_memo((), |_| SharedSession::new());

    html! {
        <ContextProvider<SharedSession> context={(*session).clone()}>
            {props.children.clone()}
        </ContextProvider<SharedSession>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SharedSession {
    use_context::<SharedSession>()
        .expect("SharedSession not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if the session holds a token
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().is_authenticated()
}

use crate::app::Route;
use lmm_frontend_common::create_api_client;
use lmm_http::ClientError;
use lmm_http::types::ArticleList;
use yew::prelude::*;
use yew_router::prelude::*;

const PAGE_SIZE: u32 = 20;

#[derive(Clone, PartialEq)]
enum Articles {
    Loading,
    Loaded(ArticleList),
    Failed(String),
}

/// Where to go when loading fails; a rejected credential means signing out
const fn redirect_on_error(error: &ClientError) -> Option<Route> {
    if error.is_auth_expired() {
        Some(Route::Logout)
    } else {
        None
    }
}

/// Dashboard: the latest articles
#[function_component(Home)]
pub fn home() -> Html {
    let articles = use_state(|| Articles::Loading);
    let navigator = use_navigator();

    {
        let articles = articles.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match create_api_client() {
                    Ok(client) => client.list_articles(1, PAGE_SIZE).await,
                    Err(e) => Err(e),
                };
                articles.set(match result {
                    Ok(list) => Articles::Loaded(list),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to load articles");
                        if let (Some(route), Some(navigator)) = (redirect_on_error(&e), &navigator) {
                            navigator.replace(&route);
                        }
                        Articles::Failed(e.to_string())
                    }
                });
            });
            || ()
        });
    }

    html! {
        <section>
            <h1>{"Articles"}</h1>
            {match &*articles {
                Articles::Loading => html! { <p>{"Loading..."}</p> },
                Articles::Failed(message) => html! { <p class="error">{message.clone()}</p> },
                Articles::Loaded(list) if list.articles.is_empty() => html! { <p>{"No articles yet."}</p> },
                Articles::Loaded(list) => html! {
                    <ul>
                        {for list.articles.iter().map(|article| html! {
                            <li key={article.id.clone()}>
                                <strong>{article.title.clone()}</strong>
                                {" "}
                                <small>{article.post_at.clone()}</small>
                            </li>
                        })}
                    </ul>
                },
            }}
        </section>
    }
}

//! Article index, one page at a time

use lmm_frontend_common::{Spinner, create_api_client};
use lmm_http::types::ArticleList;
use yew::prelude::*;

const PAGE_SIZE: u32 = 10;

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Loaded(ArticleList),
    Failed(String),
}

/// Pages are numbered from 1
const fn previous_page(page: u32) -> Option<u32> {
    if page > 1 { Some(page - 1) } else { None }
}

fn next_page(page: u32, list: &ArticleList) -> Option<u32> {
    list.has_next_page.then_some(page + 1)
}

#[function_component(Home)]
pub fn home() -> Html {
    let page = use_state(|| 1_u32);
    let state = use_state(|| PageState::Loading);

    {
        let state = state.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            state.set(PageState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match create_api_client() {
                    Ok(client) => client.list_articles(page, PAGE_SIZE).await,
                    Err(e) => Err(e),
                };
                state.set(match result {
                    Ok(list) => PageState::Loaded(list),
                    Err(e) => {
                        tracing::warn!(page, error = %e, "Failed to load articles");
                        PageState::Failed(e.to_string())
                    }
                });
            });
            || ()
        });
    }

    let go_to = |target: Option<u32>| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(target) = target {
                page.set(target);
            }
        })
    };

    match &*state {
        PageState::Loading => html! { <Spinner /> },
        PageState::Failed(message) => html! { <p class="error">{message.clone()}</p> },
        PageState::Loaded(list) => {
            let previous = previous_page(*page);
            let next = next_page(*page, list);
            html! {
                <>
                    <ul class="article-list">
                        {for list.articles.iter().map(|article| html! {
                            <li key={article.id.clone()}>
                                <span>{article.title.clone()}</span>
                                <time>{article.post_at.clone()}</time>
                            </li>
                        })}
                    </ul>
                    <nav class="pager">
                        <button disabled={previous.is_none()} onclick={go_to(previous)}>
                            <i class="fas fa-chevron-left"></i>{" 上一页"}
                        </button>
                        <button disabled={next.is_none()} onclick={go_to(next)}>
                            {"下一页 "}<i class="fas fa-chevron-right"></i>
                        </button>
                    </nav>
                </>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_previous() {
        assert_eq!(previous_page(1), None);
        assert_eq!(previous_page(3), Some(2));
    }

    #[test]
    fn next_page_follows_server_flag() {
        let mut list = ArticleList::default();
        assert_eq!(next_page(1, &list), None);
        list.has_next_page = true;
        assert_eq!(next_page(1, &list), Some(2));
    }
}

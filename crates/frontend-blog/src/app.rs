use crate::home::Home;
use yew::prelude::*;
use yew_router::prelude::*;

pub const SITE_TITLE: &str = "卢明鸣的树洞";

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! {
            <section>
                <p>{"404"}</p>
                <Link<Route> to={Route::Home}>{"首页"}</Link<Route>>
            </section>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <header class="site-header">
                <Link<Route> to={Route::Home}>{SITE_TITLE}</Link<Route>>
            </header>
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

use crate::pages::{Home, Login, Logout, NotFound};
use lmm_frontend_common::{AuthGuard, SessionProvider, use_is_authenticated};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/logout")]
    Logout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where a successful login lands, given the `redirect` query value
    pub fn after_login(redirect: Option<&str>) -> Self {
        match redirect.and_then(Self::recognize) {
            Some(Self::Login | Self::Logout | Self::NotFound) | None => Self::Home,
            Some(route) => route,
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Logout => html! { <Logout /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <AuthGuard<Route> login={Route::Login}>
                    <AppBar />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                </AuthGuard<Route>>
            </BrowserRouter>
        </SessionProvider>
    }
}

#[function_component(AppBar)]
fn app_bar() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <header class="app-bar">
            <Link<Route> to={Route::Home}>{"LMM Manager"}</Link<Route>>
            if is_authenticated {
                <Link<Route> to={Route::Logout}>{"Logout"}</Link<Route>>
            }
        </header>
    }
}

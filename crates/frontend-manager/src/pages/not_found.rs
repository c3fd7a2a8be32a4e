use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to dashboard"}</Link<Route>>
        </section>
    }
}

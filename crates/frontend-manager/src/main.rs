mod app;
mod pages;

use app::App;
use lmm_frontend_common::{configure_client, load_runtime_env, logging};

fn main() {
    logging::init();
    wasm_bindgen_futures::spawn_local(async {
        let env = load_runtime_env().await;
        if let Err(e) = configure_client(&env) {
            tracing::error!(error = %e, "Failed to configure API client");
        }
        yew::Renderer::<App>::new().render();
    });
}

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::api::ApiClient;
    use crate::config;
    use crate::pages::{HomePage, ShiftsPage};
    use leptos::*;
    use leptos_router::*;

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Starting Workshift frontend (wasm)");

        // Kick off runtime config load from ./config.json (non-blocking).
        // If window.__WORKSHIFT_ENV is present, it takes precedence.
        leptos::spawn_local(async move {
            config::init().await;
            log::info!("Runtime config initialized");
        });

        mount_to_body(|| {
            provide_context(ApiClient::new());
            view! {
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/shifts" view=ShiftsPage/>
                    </Routes>
                </Router>
            }
        });
    }
}

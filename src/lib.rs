// Quillpad UI - Administrative interface for the Quillpad notebook server
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod browser;
pub mod components;
pub mod pages;
pub mod types;
pub mod utils;

use api::ApiClient;
use components::layout::Layout;
use pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(browser::origin()));

    view! {
        <Stylesheet id="leptos" href="/pkg/quillpad-ui.css"/>
        <Title text="Quillpad - Notebook Administration"/>
        <Meta name="description" content="Administrative interface for the Quillpad notebook server"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=HomePage/>

                    // User Management
                    <Route path="/users" view=UsersPage/>

                    // 404 fallback
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

// Hydrate the app for client-side rendering
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use wasm_bindgen::prelude::wasm_bindgen;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}

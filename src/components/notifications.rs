// Notification components
use crate::types::{Banner, BannerStack};
use leptos::*;

/// The page's alert container. Every completed admin action appends one
/// banner here; banners stack up until dismissed individually.
#[component]
pub fn AlertContainer(#[prop(into)] banners: RwSignal<BannerStack>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <For
                each=move || banners.get().banners().to_vec()
                key=|banner| banner.id
                children=move |banner: Banner| {
                    let id = banner.id;
                    view! {
                        <div class=format!("{} flex items-center justify-between rounded-md px-4 py-3", banner.kind.class())>
                            // Server messages are rendered as text, never as markup
                            <span class="text-sm">{banner.text.clone()}</span>
                            <button
                                type="button"
                                class="btn-close ml-4"
                                on:click=move |_| banners.update(|stack| stack.dismiss(id))
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Standalone inline alert for page-level conditions (load failures and the
/// like), outside the dismissible banner stack.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(into, optional)] alert_type: String,
) -> impl IntoView {
    let alert_class = format!(
        "alert alert-{} rounded-md px-4 py-3",
        if alert_type.is_empty() {
            "info".to_string()
        } else {
            alert_type
        }
    );

    view! {
        <div class=alert_class>
            <span class="text-sm">{message}</span>
        </div>
    }
}

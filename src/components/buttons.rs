// Button components
use leptos::*;

#[component]
pub fn PrimaryButton(
    #[prop(into)] text: String,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md text-sm font-medium disabled:opacity-50"
            disabled={disabled}
            on:click=move |_| on_click.call(())
        >
            {text}
        </button>
    }
}

#[component]
pub fn DangerButton(
    #[prop(into)] text: String,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="bg-red-600 hover:bg-red-700 text-white px-3 py-1.5 rounded-md text-sm font-medium disabled:opacity-50"
            disabled={disabled}
            on:click=move |_| on_click.call(())
        >
            {text}
        </button>
    }
}

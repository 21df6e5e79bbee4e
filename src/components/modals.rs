// Modal components
use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] show: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 items-center justify-center"
            style:display={move || if show.get() { "flex" } else { "none" }}
        >
            // Backdrop; clicking it closes the dialog
            <div
                class="absolute inset-0 bg-black/50"
                on:click=move |_| show.set(false)
            ></div>

            <div class="relative bg-white rounded-lg shadow-xl w-full max-w-md mx-4">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                    <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                    <button
                        type="button"
                        class="p-1 text-gray-400 hover:text-gray-600 rounded"
                        on:click=move |_| show.set(false)
                    >
                        "\u{00d7}"
                    </button>
                </div>
                <div class="px-6 py-4 space-y-4">
                    {children()}
                </div>
            </div>
        </div>
    }
}

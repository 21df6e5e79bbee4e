// Form components
use leptos::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional)] placeholder: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label for={name.clone()} class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type="text"
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                id={name.clone()}
                name={name}
                placeholder={placeholder.unwrap_or_default()}
                node_ref=node_ref
                prop:value={move || value.get()}
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
        </div>
    }
}

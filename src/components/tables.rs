// Table components
use leptos::*;

#[component]
pub fn DataTable(children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                {children()}
            </table>
        </div>
    }
}

#[component]
pub fn TableHeader(children: Children) -> impl IntoView {
    view! {
        <thead class="bg-gray-50">
            <tr>
                {children()}
            </tr>
        </thead>
    }
}

#[component]
pub fn TableBody(children: Children) -> impl IntoView {
    view! {
        <tbody class="divide-y divide-gray-200 bg-white">
            {children()}
        </tbody>
    }
}

use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <nav class="bg-white border-b border-gray-200">
                <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                    <div class="flex h-16 items-center justify-between">
                        <a href="/" class="text-xl font-semibold text-gray-900">
                            "Quillpad"
                        </a>
                        <div class="flex items-center space-x-6">
                            <a href="/users" class="text-sm font-medium text-gray-700 hover:text-gray-900">
                                "Users"
                            </a>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="py-10">
                <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(title: String, description: Option<String>) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200 pb-5">
            <h1 class="text-3xl font-bold leading-tight tracking-tight text-gray-900">
                {title}
            </h1>
            {description.map(|desc| view! {
                <p class="mt-2 text-sm text-gray-700">{desc}</p>
            })}
        </div>
    }
}

#[component]
pub fn Card(
    #[prop(optional)] title: Option<String>,
    #[prop(optional)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_default();

    view! {
        <div class=format!("bg-white overflow-hidden shadow rounded-lg {}", class)>
            {title.map(|t| view! {
                <div class="px-4 py-5 sm:p-6">
                    <h3 class="text-base font-semibold leading-6 text-gray-900">{t}</h3>
                </div>
            })}
            <div class="px-4 py-5 sm:p-6">
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-8">
            <svg class="animate-spin -ml-1 mr-3 h-8 w-8 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
            </svg>
            <span class="text-gray-600">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn EmptyState(title: String, description: String) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h3 class="mt-2 text-sm font-semibold text-gray-900">{title}</h3>
            <p class="mt-1 text-sm text-gray-500">{description}</p>
        </div>
    }
}

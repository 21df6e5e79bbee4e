// Page components
use leptos::*;
use leptos_router::*;

pub mod users;

pub use users::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    // The admin interface only has the user management page today
    create_effect(move |_| {
        navigate("/users", Default::default());
    });

    view! {
        <div class="flex items-center justify-center py-12">
            <p class="text-gray-600">"Redirecting..."</p>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>
            <h2 class="text-2xl font-semibold text-gray-700 mb-4">
                "Page not found"
            </h2>
            <p class="text-gray-500 mb-8">
                "The page you're looking for doesn't exist."
            </p>
            <a href="/users" class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-md font-medium">
                "Go to user management"
            </a>
        </div>
    }
}

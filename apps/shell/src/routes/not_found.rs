use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50 px-4 text-center">
            <h1 class="text-6xl font-black text-gray-200 select-none">"404"</h1>
            <p class="mt-2 text-xl font-semibold text-gray-900">"Page not found"</p>
            <a
                href="/"
                class="mt-6 rounded-lg bg-emerald-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-emerald-800"
            >
                "Go Home"
            </a>
        </div>
    }
}

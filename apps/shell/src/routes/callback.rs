//! Post-login landing. The provider redirects here after a sign-in; the auth
//! provider hydrates the session in the background, and once the check
//! resolves the visitor continues to the home page either way.

use albergue_auth::use_auth;
use albergue_ui::Spinner;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_loading() {
            navigate("/", Default::default());
        }
    });

    view! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-4 bg-gray-50">
            <Spinner />
            <p class="text-sm text-gray-500">"Completing sign-in..."</p>
        </div>
    }
}

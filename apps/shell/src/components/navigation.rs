//! Header bar with the brand and the sign-in/sign-out control. Navigation is
//! client-side only; access control stays with the gate and the backend.

use albergue_auth::use_auth;
use albergue_ui::Button;
use leptos::prelude::*;

#[component]
pub fn Navigation() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <header class="border-b border-gray-200 bg-white">
            <div class="mx-auto flex max-w-screen-xl flex-wrap items-center justify-between p-4">
                <a href="/" class="flex items-center space-x-3">
                    <span class="text-xl font-semibold text-gray-900">
                        "Albergue Carrascalejo"
                    </span>
                </a>
                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        view! {
                            <Button on_click=Callback::new(move |()| auth.sign_in())>
                                "Sign In"
                            </Button>
                        }
                    }
                >
                    <Button on_click=Callback::new(move |()| auth.sign_out())>
                        "Sign Out"
                    </Button>
                </Show>
            </div>
        </header>
    }
}

//! Landing page: greets the visitor, offers the sign-in hand-off and links to
//! the other front-ends in the monorepo.

use crate::components::Navigation;
use albergue_auth::use_auth;
use albergue_ui::{Footer, Spinner};
use leptos::prelude::*;

struct AppLink {
    href: &'static str,
    title: &'static str,
    description: &'static str,
}

static APP_LINKS: [AppLink; 3] = [
    AppLink {
        href: "/booking",
        title: "Booking",
        description: "Reserve a bed for your stay on the Camino.",
    },
    AppLink {
        href: "/dashboard",
        title: "Dashboard",
        description: "Occupancy and booking statistics.",
    },
    AppLink {
        href: "/registration",
        title: "Registration",
        description: "Guest registration on arrival.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="flex min-h-screen flex-col bg-gray-50">
            <Navigation />
            <main class="mx-auto w-full max-w-screen-xl flex-1 px-4 py-10">
                <div class="text-center">
                    <h1 class="mb-4 text-4xl font-bold text-gray-900">
                        "Albergue Municipal Carrascalejo"
                    </h1>
                    {move || {
                        let snapshot = auth.snapshot();
                        if snapshot.is_loading {
                            view! {
                                <div class="flex justify-center py-6">
                                    <Spinner />
                                </div>
                            }
                            .into_any()
                        } else if let Some(user) = snapshot.user {
                            let who = user
                                .name
                                .or(user.email)
                                .unwrap_or_else(|| "peregrino".to_string());
                            view! {
                                <p class="mb-8 text-lg text-gray-600">
                                    {format!("Buen Camino, {who}.")}
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <p class="mb-8 text-lg text-gray-600">
                                    "Sign in to manage your stay."
                                </p>
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                    {APP_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="rounded-lg bg-white p-6 shadow transition-shadow hover:shadow-lg"
                                >
                                    <h3 class="mb-2 text-xl font-semibold text-gray-900">
                                        {link.title}
                                    </h3>
                                    <p class="text-gray-600">{link.description}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
            <Footer />
        </div>
    }
}

use crate::features::booking::provide_booking_store;
use crate::routes::AppRoutes;
use albergue_auth::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <BookingShell />
        </AuthProvider>
    }
}

/// Separate component so the booking store lives inside the auth provider's
/// context scope.
#[component]
fn BookingShell() -> impl IntoView {
    provide_booking_store();

    view! {
        <div class="min-h-screen bg-gray-50">
            <Router>
                <AppRoutes />
            </Router>
        </div>
    }
}

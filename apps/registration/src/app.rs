use crate::routes::AppRoutes;
use albergue_auth::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <div class="min-h-screen bg-gray-50">
                <Router>
                    <AppRoutes />
                </Router>
            </div>
        </AuthProvider>
    }
}

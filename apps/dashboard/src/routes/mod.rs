mod admin;
mod dashboard;

pub(crate) use admin::AdminPage;
pub(crate) use dashboard::DashboardPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <DashboardPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/admin") view=AdminPage />
        </Routes>
    }
}

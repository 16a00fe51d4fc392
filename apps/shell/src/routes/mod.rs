mod callback;
mod home;
mod not_found;

pub(crate) use callback::CallbackPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/callback") view=CallbackPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

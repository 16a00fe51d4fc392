mod form;

pub(crate) use form::RegistrationPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <RegistrationPage /> }>
            <Route path=path!("/") view=RegistrationPage />
        </Routes>
    }
}

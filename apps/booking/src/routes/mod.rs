mod confirmation;
mod flow;
mod success;

pub(crate) use confirmation::ConfirmationPage;
pub(crate) use flow::BookingFlowPage;
pub(crate) use success::SuccessPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <BookingFlowPage /> }>
            <Route path=path!("/") view=BookingFlowPage />
            <Route path=path!("/confirmation") view=ConfirmationPage />
            <Route path=path!("/success") view=SuccessPage />
        </Routes>
    }
}

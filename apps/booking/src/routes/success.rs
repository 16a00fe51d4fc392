use crate::features::booking::use_booking_store;
use albergue_ui::{Card, CardContent, CardHeader, CardTitle};
use leptos::prelude::*;

#[component]
pub fn SuccessPage() -> impl IntoView {
    // The flow is done; clear the draft so a revisit starts clean.
    let store = use_booking_store();
    Effect::new(move |_| {
        store.set(Default::default());
    });

    view! {
        <div class="container mx-auto max-w-2xl px-4 py-8">
            <Card>
                <CardHeader>
                    <CardTitle>"¡Reserva confirmada!"</CardTitle>
                </CardHeader>
                <CardContent>
                    <p class="mb-6 text-sm text-gray-700">
                        "We have received your booking. You will get a confirmation email shortly."
                    </p>
                    <a class="text-sm text-emerald-700 hover:underline" href="/">
                        "Make another booking"
                    </a>
                </CardContent>
            </Card>
        </div>
    }
}

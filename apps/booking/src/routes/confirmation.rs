//! Confirmation step: derives nights and price from the shared draft and
//! ships the booking to the backend API on confirm.

use crate::features::booking::{format_eur, use_booking_store, BookingRequest};
use albergue_auth::ProtectedRoute;
use albergue_client::{post_json, AppError};
use albergue_ui::{Alert, AlertKind, Button, Card, CardContent, CardHeader, CardTitle, Spinner};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    view! {
        <div class="container mx-auto max-w-2xl px-4 py-8">
            <ProtectedRoute>
                <ConfirmationCard />
            </ProtectedRoute>
        </div>
    }
}

#[component]
fn ConfirmationCard() -> impl IntoView {
    let store = use_booking_store();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let submit_action = Action::new_local(move |request: &BookingRequest| {
        let request = request.clone();
        async move { post_json("/api/bookings", &request).await }
    });

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(()) => navigate("/success", Default::default()),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let on_confirm = Callback::new(move |()| {
        set_error.set(None);
        submit_action.dispatch(store.get_untracked().to_request());
    });

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Confirma tu reserva"</CardTitle>
            </CardHeader>
            <CardContent>
                {move || {
                    let draft = store.get();
                    match (draft.nights(), draft.total_cents()) {
                        (Some(nights), Some(total)) => {
                            view! {
                                <dl class="mb-6 space-y-2 text-sm text-gray-700">
                                    <div class="flex justify-between">
                                        <dt>"Check-in"</dt>
                                        <dd>{draft.check_in.clone()}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt>"Check-out"</dt>
                                        <dd>{draft.check_out.clone()}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt>"Room"</dt>
                                        <dd>{draft.room_type.label()}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt>"Guests"</dt>
                                        <dd>{draft.guests}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt>"Nights"</dt>
                                        <dd>{nights}</dd>
                                    </div>
                                    <div class="flex justify-between font-semibold text-gray-900">
                                        <dt>"Total"</dt>
                                        <dd>{format_eur(total)}</dd>
                                    </div>
                                </dl>
                                <div class="flex items-center gap-4">
                                    <Button
                                        on_click=on_confirm
                                        disabled=submit_action.pending()
                                    >
                                        "Confirmar"
                                    </Button>
                                    <a class="text-sm text-emerald-700 hover:underline" href="/">
                                        "Volver"
                                    </a>
                                    {move || {
                                        submit_action
                                            .pending()
                                            .get()
                                            .then_some(view! { <Spinner /> })
                                    }}
                                </div>
                            }
                            .into_any()
                        }
                        _ => view! {
                            <div class="space-y-4">
                                <Alert
                                    kind=AlertKind::Info
                                    message="There is no booking in progress."
                                />
                                <a class="text-sm text-emerald-700 hover:underline" href="/">
                                    "Start a booking"
                                </a>
                            </div>
                        }
                        .into_any(),
                    }
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </CardContent>
        </Card>
    }
}

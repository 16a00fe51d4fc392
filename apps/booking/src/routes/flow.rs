//! First step of the booking flow: stay dates, room type and party size.
//! Validation is local; nothing leaves the browser until confirmation.

use crate::features::booking::{use_booking_store, BookingDraft, BookingErrors, RoomType};
use albergue_auth::ProtectedRoute;
use albergue_ui::{Button, Card, CardContent, CardHeader, CardTitle, SelectInput, TextInput};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn BookingFlowPage() -> impl IntoView {
    view! {
        <div class="container mx-auto max-w-2xl px-4 py-8">
            <ProtectedRoute>
                <BookingForm />
            </ProtectedRoute>
        </div>
    }
}

#[component]
fn BookingForm() -> impl IntoView {
    let store = use_booking_store();
    let navigate = use_navigate();

    let initial = store.get_untracked();
    let (check_in, set_check_in) = signal(initial.check_in);
    let (check_out, set_check_out) = signal(initial.check_out);
    let (guests, set_guests) = signal(initial.guests.to_string());
    let (room_type, set_room_type) = signal(initial.room_type.value().to_string());
    let errors = RwSignal::new(BookingErrors::default());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let draft = BookingDraft {
            check_in: check_in.get_untracked(),
            check_out: check_out.get_untracked(),
            guests: guests.get_untracked().trim().parse().unwrap_or(0),
            room_type: RoomType::from_value(&room_type.get_untracked())
                .unwrap_or(RoomType::Shared),
        };

        let validation = draft.validate();
        if validation.is_empty() {
            store.set(draft);
            navigate("/confirmation", Default::default());
        } else {
            errors.set(validation);
        }
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Nueva Reserva"</CardTitle>
            </CardHeader>
            <CardContent>
                <form on:submit=on_submit>
                    <TextInput
                        id="check-in"
                        label="Check-in"
                        input_type="date"
                        value=check_in
                        on_input=Callback::new(move |value| set_check_in.set(value))
                        error=Signal::derive(move || errors.get().check_in)
                    />
                    <TextInput
                        id="check-out"
                        label="Check-out"
                        input_type="date"
                        value=check_out
                        on_input=Callback::new(move |value| set_check_out.set(value))
                        error=Signal::derive(move || errors.get().check_out)
                    />
                    <SelectInput
                        id="room-type"
                        label="Room"
                        options=vec![
                            (
                                RoomType::Shared.value().to_string(),
                                RoomType::Shared.label().to_string(),
                            ),
                            (
                                RoomType::Private.value().to_string(),
                                RoomType::Private.label().to_string(),
                            ),
                        ]
                        value=room_type
                        on_change=Callback::new(move |value| set_room_type.set(value))
                    />
                    <TextInput
                        id="guests"
                        label="Guests"
                        input_type="number"
                        value=guests
                        on_input=Callback::new(move |value| set_guests.set(value))
                        error=Signal::derive(move || errors.get().guests)
                    />
                    <Button button_type="submit">"Continuar con la reserva"</Button>
                </form>
            </CardContent>
        </Card>
    }
}

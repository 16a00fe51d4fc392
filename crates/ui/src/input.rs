//! Form controls with a deliberately narrow interface: a value signal, change
//! callbacks and an optional error signal. The controls know nothing about any
//! form-state library, so any page can bind them however it manages state.

use crate::{Alert, AlertKind};
use leptos::prelude::*;

const FIELD_CLASS: &str = "block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-emerald-600 focus:ring-emerald-600";
const LABEL_CLASS: &str = "mb-2 block text-sm font-medium text-gray-900";

/// Single-line text input.
#[component]
pub fn TextInput(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<String>>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS for=id>{label}</label>
            <input
                id=id
                type=input_type
                class=FIELD_CLASS
                placeholder=placeholder.unwrap_or("")
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
                on:blur=move |event| {
                    if let Some(on_blur) = on_blur {
                        on_blur.run(event_target_value(&event));
                    }
                }
            />
            {move || {
                error
                    .and_then(|error| error.get())
                    .map(|message| {
                        view! {
                            <div class="mt-2">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Drop-down for enumerated fields. Options are `(value, label)` pairs.
#[component]
pub fn SelectInput(
    id: &'static str,
    label: &'static str,
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS for=id>{label}</label>
            <select
                id=id
                class=FIELD_CLASS
                on:change=move |event| on_change.run(event_target_value(&event))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || {
                error
                    .and_then(|error| error.get())
                    .map(|message| {
                        view! {
                            <div class="mt-2">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

//! Guest registration form. Validation runs on submit; the submission result
//! is surfaced with an alert either way.

use crate::features::registration::{
    client, DocumentType, RegistrationDraft, RegistrationErrors, RegistrationRequest,
};
use albergue_client::AppError;
use albergue_ui::{
    Alert, AlertKind, Button, Card, CardContent, CardHeader, CardTitle, Footer, SelectInput,
    Spinner, TextInput,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

static COUNTRY_PREFIXES: [(&str, &str); 4] = [
    ("+34", "España (+34)"),
    ("+33", "Francia (+33)"),
    ("+39", "Italia (+39)"),
    ("+44", "Reino Unido (+44)"),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitOutcome {
    Idle,
    Success,
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col">
            <div class="container mx-auto max-w-2xl flex-1 px-4 py-8">
                <Card>
                    <CardHeader>
                        <CardTitle>"Registro de peregrinos"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <RegistrationForm />
                    </CardContent>
                </Card>
            </div>
            <Footer />
        </div>
    }
}

#[component]
fn RegistrationForm() -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (document_type, set_document_type) = signal(DocumentType::Dni.value().to_string());
    let (document_number, set_document_number) = signal(String::new());
    let (prefix, set_prefix) = signal("+34".to_string());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (check_in, set_check_in) = signal(String::new());
    let (check_out, set_check_out) = signal(String::new());

    let errors = RwSignal::new(RegistrationErrors::default());
    let (outcome, set_outcome) = signal(SubmitOutcome::Idle);
    let (submit_error, set_submit_error) = signal::<Option<AppError>>(None);

    let submit_action = Action::new_local(move |request: &RegistrationRequest| {
        let request = request.clone();
        async move { client::submit_registration(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => set_outcome.set(SubmitOutcome::Success),
                Err(err) => set_submit_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_outcome.set(SubmitOutcome::Idle);
        set_submit_error.set(None);

        let draft = RegistrationDraft {
            full_name: full_name.get_untracked(),
            document_type: DocumentType::from_value(&document_type.get_untracked())
                .unwrap_or(DocumentType::Dni),
            document_number: document_number.get_untracked(),
            phone: format!(
                "{} {}",
                prefix.get_untracked(),
                phone.get_untracked().trim()
            ),
            email: email.get_untracked(),
            check_in: check_in.get_untracked(),
            check_out: check_out.get_untracked(),
        };

        let validation = draft.validate();
        if validation.is_empty() {
            errors.set(RegistrationErrors::default());
            submit_action.dispatch(draft.to_request());
        } else {
            errors.set(validation);
        }
    };

    view! {
        <form on:submit=on_submit>
            <TextInput
                id="full-name"
                label="Nombre completo"
                value=full_name
                on_input=Callback::new(move |value| set_full_name.set(value))
                error=Signal::derive(move || errors.get().full_name)
            />
            <SelectInput
                id="document-type"
                label="Documento"
                options=vec![
                    (
                        DocumentType::Dni.value().to_string(),
                        DocumentType::Dni.label().to_string(),
                    ),
                    (
                        DocumentType::Nie.value().to_string(),
                        DocumentType::Nie.label().to_string(),
                    ),
                    (
                        DocumentType::Passport.value().to_string(),
                        DocumentType::Passport.label().to_string(),
                    ),
                ]
                value=document_type
                on_change=Callback::new(move |value| set_document_type.set(value))
            />
            <TextInput
                id="document-number"
                label="Número de documento"
                placeholder="Ej: 12345678Z"
                value=document_number
                on_input=Callback::new(move |value| set_document_number.set(value))
                error=Signal::derive(move || errors.get().document_number)
            />
            <SelectInput
                id="phone-prefix"
                label="Código de país"
                options={
                    COUNTRY_PREFIXES
                        .iter()
                        .map(|(value, label)| (value.to_string(), label.to_string()))
                        .collect::<Vec<_>>()
                }
                value=prefix
                on_change=Callback::new(move |value| set_prefix.set(value))
            />
            <TextInput
                id="phone"
                label="Teléfono"
                input_type="tel"
                value=phone
                on_input=Callback::new(move |value| set_phone.set(value))
                error=Signal::derive(move || errors.get().phone)
            />
            <TextInput
                id="email"
                label="Email"
                input_type="email"
                value=email
                on_input=Callback::new(move |value| set_email.set(value))
                error=Signal::derive(move || errors.get().email)
            />
            <TextInput
                id="check-in"
                label="Fecha de entrada"
                input_type="date"
                value=check_in
                on_input=Callback::new(move |value| set_check_in.set(value))
            />
            <TextInput
                id="check-out"
                label="Fecha de salida"
                input_type="date"
                value=check_out
                on_input=Callback::new(move |value| set_check_out.set(value))
                error=Signal::derive(move || errors.get().check_out)
            />
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=submit_action.pending()>
                    "Registrar"
                </Button>
                {move || {
                    submit_action
                        .pending()
                        .get()
                        .then_some(view! { <Spinner /> })
                }}
            </div>
            {move || {
                (outcome.get() == SubmitOutcome::Success).then_some(view! {
                    <div class="mt-4">
                        <Alert
                            kind=AlertKind::Success
                            message="Registration received. ¡Buen Camino!"
                        />
                    </div>
                })
            }}
            {move || {
                submit_error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}

//! One booking draft shared across the flow, confirmation and success pages,
//! provided through Leptos context rather than an ambient singleton.

use super::types::BookingDraft;
use leptos::prelude::*;

/// Installs a fresh draft into context. Call once at the app root.
pub fn provide_booking_store() {
    provide_context(RwSignal::new(BookingDraft::default()));
}

/// Returns the shared draft, or a detached one when rendered outside the app
/// shell (keeps components total, mirrors `use_auth`).
pub fn use_booking_store() -> RwSignal<BookingDraft> {
    use_context::<RwSignal<BookingDraft>>().unwrap_or_else(|| RwSignal::new(BookingDraft::default()))
}

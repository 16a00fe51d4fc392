//! Booking domain: the draft a visitor fills in, the request shipped to the
//! backend, and the money/date helpers the confirmation page derives from.

mod store;
mod types;

pub(crate) use store::{provide_booking_store, use_booking_store};
pub(crate) use types::{format_eur, BookingDraft, BookingErrors, BookingRequest, RoomType};

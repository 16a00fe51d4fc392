//! Dashboard statistics: strongly-typed payloads and the client that fetches
//! them. Validation happens at the deserialization boundary, so a malformed
//! payload never reaches a view.

pub(crate) mod client;
mod types;

pub(crate) use types::{BookingStatus, DashboardStats, DashboardSummary, RecentBooking};

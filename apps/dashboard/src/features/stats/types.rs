use serde::{Deserialize, Serialize};

/// Everything the dashboard shows, as delivered by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<RecentBooking>,
    pub pending_approvals: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: u64,
    /// Revenue in euros. Rendering decides the precision.
    pub total_revenue: f64,
    pub active_bookings: u64,
    pub upcoming_bookings: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => {
                "rounded-full bg-green-100 px-2.5 py-0.5 text-xs font-medium text-green-800"
            }
            BookingStatus::Pending => {
                "rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800"
            }
            BookingStatus::Cancelled => {
                "rounded-full bg-red-100 px-2.5 py-0.5 text-xs font-medium text-red-800"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentBooking {
    pub id: String,
    pub guest_name: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::{BookingStatus, DashboardSummary};

    const SUMMARY_JSON: &str = r#"{
        "stats": {
            "totalBookings": 235,
            "totalRevenue": 12450.5,
            "activeBookings": 18,
            "upcomingBookings": 42
        },
        "recentBookings": [
            {
                "id": "bk_1001",
                "guestName": "John Doe",
                "checkInDate": "2026-08-05",
                "checkOutDate": "2026-08-08",
                "status": "confirmed"
            }
        ],
        "pendingApprovals": 3
    }"#;

    #[test]
    fn summary_deserializes_from_camel_case() {
        let summary: DashboardSummary = serde_json::from_str(SUMMARY_JSON).unwrap();
        assert_eq!(summary.stats.total_bookings, 235);
        assert_eq!(summary.pending_approvals, 3);
        assert_eq!(summary.recent_bookings[0].status, BookingStatus::Confirmed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let bad = SUMMARY_JSON.replace("confirmed", "archived");
        assert!(serde_json::from_str::<DashboardSummary>(&bad).is_err());
    }

    #[test]
    fn snake_case_fields_are_rejected() {
        let bad = SUMMARY_JSON.replace("totalBookings", "total_bookings");
        assert!(serde_json::from_str::<DashboardSummary>(&bad).is_err());
    }
}

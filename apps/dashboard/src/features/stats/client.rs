use super::DashboardSummary;
use albergue_client::{get_json, AppError};

/// Fetches the dashboard summary from the backend API.
pub async fn fetch_summary() -> Result<DashboardSummary, AppError> {
    get_json("/api/dashboard/summary").await
}

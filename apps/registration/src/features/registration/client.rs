use super::RegistrationRequest;
use albergue_client::{post_json, AppError};

/// Submits a guest registration to the backend API.
pub async fn submit_registration(request: &RegistrationRequest) -> Result<(), AppError> {
    post_json("/api/registrations", request).await
}

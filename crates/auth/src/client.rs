//! Thin calls into the hosted provider: the cookie-backed session probe and
//! the browser redirects for sign-in/sign-out. Redirect failures are logged
//! and swallowed; the visitor simply stays on the unauthenticated branch.

use crate::types::AuthUser;
use albergue_client::{get_optional_json_with_credentials, AppError};

/// Fetches the current session. `None` means no session, which is an answer
/// and not an error.
pub async fn fetch_session() -> Result<Option<AuthUser>, AppError> {
    get_optional_json_with_credentials("/api/users/current").await
}

/// Sends the browser to `url`. Outside the wasm target this is a no-op so the
/// crate's pure logic stays testable on the host.
#[cfg(target_arch = "wasm32")]
pub fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            leptos::logging::error!("failed to redirect to {url}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(url: &str) {
    leptos::logging::log!("redirect requested off-wasm: {url}");
}

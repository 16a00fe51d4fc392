//! Identity provider configuration. The endpoint host and application id are
//! injected at build time and may be overridden at runtime through the shared
//! `window.ALBERGUE_CONFIG` object. The exact query-parameter contract of the
//! provider is owned by the provider; this module only builds the two
//! destinations the apps redirect to.

use albergue_client::config::runtime_override;

/// Hosted identity provider settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Provider host, stored without scheme or trailing slash.
    pub endpoint: String,
    /// Application id registered with the provider.
    pub app_id: String,
}

impl AuthConfig {
    /// Loads build-time values and applies runtime overrides.
    pub fn load() -> Self {
        let endpoint = runtime_override("auth_endpoint")
            .unwrap_or_else(|| option_env!("ALBERGUE_AUTH_ENDPOINT").unwrap_or("").to_string());
        let app_id = runtime_override("auth_app_id")
            .unwrap_or_else(|| option_env!("ALBERGUE_AUTH_APP_ID").unwrap_or("").to_string());

        Self {
            endpoint: normalize_endpoint(&endpoint),
            app_id: app_id.trim().to_string(),
        }
    }

    /// True when both the endpoint and the application id are present.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.app_id.is_empty()
    }

    /// Sign-out destination: the provider root.
    pub fn endpoint_root(&self) -> String {
        format!("https://{}/", self.endpoint)
    }

    /// Post-login return destination handed to the provider on sign-in.
    pub fn callback_url(&self) -> String {
        format!("https://{}/callback", self.endpoint)
    }
}

/// Strips scheme and trailing slashes so `endpoint` is always a bare host.
fn normalize_endpoint(raw: &str) -> String {
    raw.trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{normalize_endpoint, AuthConfig};

    fn config(endpoint: &str) -> AuthConfig {
        AuthConfig {
            endpoint: normalize_endpoint(endpoint),
            app_id: "albergue-web".to_string(),
        }
    }

    #[test]
    fn normalize_endpoint_strips_scheme_and_slash() {
        assert_eq!(normalize_endpoint("https://id.carrascalejo.dev/"), "id.carrascalejo.dev");
        assert_eq!(normalize_endpoint("id.carrascalejo.dev"), "id.carrascalejo.dev");
        assert_eq!(normalize_endpoint("  http://id.local  "), "id.local");
    }

    #[test]
    fn sign_in_and_sign_out_destinations() {
        let config = config("id.carrascalejo.dev");
        assert_eq!(config.endpoint_root(), "https://id.carrascalejo.dev/");
        assert_eq!(config.callback_url(), "https://id.carrascalejo.dev/callback");
    }

    #[test]
    fn unconfigured_when_endpoint_missing() {
        let mut config = config("");
        assert!(!config.is_configured());
        config.endpoint = "id.local".to_string();
        assert!(config.is_configured());
    }
}

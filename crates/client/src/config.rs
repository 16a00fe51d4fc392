//! Build-time configuration with an optional runtime override. Values are
//! baked in through `option_env!` and can be replaced by a `window.ALBERGUE_CONFIG`
//! object so a static deployment can re-point the backend without a rebuild.
//! Nothing here is secret; secrets never belong in front-end configuration.

/// Front-end configuration shared by every app in the workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the backend API gateway. Empty means same-origin.
    pub api_base_url: String,
    /// Deployment mode string, surfaced by the health endpoint.
    pub api_mode: String,
}

impl AppConfig {
    /// Loads the build-time values and applies any runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("ALBERGUE_API_BASE_URL").unwrap_or("");
        let api_mode = option_env!("ALBERGUE_API_MODE").unwrap_or("local");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            api_mode: api_mode.to_string(),
        };

        if let Some(value) = runtime_override("api_base_url") {
            config.api_base_url = value;
        }
        if let Some(value) = runtime_override("api_mode") {
            config.api_mode = value;
        }

        config
    }
}

/// Reads one key from `window.ALBERGUE_CONFIG`, trimming and rejecting empty
/// strings. Other crates (the auth package) use this for their own keys.
#[cfg(target_arch = "wasm32")]
pub fn runtime_override(key: &str) -> Option<String> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ALBERGUE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }

    let value = Reflect::get(&Object::from(config), &JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_value(&value)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn runtime_override(_key: &str) -> Option<String> {
    None
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_value, AppConfig};

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.carrascalejo.dev "),
            Some("https://api.carrascalejo.dev".to_string())
        );
    }

    #[test]
    fn load_defaults_to_local_mode() {
        // Off-wasm there is no runtime object, so load() yields the baked-in
        // values; the mode default keeps the health endpoint meaningful.
        let config = AppConfig::load();
        assert_eq!(config.api_mode, "local");
    }
}

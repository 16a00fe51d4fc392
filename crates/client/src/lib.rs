//! Shared front-end utilities for the albergue apps: build-time configuration
//! with runtime overrides, a common error type, and JSON HTTP helpers with a
//! predictable timeout policy. Every app crate composes on top of this one so
//! network behavior stays consistent across the monorepo.

pub mod api;
pub mod config;
pub mod errors;

pub use api::{get_json, get_optional_json_with_credentials, post_json, post_json_response};
pub use config::AppConfig;
pub use errors::AppError;

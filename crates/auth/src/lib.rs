//! Auth package for the albergue front-ends. Wraps the hosted identity
//! provider behind a small surface: a context provider that hydrates the
//! session once on mount, redirect-based sign-in/sign-out, and the
//! protected-route gate every app composes around. Only non-sensitive profile
//! claims are kept in memory; credentials and tokens stay with the provider.

pub mod client;
pub mod config;
pub mod gate;
pub mod state;
pub mod types;

pub use config::AuthConfig;
pub use gate::{decide, GateDecision, ProtectedRoute};
pub use state::{use_auth, AuthContext, AuthProvider};
pub use types::{AuthSnapshot, AuthUser};

//! Session types. The session is the only entity with a lifecycle in the
//! front-ends: created in the loading state on mount, resolved by one provider
//! round-trip, torn down on sign-out.

use serde::{Deserialize, Serialize};

/// Profile claims returned by the identity provider. All fields beyond the
/// subject are optional; the apps must render sensibly without them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthUser {
    /// The role claim, or an empty string when the provider sent none.
    pub fn role_or_empty(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }
}

/// Consistent per-render view of the session. Components read this instead of
/// the underlying signals so a single render pass never observes a half
/// updated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub user: Option<AuthUser>,
}

impl AuthSnapshot {
    /// Snapshot for a session check still in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            is_authenticated: false,
            user: None,
        }
    }

    /// Snapshot for a resolved, signed-out visitor.
    pub fn anonymous() -> Self {
        Self {
            is_loading: false,
            is_authenticated: false,
            user: None,
        }
    }

    /// Snapshot for a resolved, signed-in visitor.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            is_loading: false,
            is_authenticated: true,
            user: Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AuthUser;

    #[test]
    fn user_deserializes_with_missing_claims() {
        let user: AuthUser = serde_json::from_str(r#"{"sub":"logto|42"}"#).unwrap();
        assert_eq!(user.sub, "logto|42");
        assert_eq!(user.role, None);
        assert_eq!(user.role_or_empty(), "");
    }

    #[test]
    fn user_deserializes_full_profile() {
        let json = r#"{"sub":"logto|7","name":"Ana","email":"ana@example.com","role":"admin"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("Ana"));
        assert_eq!(user.role_or_empty(), "admin");
    }
}

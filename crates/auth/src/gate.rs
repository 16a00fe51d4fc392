//! Protected-route gate: the one decision point between a visitor and a page.
//! The decision itself is a pure function over the session snapshot so the
//! branch semantics stay testable without a browser; the component only maps
//! the decision onto views.

use crate::{state::use_auth, types::AuthSnapshot};
use albergue_ui::{Alert, AlertKind, Spinner};
use leptos::prelude::*;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const SIGN_IN_REQUIRED_MESSAGE: &str = "You need to be logged in to access this page";
pub const PERMISSION_DENIED_MESSAGE: &str = "You don't have permission to access this page";

/// Outcome of the gate for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session check in flight; show the loading indicator, nothing else.
    Loading,
    /// Resolved and signed out; terminal until a sign-in attempt.
    SignInRequired,
    /// Signed in but the required role does not match.
    Forbidden,
    /// Render the wrapped content.
    Allowed,
}

/// Decides what the gate renders. Loading wins over everything; a missing
/// role claim never satisfies a role requirement.
pub fn decide(snapshot: &AuthSnapshot, required_role: Option<&str>) -> GateDecision {
    if snapshot.is_loading {
        return GateDecision::Loading;
    }
    if !snapshot.is_authenticated {
        return GateDecision::SignInRequired;
    }

    let role = snapshot.user.as_ref().and_then(|user| user.role.as_deref());
    match required_role {
        Some(required) if role != Some(required) => GateDecision::Forbidden,
        _ => GateDecision::Allowed,
    }
}

/// Wraps a page and renders exactly one of: loading indicator, access-denied
/// notice, permission-denied notice, or the page itself.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] required_role: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let children = StoredValue::new(children);

    view! {
        {move || match decide(&auth.snapshot(), required_role) {
            GateDecision::Loading => view! {
                <div class="flex items-center gap-3 py-10" aria-busy="true">
                    <Spinner />
                    <p class="text-sm text-gray-500">{LOADING_MESSAGE}</p>
                </div>
            }
            .into_any(),
            GateDecision::SignInRequired => view! {
                <Alert kind=AlertKind::Error message=SIGN_IN_REQUIRED_MESSAGE />
            }
            .into_any(),
            GateDecision::Forbidden => view! {
                <Alert kind=AlertKind::Error message=PERMISSION_DENIED_MESSAGE />
            }
            .into_any(),
            GateDecision::Allowed => children.with_value(|children| children()),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::{
        decide, GateDecision, LOADING_MESSAGE, PERMISSION_DENIED_MESSAGE,
        SIGN_IN_REQUIRED_MESSAGE,
    };
    use crate::types::{AuthSnapshot, AuthUser};

    fn guest() -> AuthUser {
        AuthUser {
            sub: "logto|guest".to_string(),
            name: None,
            email: None,
            role: Some("guest".to_string()),
        }
    }

    #[test]
    fn loading_wins_regardless_of_session_or_role() {
        let mut snapshot = AuthSnapshot::loading();
        assert_eq!(decide(&snapshot, None), GateDecision::Loading);
        assert_eq!(decide(&snapshot, Some("admin")), GateDecision::Loading);

        // Even a (nonsensical) authenticated-but-loading snapshot stays on
        // the loading branch.
        snapshot.is_authenticated = true;
        snapshot.user = Some(guest());
        assert_eq!(decide(&snapshot, Some("admin")), GateDecision::Loading);
    }

    #[test]
    fn signed_out_visitor_is_denied_and_never_sees_content() {
        let snapshot = AuthSnapshot::anonymous();
        assert_eq!(decide(&snapshot, None), GateDecision::SignInRequired);
        assert_eq!(decide(&snapshot, Some("guest")), GateDecision::SignInRequired);
    }

    #[test]
    fn signed_in_without_role_requirement_is_allowed() {
        let snapshot = AuthSnapshot::signed_in(guest());
        assert_eq!(decide(&snapshot, None), GateDecision::Allowed);
    }

    #[test]
    fn role_mismatch_is_forbidden() {
        let snapshot = AuthSnapshot::signed_in(guest());
        assert_eq!(decide(&snapshot, Some("admin")), GateDecision::Forbidden);
    }

    #[test]
    fn role_match_is_allowed() {
        let snapshot = AuthSnapshot::signed_in(guest());
        assert_eq!(decide(&snapshot, Some("guest")), GateDecision::Allowed);
    }

    #[test]
    fn missing_role_claim_never_satisfies_a_requirement() {
        let mut user = guest();
        user.role = None;
        let snapshot = AuthSnapshot::signed_in(user);
        assert_eq!(decide(&snapshot, Some("guest")), GateDecision::Forbidden);
        assert_eq!(decide(&snapshot, None), GateDecision::Allowed);
    }

    // The full visitor journey: loading, signed out, wrong role, right role.
    #[test]
    fn gate_walkthrough() {
        assert_eq!(decide(&AuthSnapshot::loading(), None), GateDecision::Loading);

        assert_eq!(
            decide(&AuthSnapshot::anonymous(), None),
            GateDecision::SignInRequired
        );

        let snapshot = AuthSnapshot::signed_in(guest());
        assert_eq!(decide(&snapshot, Some("admin")), GateDecision::Forbidden);
        assert_eq!(decide(&snapshot, Some("guest")), GateDecision::Allowed);
    }

    #[test]
    fn branch_messages_match_what_visitors_read() {
        assert_eq!(LOADING_MESSAGE, "Loading...");
        assert!(SIGN_IN_REQUIRED_MESSAGE.contains("logged in"));
        assert!(PERMISSION_DENIED_MESSAGE.contains("permission"));
    }
}

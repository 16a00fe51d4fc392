//! Session state and context. The provider hydrates the session once on mount
//! and exposes derived signals for guards and routes. The session signal has a
//! single writer (this module); every reader observes a consistent snapshot
//! per render pass.

use crate::{
    client,
    config::AuthConfig,
    types::{AuthSnapshot, AuthUser},
};
use leptos::{prelude::*, task::spawn_local};

/// Auth session context shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<AuthUser>>,
    is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(session: RwSignal<Option<AuthUser>>, is_loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_loading,
            is_authenticated,
        }
    }

    /// Fresh context in the loading state, pending the provider's answer.
    fn pending() -> Self {
        Self::new(RwSignal::new(None), RwSignal::new(true))
    }

    /// Fallback context for components rendered outside a provider: resolved
    /// and signed out.
    fn detached() -> Self {
        Self::new(RwSignal::new(None), RwSignal::new(false))
    }

    /// Current profile claims, if signed in.
    pub fn user(&self) -> Option<AuthUser> {
        self.session.get()
    }

    /// True while the initial session check is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    /// Consistent view of the session for this render pass.
    pub fn snapshot(&self) -> AuthSnapshot {
        let user = self.session.get();
        AuthSnapshot {
            is_loading: self.is_loading.get(),
            is_authenticated: user.is_some(),
            user,
        }
    }

    /// Installs the session after the provider confirms it.
    pub fn set_session(&self, user: AuthUser) {
        self.session.set(Some(user));
    }

    /// Tears the in-memory session down, typically on sign-out.
    pub fn clear_session(&self) {
        self.session.set(None);
    }

    fn finish_loading(&self) {
        self.is_loading.set(false);
    }

    /// Starts the redirect round-trip to the provider. A misconfigured or
    /// failing hand-off is logged and swallowed; the visitor stays on the
    /// unauthenticated branch until the provider brings them back.
    pub fn sign_in(&self) {
        let config = AuthConfig::load();
        if !config.is_configured() {
            leptos::logging::error!("sign-in failed: identity provider is not configured");
            return;
        }
        client::redirect(&config.callback_url());
    }

    /// Clears the local session and redirects to the provider for sign-out.
    pub fn sign_out(&self) {
        self.clear_session();
        let config = AuthConfig::load();
        if !config.is_configured() {
            leptos::logging::error!("sign-out failed: identity provider is not configured");
            return;
        }
        client::redirect(&config.endpoint_root());
    }
}

/// Provides the auth context and hydrates the session once on mount. A failed
/// session check is treated exactly like "not signed in".
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::pending();
    provide_context(auth);

    spawn_local(async move {
        match client::fetch_session().await {
            Ok(Some(user)) => auth.set_session(user),
            Ok(None) => {}
            Err(err) => {
                leptos::logging::warn!("session check failed, staying signed out: {err}");
            }
        }
        auth.finish_loading();
    });

    view! { {children()} }
}

/// Returns the surrounding auth context, or a detached signed-out context so
/// components stay total when rendered without a provider.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::detached)
}

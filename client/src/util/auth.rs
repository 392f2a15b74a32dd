//! Shared auth helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` resolves the stored token once at startup (`init_session`); every
//! protected page installs the same unauthenticated redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{self, ApiConfig};
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::storage;

/// Redirect only after the stored-token check finished without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Resolve the stored token to a user. No token, or a rejected one, ends
/// signed out; a rejected token is cleared.
pub fn init_session(auth: RwSignal<AuthState>, cfg: ApiConfig) {
    if storage::load_token().is_none() {
        auth.set(AuthState::signed_out());
        return;
    }
    leptos::task::spawn_local(async move {
        match api::current_user(&cfg).await {
            Ok(user) => auth.set(AuthState::signed_in(user)),
            Err(e) => {
                leptos::logging::warn!("session restore failed: {e}");
                storage::clear_token();
                auth.set(AuthState::signed_out());
            }
        }
    });
}

/// Store a fresh login. The response user is used when present, otherwise
/// `/user/me` is asked.
pub async fn complete_login(auth: RwSignal<AuthState>, cfg: &ApiConfig, token: &str, user: Option<User>) {
    storage::save_token(token);
    let user = match user {
        Some(user) => Some(user),
        None => api::current_user(cfg).await.ok(),
    };
    auth.set(user.map_or_else(AuthState::signed_out, AuthState::signed_in));
}

/// Clear the token and profile.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.set(AuthState::signed_out());
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The bearer token itself lives in browser
//! storage (`util::storage`); this state only mirrors what the token resolved to.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Starts in `loading` so guards wait for the stored-token check before
/// redirecting.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name to stamp on edited articles.
    pub fn author_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(User::display_name)
    }
}

use super::*;

fn user(name: &str) -> User {
    User { id: Some("u1".to_owned()), name: Some(name.to_owned()), email: None, role: None }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn signed_in_clears_loading() {
    let state = AuthState::signed_in(user("Alice"));
    assert!(!state.loading);
    assert!(state.is_signed_in());
    assert_eq!(state.author_name(), Some("Alice"));
}

#[test]
fn signed_out_has_no_author() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert_eq!(state.author_name(), None);
}

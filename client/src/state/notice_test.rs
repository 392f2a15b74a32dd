use super::*;

#[test]
fn push_replaces_current_and_increments_seq() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeLevel::Success, "Saved");
    let second = state.push(NoticeLevel::Error, "Failed");
    assert!(second > first);
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.level, NoticeLevel::Error);
    assert_eq!(current.message, "Failed");
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let old = state.push(NoticeLevel::Success, "first");
    let new = state.push(NoticeLevel::Warning, "second");

    assert!(!state.dismiss(old));
    assert_eq!(state.current.as_ref().map(|n| n.seq), Some(new));

    assert!(state.dismiss(new));
    assert_eq!(state.current, None);
}

#[test]
fn dismiss_on_empty_is_noop() {
    let mut state = NoticeState::default();
    assert!(!state.dismiss(1));
}

#[test]
fn level_names() {
    assert_eq!(NoticeLevel::Warning.as_str(), "warning");
}

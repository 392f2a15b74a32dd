use super::*;

// =============================================================
// Open / load
// =============================================================

#[test]
fn preview_starts_closed() {
    let state = PreviewState::<String>::default();
    assert!(!state.is_open());
    assert!(!state.is_loading());
}

#[test]
fn open_waits_for_the_fetch() {
    let mut state = PreviewState::<String>::default();
    state.open("7");
    assert!(state.is_open());
    assert!(state.is_loading());

    state.loaded("7", "Alice".to_owned());
    assert!(!state.is_loading());
    assert_eq!(state.record.as_deref(), Some("Alice"));
}

#[test]
fn reopening_drops_the_previous_record() {
    let mut state = PreviewState::<String>::default();
    state.open("1");
    state.loaded("1", "Alice".to_owned());

    state.open("2");
    assert_eq!(state.record, None);
    assert!(state.is_loading());
}

#[test]
fn late_response_for_another_row_is_ignored() {
    let mut state = PreviewState::<String>::default();
    state.open("1");
    state.open("2");

    state.loaded("1", "Alice".to_owned());
    state.failed("1", "timeout");
    assert_eq!(state.record, None);
    assert_eq!(state.error, None);

    state.loaded("2", "Bob".to_owned());
    assert_eq!(state.record.as_deref(), Some("Bob"));
}

#[test]
fn response_after_close_is_ignored() {
    let mut state = PreviewState::<String>::default();
    state.open("1");
    state.close();
    state.loaded("1", "Alice".to_owned());
    assert_eq!(state, PreviewState::default());
}

// =============================================================
// Failure
// =============================================================

#[test]
fn failed_fetch_stops_loading_with_message() {
    let mut state = PreviewState::<String>::default();
    state.open("3");
    state.failed("3", "HTTP 404");
    assert!(!state.is_loading());
    assert_eq!(state.error.as_deref(), Some("HTTP 404"));
    assert_eq!(state.record, None);
}

use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: Option<String>,
}

fn row(id: &str) -> Row {
    Row { id: Some(id.to_owned()) }
}

fn row_id(row: &Row) -> Option<&str> {
    row.id.as_deref()
}

#[test]
fn starts_loading_and_not_empty() {
    let state = ListState::<Row>::default();
    assert!(state.loading);
    assert!(!state.is_empty());
}

#[test]
fn loaded_replaces_items_and_clears_error() {
    let mut state = ListState::default();
    state.failed("offline");
    state.loaded(vec![row("1")]);
    assert_eq!(state.items, vec![row("1")]);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn empty_after_loading_nothing() {
    let mut state = ListState::<Row>::default();
    state.loaded(Vec::new());
    assert!(state.is_empty());
}

#[test]
fn delete_confirmation_flow() {
    let mut state = ListState::default();
    state.loaded(vec![row("1"), row("2")]);

    state.request_delete("1");
    state.cancel_delete();
    assert_eq!(state.confirm_delete(), None);

    state.request_delete("2");
    let id = state.confirm_delete().unwrap();
    assert_eq!(state.pending_delete, None);
    state.remove(&id, row_id);
    assert_eq!(state.items, vec![row("1")]);
}

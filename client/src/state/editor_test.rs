use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Draft {
    title: String,
}

fn draft(title: &str) -> Draft {
    Draft { title: title.to_owned() }
}

// =============================================================
// SaveMode
// =============================================================

#[test]
fn save_mode_from_route() {
    assert_eq!(SaveMode::from_route(None), SaveMode::Create);
    assert_eq!(SaveMode::from_route(Some(String::new())), SaveMode::Create);
    assert_eq!(SaveMode::from_route(Some("42".into())), SaveMode::Update("42".into()));
    assert_eq!(SaveMode::Update("42".into()).id(), Some("42"));
}

// =============================================================
// EditorState
// =============================================================

#[test]
fn create_editor_starts_ready() {
    let state = EditorState::<Draft>::new(SaveMode::Create);
    assert!(!state.loading);
    assert!(state.ready);
    assert!(!state.is_update());
    assert_eq!(state.record, Draft::default());
}

#[test]
fn update_editor_starts_loading_until_loaded() {
    let mut state = EditorState::<Draft>::new(SaveMode::Update("1".into()));
    assert!(state.loading);
    assert!(!state.begin_save());
    state.loaded(draft("stored"));
    assert!(!state.loading);
    assert_eq!(state.record.title, "stored");
}

#[test]
fn begin_save_rejects_second_concurrent_save() {
    let mut state = EditorState::<Draft>::new(SaveMode::Create);
    assert!(state.begin_save());
    assert!(!state.begin_save());
    state.finish_save(Err("offline".into()));
    assert!(state.begin_save());
}

#[test]
fn successful_save_marks_saved_and_blocks_resubmit() {
    let mut state = EditorState::<Draft>::new(SaveMode::Create);
    assert!(state.begin_save());
    state.finish_save(Ok(()));
    assert!(state.saved);
    assert_eq!(state.error, None);
    assert!(!state.begin_save());
}

#[test]
fn failed_save_keeps_record_and_error() {
    let mut state = EditorState::<Draft>::new(SaveMode::Create);
    state.record = draft("unsaved");
    assert!(state.begin_save());
    state.finish_save(Err("title required".into()));
    assert!(!state.saving);
    assert!(!state.saved);
    assert_eq!(state.error.as_deref(), Some("title required"));
    assert_eq!(state.record, draft("unsaved"));
}

#[test]
fn begin_save_clears_previous_error() {
    let mut state = EditorState::<Draft>::new(SaveMode::Create);
    assert!(state.begin_save());
    state.finish_save(Err("boom".into()));
    assert!(state.begin_save());
    assert_eq!(state.error, None);
}

#[test]
fn failed_load_never_allows_saving_the_blank_record() {
    let mut state = EditorState::<Draft>::new(SaveMode::Update("7".into()));
    state.load_failed("404 not found");
    assert!(!state.loading);
    assert!(!state.ready);
    assert_eq!(state.load_error.as_deref(), Some("404 not found"));
    assert!(!state.begin_save());
    assert!(!state.saving);
}

#[test]
fn loaded_record_makes_update_editor_ready() {
    let mut state = EditorState::<Draft>::new(SaveMode::Update("7".into()));
    assert!(!state.ready);
    state.loaded(draft("stored"));
    assert!(state.ready);
    assert_eq!(state.load_error, None);
    assert!(state.begin_save());
}

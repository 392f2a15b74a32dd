//! Record editor state shared by every editor page.
//!
//! SYSTEM CONTEXT
//! ==============
//! An editor page holds one `RwSignal<EditorState<T>>`. Form inputs replace
//! `record`; the submit handler brackets the network call with
//! `begin_save` / `finish_save`.
//!
//! An update editor is only `ready` once the stored record arrived. A failed
//! load leaves it unready for good: the record is still `T::default()` and
//! saving it would overwrite the stored one.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Whether submit creates a new record or updates an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(String),
}

impl SaveMode {
    /// Decided solely by the presence of a route id.
    pub fn from_route(id: Option<String>) -> Self {
        match id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Self::Update(id),
            None => Self::Create,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Update(id) => Some(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorState<T> {
    pub record: T,
    pub mode: SaveMode,
    pub loading: bool,
    /// The record is the stored one (or a new draft) and may be edited.
    pub ready: bool,
    /// Why the stored record could not be fetched.
    pub load_error: Option<String>,
    pub saving: bool,
    /// Set once a save succeeded; the page leaves on it.
    pub saved: bool,
    pub error: Option<String>,
}

impl<T: Default> EditorState<T> {
    /// Fresh editor. Update mode starts loading the stored record.
    pub fn new(mode: SaveMode) -> Self {
        let loading = matches!(mode, SaveMode::Update(_));
        Self {
            record: T::default(),
            mode,
            loading,
            ready: !loading,
            load_error: None,
            saving: false,
            saved: false,
            error: None,
        }
    }
}

impl<T> EditorState<T> {
    /// Replace the record with the fetched one.
    pub fn loaded(&mut self, record: T) {
        self.record = record;
        self.loading = false;
        self.ready = true;
        self.load_error = None;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.load_error = Some(message.into());
    }

    /// Mark a save in flight. Returns `false` if one already is, the record
    /// is not ready, or it was already saved.
    pub fn begin_save(&mut self) -> bool {
        if self.saving || !self.ready || self.saved {
            return false;
        }
        self.saving = true;
        self.error = None;
        true
    }

    /// End the in-flight save. On error the record is kept as-is.
    pub fn finish_save(&mut self, result: Result<(), String>) {
        self.saving = false;
        self.saved = result.is_ok();
        self.error = result.err();
    }

    pub fn is_update(&self) -> bool {
        matches!(self.mode, SaveMode::Update(_))
    }
}

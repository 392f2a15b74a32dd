//! Page-level hooks shared by every collection's list and editor pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! List and editor pages differ only in their fields. Fetching, deleting,
//! loading the edited record and submitting it go through these hooks so
//! loading flags, notices and navigation behave the same on every screen.
//!
//! ERROR HANDLING
//! ==============
//! API failures never panic. They land in the page state (`error`) and as an
//! error notice; the record being edited is left untouched.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::{self, ApiConfig};
use crate::net::types::Resource;
use crate::state::editor::{EditorState, SaveMode};
use crate::state::lists::ListState;
use crate::state::notice::{NoticeLevel, NoticeState, notify};
use crate::state::preview::PreviewState;

/// App services a page needs after setup. Must be captured while the
/// component body runs; event handlers cannot read context.
#[derive(Clone, Debug)]
pub struct PageContext {
    pub cfg: ApiConfig,
    pub notices: RwSignal<NoticeState>,
}

impl PageContext {
    pub fn expect() -> Self {
        Self { cfg: expect_context::<ApiConfig>(), notices: expect_context::<RwSignal<NoticeState>>() }
    }

    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        notify(self.notices, level, message);
    }
}

/// List state for `T`, fetched once on mount.
pub fn use_collection_list<T: Resource>() -> RwSignal<ListState<T>> {
    let list = RwSignal::new(ListState::<T>::default());
    let ctx = PageContext::expect();
    Effect::new(move || reload_list(&ctx, list));
    list
}

/// Fetch the collection into `list`.
pub fn reload_list<T: Resource>(ctx: &PageContext, list: RwSignal<ListState<T>>) {
    let PageContext { cfg, notices } = ctx.clone();
    list.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        match api::list::<T>(&cfg).await {
            Ok(items) => list.update(|s| s.loaded(items)),
            Err(e) => {
                leptos::logging::warn!("list {} failed: {e}", T::COLLECTION.path());
                list.update(|s| s.failed(e.to_string()));
                notify(notices, NoticeLevel::Error, e.to_string());
            }
        }
    });
}

/// Delete the item awaiting confirmation, if any.
pub fn delete_confirmed<T: Resource>(ctx: &PageContext, list: RwSignal<ListState<T>>) {
    let Some(id) = list.try_update(ListState::confirm_delete).flatten() else {
        return;
    };
    let PageContext { cfg, notices } = ctx.clone();
    leptos::task::spawn_local(async move {
        match api::delete(&cfg, T::COLLECTION, &id).await {
            Ok(()) => {
                list.update(|s| s.remove(&id, T::id));
                notify(notices, NoticeLevel::Success, format!("{} deleted", T::COLLECTION.singular()));
            }
            Err(e) => notify(notices, NoticeLevel::Error, e.to_string()),
        }
    });
}

/// Open the preview for `id` and fetch the stored record, so the dialog
/// shows what the server has rather than the possibly stale list row.
pub fn open_preview<T: Resource>(ctx: &PageContext, preview: RwSignal<PreviewState<T>>, id: String) {
    preview.update(|p| p.open(&id));
    let PageContext { cfg, notices } = ctx.clone();
    leptos::task::spawn_local(async move {
        match api::get::<T>(&cfg, &id).await {
            Ok(record) => preview.update(|p| p.loaded(&id, record)),
            Err(e) => {
                leptos::logging::warn!("preview {}/{id} failed: {e}", T::COLLECTION.path());
                preview.update(|p| p.failed(&id, e.to_string()));
                notify(notices, NoticeLevel::Error, e.to_string());
            }
        }
    });
}

/// Editor state for `T`. The `:id` route param selects update mode and
/// triggers a fetch of the stored record.
pub fn use_record_editor<T: Resource>() -> RwSignal<EditorState<T>> {
    let params = use_params_map();
    let mode = SaveMode::from_route(params.read_untracked().get("id"));
    let editor = RwSignal::new(EditorState::<T>::new(mode.clone()));
    use_return_on_save(editor);

    if let SaveMode::Update(id) = mode {
        let PageContext { cfg, notices } = PageContext::expect();
        Effect::new(move || {
            let cfg = cfg.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api::get::<T>(&cfg, &id).await {
                    Ok(record) => editor.update(|s| s.loaded(record)),
                    Err(e) => {
                        leptos::logging::warn!("load {}/{id} failed: {e}", T::COLLECTION.path());
                        editor.update(|s| s.load_failed(e.to_string()));
                        notify(notices, NoticeLevel::Error, e.to_string());
                    }
                }
            });
        });
    }
    editor
}

/// Return to the collection list once the editor has saved.
pub fn use_return_on_save<T: Resource>(editor: RwSignal<EditorState<T>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if editor.with(|s| s.saved) {
            navigate(T::COLLECTION.route(), NavigateOptions::default());
        }
    });
}

/// Save `record` with one create or update call. A submit while a save is
/// in flight is ignored.
pub fn submit_record<T: Resource>(ctx: &PageContext, editor: RwSignal<EditorState<T>>, record: T) {
    if !editor.try_update(EditorState::begin_save).unwrap_or(false) {
        return;
    }
    editor.update(|s| s.record = record.clone());
    let mode = editor.with_untracked(|s| s.mode.clone());
    let PageContext { cfg, notices } = ctx.clone();
    leptos::task::spawn_local(async move {
        let result = match &mode {
            SaveMode::Create => api::create(&cfg, &record).await,
            SaveMode::Update(id) => api::update(&cfg, id, &record).await,
        };
        match result {
            Ok(()) => {
                editor.update(|s| s.finish_save(Ok(())));
                notify(notices, NoticeLevel::Success, format!("{} saved", T::COLLECTION.singular()));
            }
            Err(e) => {
                leptos::logging::warn!("save {} failed: {e}", T::COLLECTION.path());
                editor.update(|s| s.finish_save(Err(e.to_string())));
                notify(notices, NoticeLevel::Error, e.to_string());
            }
        }
    });
}

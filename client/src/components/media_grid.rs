//! Grid of uploaded media with select, delete and multi-select insert.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists `GET /files` fresh on mount and whenever `refresh` changes. When
//! the listing fails the grid falls back to the local media store, so
//! recent uploads stay pickable while the files endpoint is down. Entries
//! shown from that fallback are deleted from the local store only.

#[cfg(test)]
#[path = "media_grid_test.rs"]
mod media_grid_test;

use leptos::prelude::*;

use content::{MediaEntry, MediaKind, UsageTag};

use crate::net::api::{self, ApiConfig, ApiError};
use crate::state::media::MediaSelection;
use crate::state::notice::{NoticeLevel, NoticeState, notify};
use crate::util::media_store;

/// Where the grid's entries came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingSource {
    #[default]
    Server,
    Local,
}

impl ListingSource {
    /// Local entries have no server file to delete.
    pub fn deletes_on_server(self) -> bool {
        self == Self::Server
    }
}

/// Server listing, or the local store when the listing failed.
pub fn entries_or_local<F>(listing: Result<Vec<MediaEntry>, ApiError>, local: F) -> (Vec<MediaEntry>, ListingSource)
where
    F: FnOnce() -> Vec<MediaEntry>,
{
    match listing {
        Ok(entries) => (entries, ListingSource::Server),
        Err(e) => {
            leptos::logging::warn!("file listing failed, using local media: {e}");
            (local(), ListingSource::Local)
        }
    }
}

/// Select value for a usage tag, `""` meaning untagged.
pub fn usage_value(usage: Option<UsageTag>) -> &'static str {
    usage.map_or("", UsageTag::as_str)
}

#[component]
pub fn MediaGrid(
    on_select: Callback<Vec<MediaEntry>>,
    #[prop(into, optional)] refresh: Signal<u32>,
    /// Show the per-item usage tag select.
    #[prop(optional)]
    show_usage: bool,
) -> impl IntoView {
    let cfg = expect_context::<ApiConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let items = RwSignal::new(Vec::<MediaEntry>::new());
    let selection = RwSignal::new(MediaSelection::default());
    let loading = RwSignal::new(false);
    let source = RwSignal::new(ListingSource::default());

    let load = {
        let cfg = cfg.clone();
        move || {
            let cfg = cfg.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let (entries, from) = entries_or_local(api::list_files(&cfg).await, media_store::load);
                items.set(entries);
                source.set(from);
                loading.set(false);
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move || {
            refresh.track();
            load();
        });
    }

    let insert_selected = move |_| {
        let chosen = selection.with_untracked(|s| items.with_untracked(|all| s.chosen(all)));
        if !chosen.is_empty() {
            selection.update(MediaSelection::clear);
            on_select.run(chosen);
        }
    };

    let delete_entry = {
        let cfg = cfg.clone();
        move |id: String| {
            if !source.get_untracked().deletes_on_server() {
                media_store::remove(&id);
                items.update(|all| all.retain(|e| e.id != id));
                notify(notices, NoticeLevel::Warning, "Removed from local media only; the server is unavailable");
                return;
            }
            let cfg = cfg.clone();
            leptos::task::spawn_local(async move {
                match api::delete_file(&cfg, &id).await {
                    Ok(()) => {
                        media_store::remove(&id);
                        items.update(|all| all.retain(|e| e.id != id));
                        notify(notices, NoticeLevel::Success, "File deleted");
                    }
                    Err(e) => notify(notices, NoticeLevel::Error, e.to_string()),
                }
            });
        }
    };

    let set_usage = move |id: String, raw: String| {
        let usage = raw.parse::<UsageTag>().ok();
        let cfg = cfg.clone();
        leptos::task::spawn_local(async move {
            match api::set_file_usage(&cfg, &id, usage).await {
                Ok(()) => {
                    items.update(|all| {
                        if let Some(entry) = all.iter_mut().find(|e| e.id == id) {
                            entry.usage = usage;
                        }
                    });
                    notify(notices, NoticeLevel::Success, "Usage updated");
                }
                Err(e) => notify(notices, NoticeLevel::Error, e.to_string()),
            }
        });
    };

    let refresh_click = {
        let load = load.clone();
        move |_| load()
    };

    view! {
        <div class="media-grid">
            <div class="media-grid__actions">
                <button
                    type="button"
                    class="btn btn--primary"
                    disabled=move || selection.with(MediaSelection::is_empty)
                    on:click=insert_selected
                >
                    {move || format!("Insert Selected ({})", selection.with(MediaSelection::len))}
                </button>
                <button type="button" class="btn" on:click=refresh_click>
                    "Refresh"
                </button>
                <Show when=move || loading.get()>
                    <span class="media-grid__loading">"Loading..."</span>
                </Show>
            </div>
            <div class="media-grid__items">
                <For each=move || items.get() key=|entry| entry.id.clone() let:entry>
                    {
                        let id = entry.id.clone();
                        let url = entry.primary_url().unwrap_or_default().to_owned();
                        let label = entry.filename.clone().unwrap_or_else(|| url.clone());
                        let toggle_id = id.clone();
                        let checked_id = id.clone();
                        let delete_id = id.clone();
                        let usage_id = id.clone();
                        let select_entry = entry.clone();
                        let delete_entry = delete_entry.clone();
                        let set_usage = set_usage.clone();
                        view! {
                            <div class="media-grid__item">
                                <input
                                    type="checkbox"
                                    class="media-grid__check"
                                    prop:checked=move || selection.with(|s| s.contains(&checked_id))
                                    on:change=move |_| selection.update(|s| s.toggle(&toggle_id))
                                />
                                <div class="media-grid__thumb">
                                    {match entry.kind {
                                        MediaKind::Image => view! { <img src=url.clone() alt=label.clone() /> }.into_any(),
                                        MediaKind::Video => view! { <video src=url.clone()></video> }.into_any(),
                                    }}
                                </div>
                                <div class="media-grid__name" title=label.clone()>{label.clone()}</div>
                                <Show when=move || show_usage>
                                    {
                                        let usage_id = usage_id.clone();
                                        let set_usage = set_usage.clone();
                                        let current = usage_value(entry.usage);
                                        view! {
                                            <select
                                                class="field__input"
                                                on:change=move |ev| set_usage(usage_id.clone(), event_target_value(&ev))
                                            >
                                                <option value="" selected=current.is_empty()>"No usage"</option>
                                                {UsageTag::ALL
                                                    .into_iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <option value=tag.as_str() selected=current == tag.as_str()>
                                                                {tag.as_str()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        }
                                    }
                                </Show>
                                <div class="media-grid__item-actions">
                                    <button
                                        type="button"
                                        class="btn btn--link"
                                        on:click=move |_| on_select.run(vec![select_entry.clone()])
                                    >
                                        "Select"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn--link btn--danger"
                                        on:click=move |_| delete_entry(delete_id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                </For>
            </div>
            <Show when=move || !loading.get() && items.with(Vec::is_empty)>
                <p class="media-grid__empty">"No media yet"</p>
            </Show>
        </div>
    }
}

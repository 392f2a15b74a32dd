//! Media library: upload files and manage the shared file list.

use leptos::prelude::*;

use content::MediaEntry;

use crate::components::layout::AdminLayout;
use crate::components::media_grid::MediaGrid;
use crate::components::media_uploader::MediaUploader;
use crate::state::notice::NoticeLevel;
use crate::util::resource::PageContext;

#[component]
pub fn MediaLibraryPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <MediaLibrary />
        </AdminLayout>
    }
}

#[component]
fn MediaLibrary() -> impl IntoView {
    let ctx = PageContext::expect();
    let refresh = RwSignal::new(0_u32);
    let selected = RwSignal::new(Vec::<MediaEntry>::new());

    let on_uploaded = Callback::new(move |entries: Vec<MediaEntry>| {
        ctx.notify(NoticeLevel::Success, format!("{} file(s) uploaded", entries.len()));
        refresh.update(|n| *n = n.wrapping_add(1));
    });

    view! {
        <div class="media-page">
            <header class="page-header">
                <h1>"Media"</h1>
            </header>
            <MediaUploader on_uploaded=on_uploaded />
            <Show when=move || selected.with(|s| !s.is_empty())>
                <div class="media-page__selected">
                    <h2>"Selected"</h2>
                    {move || {
                        selected
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let url = entry.primary_url().unwrap_or_default().to_owned();
                                view! { <input class="field__input" type="text" readonly prop:value=url /> }
                            })
                            .collect_view()
                    }}
                    <button type="button" class="btn btn--small" on:click=move |_| selected.set(Vec::new())>
                        "Clear"
                    </button>
                </div>
            </Show>
            <MediaGrid on_select=Callback::new(move |entries| selected.set(entries)) refresh=refresh show_usage=true />
        </div>
    }
}

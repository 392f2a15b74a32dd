//! File input that uploads picked files one at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used standalone on the media library page and inside the media picker.
//! Uploads are scoped to an article when `article_id` is given. Every
//! uploaded file is also recorded in the local media store.

use leptos::prelude::*;

use content::MediaEntry;

use crate::state::upload::UploadQueue;
use crate::util::resource::PageContext;

#[component]
pub fn MediaUploader(
    #[prop(into, default = None)] article_id: Option<String>,
    on_uploaded: Callback<Vec<MediaEntry>>,
) -> impl IntoView {
    let queue = RwSignal::new(UploadQueue::default());
    let ctx = PageContext::expect();

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let files: Vec<web_sys::File> = input
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            input.set_value("");
            if !files.is_empty() && !queue.with_untracked(UploadQueue::is_busy) {
                upload_all(&ctx, queue, files, article_id.clone(), on_uploaded);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, &ctx, &article_id, on_uploaded);
    };

    view! {
        <div class="uploader">
            <label class="field">
                <span class="field__label">"Upload media"</span>
                <input
                    type="file"
                    multiple
                    accept="image/*,video/*"
                    disabled=move || queue.with(UploadQueue::is_busy)
                    on:change=on_files
                />
            </label>
            {move || queue.with(|q| q.progress_label().map(|label| view! { <p class="uploader__progress">{label}</p> }))}
            {move || queue.with(|q| q.failure().map(|message| view! { <p class="uploader__error">{message.to_owned()}</p> }))}
            <ul class="uploader__queue">
                {move || {
                    queue
                        .get()
                        .items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="uploader__item">
                                    <span>{item.name}</span>
                                    <span class="uploader__status">{item.status.label().to_owned()}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn upload_all(
    ctx: &PageContext,
    queue: RwSignal<UploadQueue>,
    files: Vec<web_sys::File>,
    article_id: Option<String>,
    on_uploaded: Callback<Vec<MediaEntry>>,
) {
    use crate::net::api;
    use crate::net::types::UploadInfo;
    use crate::state::upload::NO_FILE_INFO;
    use crate::util::media_store;

    let cfg = ctx.cfg.clone();
    queue.set(UploadQueue::new(files.iter().map(web_sys::File::name)));

    leptos::task::spawn_local(async move {
        let mut uploaded = Vec::new();
        for (index, file) in files.iter().enumerate() {
            if queue.with_untracked(UploadQueue::next) != Some(index) {
                break;
            }
            queue.update(|q| q.start(index));
            match api::upload_file(&cfg, article_id.as_deref(), file).await {
                Ok(body) => match UploadInfo::from_response(&body) {
                    Some(info) => {
                        let entry = info.into_entry(&file.name(), &file.type_());
                        media_store::add(entry.clone());
                        uploaded.push(entry);
                        queue.update(|q| q.complete(index));
                    }
                    None => queue.update(|q| q.fail(index, NO_FILE_INFO)),
                },
                Err(e) => {
                    leptos::logging::warn!("upload {} failed: {e}", file.name());
                    queue.update(|q| q.fail(index, e.to_string()));
                }
            }
        }
        if !uploaded.is_empty() {
            on_uploaded.run(uploaded);
        }
    });
}

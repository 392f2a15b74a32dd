//! Modal media picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editors open the picker for one `MediaTarget` through
//! `MediaPickerState::open`. The modal offers an uploader and the media
//! grid; the first confirmed selection is resolved against the open target
//! and handed to `on_pick`, after which the picker is closed.

use leptos::prelude::*;

use content::{MediaEntry, MediaPick, MediaTarget};

use crate::components::media_grid::MediaGrid;
use crate::components::media_uploader::MediaUploader;
use crate::state::media::MediaPickerState;

#[component]
pub fn MediaPicker(
    picker: RwSignal<MediaPickerState>,
    on_pick: Callback<(MediaTarget, MediaPick)>,
    #[prop(into, default = None)] article_id: Option<String>,
) -> impl IntoView {
    let refresh = RwSignal::new(0_u32);

    let on_select = Callback::new(move |entries: Vec<MediaEntry>| {
        if let Some(picked) = picker.try_update(|p| p.select(&entries)).flatten() {
            on_pick.run(picked);
        }
    });
    let on_uploaded = Callback::new(move |_: Vec<MediaEntry>| refresh.update(|n| *n += 1));
    let close = move || picker.update(MediaPickerState::close);

    view! {
        <Show when=move || picker.with(MediaPickerState::is_open)>
            {
                let article_id = article_id.clone();
                view! {
                    <div class="dialog-backdrop" on:click=move |_| close()>
                        <div
                            class="dialog dialog--media"
                            tabindex="0"
                            on:click=move |ev| ev.stop_propagation()
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    ev.prevent_default();
                                    close();
                                }
                            }
                        >
                            <header class="dialog__header">
                                <h2>"Media library"</h2>
                                <button type="button" class="btn" on:click=move |_| close()>
                                    "Close"
                                </button>
                            </header>
                            <MediaUploader article_id=article_id on_uploaded=on_uploaded />
                            <MediaGrid on_select=on_select refresh=refresh />
                        </div>
                    </div>
                }
            }
        </Show>
    }
}

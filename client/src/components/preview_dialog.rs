//! Modal showing a profile preview for one list row.

use leptos::prelude::*;

use content::preview::ProfilePreview;

use crate::components::profile_preview::ProfilePreviewPane;
use crate::net::types::Resource;
use crate::state::preview::PreviewState;

/// `plan` builds the card once the record has arrived. Escape and backdrop
/// clicks close the dialog.
#[component]
pub fn PreviewDialog<T, P>(preview: RwSignal<PreviewState<T>>, plan: P) -> impl IntoView
where
    T: Resource,
    P: Fn(&T) -> ProfilePreview + Copy + Send + Sync + 'static,
{
    let close = move || preview.update(PreviewState::close);
    let singular = T::COLLECTION.singular().to_lowercase();

    let body = move || {
        preview.with(|p| {
            if let Some(record) = &p.record {
                let card = plan(record);
                view! { <ProfilePreviewPane plan=Signal::derive(move || card.clone()) /> }.into_any()
            } else if let Some(message) = &p.error {
                view! { <p class="dialog__error">{format!("Could not load this {singular}: {message}")}</p> }.into_any()
            } else {
                view! { <p class="dialog__status">"Loading..."</p> }.into_any()
            }
        })
    };

    view! {
        <Show when=move || preview.with(PreviewState::is_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog dialog--preview"
                    role="dialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                >
                    <div class="dialog__header">
                        <h2>"Preview"</h2>
                        <button type="button" class="btn" on:click=move |_| close()>
                            "Close"
                        </button>
                    </div>
                    {body.clone()}
                </div>
            </div>
        </Show>
    }
}

//! Placeholder shown while an editor's record is not ready.

use leptos::prelude::*;

use crate::net::types::Resource;
use crate::state::editor::EditorState;

/// "Loading..." until the fetch settles; the load error and a way back when
/// it failed. The form is never shown over a record that did not load.
#[component]
pub fn EditorStatus<T: Resource>(editor: RwSignal<EditorState<T>>) -> impl IntoView {
    move || match editor.with(|s| s.load_error.clone()) {
        Some(message) => view! {
            <div class="editor-page__load-error">
                <p class="editor-form__error">{format!("Could not load this {}: {message}", T::COLLECTION.singular().to_lowercase())}</p>
                <a class="btn" href=T::COLLECTION.route()>
                    "Back to list"
                </a>
            </div>
        }
        .into_any(),
        None => view! { <p class="editor-page__loading">"Loading..."</p> }.into_any(),
    }
}

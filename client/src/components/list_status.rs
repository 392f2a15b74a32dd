//! Loading, error and empty states shared by the list pages.

use leptos::prelude::*;

use crate::state::lists::ListState;

/// Renders whichever of loading / error / empty applies to `list`.
#[component]
pub fn ListStatus<T>(list: RwSignal<ListState<T>>, #[prop(into)] empty_message: String) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    view! {
        <Show when=move || list.with(|l| l.loading)>
            <p class="list__loading">"Loading..."</p>
        </Show>
        {move || list.with(|l| l.error.clone()).map(|e| view! { <p class="list__error">{e}</p> })}
        <Show when=move || list.with(ListState::is_empty)>
            <p class="list__empty">{empty_message.clone()}</p>
        </Show>
    }
}

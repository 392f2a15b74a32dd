//! Single-image slot with library picker and clear.

use leptos::prelude::*;

#[component]
pub fn ImageField(
    #[prop(into)] label: String,
    /// Image currently resolved for the record.
    #[prop(into)]
    url: Signal<Option<String>>,
    on_choose: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="field image-field">
            <span class="field__label">{label}</span>
            {move || {
                url.get()
                    .map_or_else(
                        || view! { <div class="image-field__empty">"No image"</div> }.into_any(),
                        |src| view! { <img class="image-field__thumb" src=src alt="" /> }.into_any(),
                    )
            }}
            <div class="image-field__actions">
                <button type="button" class="btn" on:click=move |_| on_choose.run(())>
                    "Choose from library"
                </button>
                <Show when=move || url.with(Option::is_some)>
                    <button type="button" class="btn btn--danger" on:click=move |_| on_clear.run(())>
                        "Remove"
                    </button>
                </Show>
            </div>
        </div>
    }
}

//! Editable list of `{label, url}` links for profile records.

use leptos::prelude::*;

use content::profile::{add_link, remove_link, update_link};
use content::{Link, LinkField};

/// Rows are keyed by index and read their values reactively, so typing in
/// one row does not rebuild the inputs.
#[component]
pub fn LinksEditor(#[prop(into)] links: Signal<Vec<Link>>, on_change: Callback<Vec<Link>>) -> impl IntoView {
    let field_value = move |index: usize, field: LinkField| {
        links.with(|all| {
            all.get(index)
                .map(|link| match field {
                    LinkField::Label => link.label.clone(),
                    LinkField::Url => link.url.clone(),
                })
                .unwrap_or_default()
        })
    };
    let edit = move |index: usize, field: LinkField, value: String| {
        on_change.run(update_link(&links.get_untracked(), index, field, &value));
    };

    view! {
        <fieldset class="links-editor">
            <legend>"Links"</legend>
            <For each=move || 0..links.with(Vec::len) key=|index| *index let:index>
                <div class="links-editor__row">
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Label"
                        prop:value=move || field_value(index, LinkField::Label)
                        on:input=move |ev| edit(index, LinkField::Label, event_target_value(&ev))
                    />
                    <input
                        class="field__input"
                        type="url"
                        placeholder="https://"
                        prop:value=move || field_value(index, LinkField::Url)
                        on:input=move |ev| edit(index, LinkField::Url, event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="btn btn--danger"
                        on:click=move |_| on_change.run(remove_link(&links.get_untracked(), index))
                    >
                        "Remove"
                    </button>
                </div>
            </For>
            <button type="button" class="btn" on:click=move |_| on_change.run(add_link(&links.get_untracked()))>
                "+ Add link"
            </button>
        </fieldset>
    }
}

//! Comitard titles ("titre"): list sorted by `ordre` and a small editor.

use leptos::prelude::*;

use content::Title;
use content::records::titles_by_ordre;

use crate::components::collection_table::CollectionTable;
use crate::components::editor_status::EditorStatus;
use crate::components::form_fields::{NumberField, TextAreaField, TextField, text_signal};
use crate::components::layout::AdminLayout;
use crate::net::types::Collection;
use crate::state::editor::EditorState;
use crate::util::resource::{PageContext, submit_record, use_collection_list, use_record_editor};

#[component]
pub fn TitlesPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <TitleList />
        </AdminLayout>
    }
}

#[component]
fn TitleList() -> impl IntoView {
    let list = use_collection_list::<Title>();
    // Rows follow `ordre`, unordered titles last.
    Effect::new(move || {
        let sorted = list.with(|s| (!s.loading).then(|| titles_by_ordre(&s.items)));
        if let Some(sorted) = sorted
            && list.with_untracked(|s| s.items != sorted)
        {
            list.update(|s| s.items = sorted);
        }
    });

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Titles"</h1>
                <a class="btn btn--primary" href=Collection::Titre.new_route()>
                    "+ New Title"
                </a>
            </header>
            <CollectionTable
                list=list
                columns=vec!["Order", "Name", "Description"]
                row=|t: &Title| {
                    view! {
                        <td>{t.ordre.map_or_else(|| "-".to_owned(), |o| o.to_string())}</td>
                        <td class="table__primary">{t.name.clone()}</td>
                        <td>{t.description.clone()}</td>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn TitleEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <TitleEditor />
        </AdminLayout>
    }
}

#[component]
fn TitleEditor() -> impl IntoView {
    let ctx = PageContext::expect();
    let editor = use_record_editor::<Title>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = editor.with_untracked(|s| s.record.clone());
        submit_record(&ctx, editor, record);
    };

    view! {
        <div class="editor-page">
            <header class="page-header">
                <h1>{move || if editor.with(EditorState::is_update) { "Edit Title" } else { "Create Title" }}</h1>
                <a class="btn" href=Collection::Titre.route()>
                    "Back to list"
                </a>
            </header>
            <Show
                when=move || editor.with(|s| s.ready)
                fallback=move || view! { <EditorStatus editor=editor /> }
            >
                <form class="editor-form" on:submit=on_submit.clone()>
                    <TextField
                        label="Name"
                        value=text_signal(editor, |t| Some(t.name.as_str()))
                        on_input=Callback::new(move |value: String| editor.update(|s| s.record.name = value))
                        required=true
                    />
                    <TextAreaField
                        label="Description"
                        value=text_signal(editor, |t| Some(t.description.as_str()))
                        on_input=Callback::new(move |value: String| editor.update(|s| s.record.description = value))
                    />
                    <NumberField
                        label="Order"
                        value=Signal::derive(move || editor.with(|s| s.record.ordre))
                        on_input=Callback::new(move |ordre| editor.update(|s| s.record.ordre = ordre))
                    />
                    {move || editor.with(|s| s.error.clone()).map(|e| view! { <p class="editor-form__error">{e}</p> })}
                    <div class="editor-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || editor.with(|s| s.saving)>
                            {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save Title" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

//! Comitard list and profile editor pages.
//!
//! The editor loads the title collection alongside the record so the titre
//! select and the preview heading can resolve `titre_id` to a name.

#[cfg(test)]
#[path = "comitards_test.rs"]
mod comitards_test;

use leptos::prelude::*;

use content::preview::{avatar, comitard_preview};
use content::records::titles_by_ordre;
use content::{Comitard, ImageSlot, Link, MediaPick, MediaTarget, Title};

use crate::components::collection_table::CollectionTable;
use crate::components::editor_status::EditorStatus;
use crate::components::form_fields::{CheckboxField, NumberField, SelectField, TextField, text_signal};
use crate::components::image_field::ImageField;
use crate::components::layout::AdminLayout;
use crate::components::links_editor::LinksEditor;
use crate::components::media_picker::MediaPicker;
use crate::components::preview_dialog::PreviewDialog;
use crate::components::profile_preview::{ProfilePreviewPane, avatar_view};
use crate::components::rich_text::RichTextEditor;
use crate::net::types::Collection;
use crate::state::editor::EditorState;
use crate::state::media::MediaPickerState;
use crate::state::preview::PreviewState;
use crate::util::resource::{PageContext, open_preview, submit_record, use_collection_list, use_record_editor};

/// Select options for the titre field, in `ordre` order. Titles without an
/// id cannot be referenced and are left out.
pub fn title_options(titles: &[Title]) -> Vec<(String, String)> {
    titles_by_ordre(titles)
        .into_iter()
        .filter_map(|t| {
            let id = t.id?;
            let label = if t.name.trim().is_empty() { format!("ID Titre: {id}") } else { t.name };
            Some((id, label))
        })
        .collect()
}

/// Name and order cells for the list, from the joined titre.
pub fn titre_cells(comitard: &Comitard) -> (String, String) {
    comitard.titre.as_ref().map_or_else(
        || ("-".to_owned(), "-".to_owned()),
        |t| {
            let name = if t.name.trim().is_empty() { "-".to_owned() } else { t.name.clone() };
            (name, t.ordre.map_or_else(|| "-".to_owned(), |o| o.to_string()))
        },
    )
}

#[component]
pub fn ComitardsPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <ComitardList />
        </AdminLayout>
    }
}

#[component]
fn ComitardList() -> impl IntoView {
    let ctx = PageContext::expect();
    let list = use_collection_list::<Comitard>();
    // Titles resolve `titre_id` in the preview heading.
    let titles = use_collection_list::<Title>();
    let preview = RwSignal::new(PreviewState::<Comitard>::default());
    let on_preview = Callback::new(move |id: String| open_preview(&ctx, preview, id));

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Comitards"</h1>
                <a class="btn btn--primary" href=Collection::Comitard.new_route()>
                    "+ New Comitard"
                </a>
            </header>
            <CollectionTable
                list=list
                columns=vec!["Image", "Name", "Titre", "Ordre"]
                row=|c: &Comitard| {
                    let (titre, ordre) = titre_cells(c);
                    view! {
                        <td>{avatar_view(avatar(c.resolved_image(), c.initials()), "table__avatar")}</td>
                        <td class="table__primary">{c.name.clone()}</td>
                        <td>{titre}</td>
                        <td>{ordre}</td>
                    }
                }
                on_preview=on_preview
            />
            <PreviewDialog
                preview=preview
                plan=move |c: &Comitard| titles.with_untracked(|t| comitard_preview(c, &t.items))
            />
        </div>
    }
}

#[component]
pub fn ComitardEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <ComitardEditor />
        </AdminLayout>
    }
}

#[component]
fn ComitardEditor() -> impl IntoView {
    let ctx = PageContext::expect();
    let editor = use_record_editor::<Comitard>();
    let titles = use_collection_list::<Title>();
    let picker = RwSignal::new(MediaPickerState::default());

    let edit = move |f: &dyn Fn(&mut Comitard)| editor.update(|s| f(&mut s.record));
    let on_pick = Callback::new(move |(target, pick): (MediaTarget, MediaPick)| {
        if target == MediaTarget::ProfileImage {
            editor.update(|s| s.record = s.record.with_media(&pick));
        }
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = editor.with_untracked(|s| s.record.clone());
        submit_record(&ctx, editor, record);
    };

    let plan = Signal::derive(move || titles.with(|t| editor.with(|s| comitard_preview(&s.record, &t.items))));
    let titre_options = Signal::derive(move || titles.with(|t| title_options(&t.items)));

    view! {
        <div class="editor-page">
            <header class="page-header">
                <h1>{move || if editor.with(EditorState::is_update) { "Edit Comitard" } else { "Create Comitard" }}</h1>
                <a class="btn" href=Collection::Comitard.route()>
                    "Back to list"
                </a>
            </header>
            <Show
                when=move || editor.with(|s| s.ready)
                fallback=move || view! { <EditorStatus editor=editor /> }
            >
                <div class="editor-page__columns">
                    <form class="editor-form" on:submit=on_submit.clone()>
                        <TextField
                            label="Name"
                            value=text_signal(editor, |c| Some(c.name.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|c| c.name.clone_from(&value)))
                            required=true
                        />
                        {move || {
                            view! {
                                <SelectField
                                    label="Titre"
                                    value=text_signal(editor, |c| c.titre_id.as_deref())
                                    options=titre_options.get()
                                    placeholder="No title"
                                    on_change=Callback::new(move |value: String| {
                                        edit(&|c| c.titre_id = Some(value.clone()).filter(|id| !id.is_empty()));
                                    })
                                />
                            }
                        }}
                        <CheckboxField
                            label="Featured"
                            checked=Signal::derive(move || editor.with(|s| s.record.featured))
                            on_change=Callback::new(move |featured| edit(&|c| c.featured = featured))
                        />
                        <NumberField
                            label="Order"
                            value=Signal::derive(move || editor.with(|s| s.record.order))
                            on_input=Callback::new(move |order| edit(&|c| c.order = order))
                        />
                        <ImageField
                            label="Photo"
                            url=Signal::derive(move || editor.with(|s| s.record.resolved_image().map(str::to_owned)))
                            on_choose=Callback::new(move |()| picker.update(|p| p.open(MediaTarget::ProfileImage)))
                            on_clear=Callback::new(move |()| {
                                edit(&|c| {
                                    c.set_image(None, None);
                                    c.image = None;
                                });
                            })
                        />
                        <div class="field">
                            <span class="field__label">"CV"</span>
                            <RichTextEditor
                                initial=editor.with_untracked(|s| s.record.cv.clone())
                                on_change=Callback::new(move |html: String| edit(&|c| c.cv.clone_from(&html)))
                            />
                        </div>
                        <LinksEditor
                            links=Signal::derive(move || editor.with(|s| s.record.links.clone()))
                            on_change=Callback::new(move |links: Vec<Link>| edit(&|c| c.links.clone_from(&links)))
                        />
                        {move || editor.with(|s| s.error.clone()).map(|e| view! { <p class="editor-form__error">{e}</p> })}
                        <div class="editor-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || editor.with(|s| s.saving)>
                                {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save Comitard" }}
                            </button>
                        </div>
                    </form>
                    <ProfilePreviewPane plan=plan />
                </div>
            </Show>
            <MediaPicker picker=picker on_pick=on_pick />
        </div>
    }
}

//! Partner list and editor pages.

use leptos::prelude::*;

use content::{ImageSlot, MediaPick, MediaTarget, Partner};

use crate::components::collection_table::CollectionTable;
use crate::components::editor_status::EditorStatus;
use crate::components::form_fields::{TextField, text_signal};
use crate::components::image_field::ImageField;
use crate::components::layout::AdminLayout;
use crate::components::media_picker::MediaPicker;
use crate::net::types::Collection;
use crate::state::editor::EditorState;
use crate::state::media::MediaPickerState;
use crate::util::resource::{PageContext, submit_record, use_collection_list, use_record_editor};

#[component]
pub fn PartnersPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <PartnerList />
        </AdminLayout>
    }
}

#[component]
fn PartnerList() -> impl IntoView {
    let list = use_collection_list::<Partner>();

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Partners"</h1>
                <a class="btn btn--primary" href=Collection::Partner.new_route()>
                    "+ New Partner"
                </a>
            </header>
            <CollectionTable
                list=list
                columns=vec!["Logo", "Title"]
                row=|p: &Partner| {
                    let logo = p.resolved_image().map(str::to_owned);
                    view! {
                        <td>
                            {logo.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                        </td>
                        <td class="table__primary">{p.title.clone()}</td>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn PartnerEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <PartnerEditor />
        </AdminLayout>
    }
}

#[component]
fn PartnerEditor() -> impl IntoView {
    let ctx = PageContext::expect();
    let editor = use_record_editor::<Partner>();
    let picker = RwSignal::new(MediaPickerState::default());

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
    let image = Signal::derive(move || editor.with(|s| s.record.resolved_image().map(str::to_owned)));

    view! {
        <div class="editor-page">
            <header class="page-header">
                <h1>{move || if editor.with(EditorState::is_update) { "Edit Partner" } else { "Create Partner" }}</h1>
                <a class="btn" href=Collection::Partner.route()>
                    "Back to list"
                </a>
            </header>
            <Show
                when=move || editor.with(|s| s.ready)
                fallback=move || view! { <EditorStatus editor=editor /> }
            >
                <form class="editor-form" on:submit=on_submit.clone()>
                    <TextField
                        label="Title"
                        value=text_signal(editor, |p| Some(p.title.as_str()))
                        on_input=Callback::new(move |value: String| editor.update(|s| s.record.title = value))
                        required=true
                    />
                    <ImageField
                        label="Logo"
                        url=image
                        on_choose=Callback::new(move |()| picker.update(|p| p.open(MediaTarget::ProfileImage)))
                        on_clear=Callback::new(move |()| {
                            editor.update(|s| {
                                s.record.set_image(None, None);
                                s.record.image = None;
                            });
                        })
                    />
                    {move || editor.with(|s| s.error.clone()).map(|e| view! { <p class="editor-form__error">{e}</p> })}
                    <div class="editor-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || editor.with(|s| s.saving)>
                            {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save Partner" }}
                        </button>
                    </div>
                </form>
            </Show>
            <MediaPicker picker=picker on_pick=on_pick />
        </div>
    }
}

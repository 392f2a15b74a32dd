//! Volunteer list and profile editor pages.

use leptos::prelude::*;

use content::preview::{avatar, volunteer_preview};
use content::profile::VOLUNTEER_CATEGORIES;
use content::{ImageSlot, Link, MediaPick, MediaTarget, Volunteer, VolunteerStatus};

use crate::components::collection_table::CollectionTable;
use crate::components::editor_status::EditorStatus;
use crate::components::form_fields::{
    CheckboxField, NumberField, SelectField, TextAreaField, TextField, options, text_signal,
};
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

#[component]
pub fn VolunteersPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <VolunteerList />
        </AdminLayout>
    }
}

#[component]
fn VolunteerList() -> impl IntoView {
    let ctx = PageContext::expect();
    let list = use_collection_list::<Volunteer>();
    let preview = RwSignal::new(PreviewState::<Volunteer>::default());
    let on_preview = Callback::new(move |id: String| open_preview(&ctx, preview, id));

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Volunteers"</h1>
                <a class="btn btn--primary" href=Collection::Volunteers.new_route()>
                    "+ New Volunteer"
                </a>
            </header>
            <CollectionTable
                list=list
                columns=vec!["Image", "Name", "Role", "Category", "Status"]
                row=|v: &Volunteer| {
                    view! {
                        <td>{avatar_view(avatar(v.resolved_image(), v.initials()), "table__avatar")}</td>
                        <td class="table__primary">{v.name.clone()}</td>
                        <td>{if v.role.trim().is_empty() { "-".to_owned() } else { v.role.clone() }}</td>
                        <td>{v.category.clone().unwrap_or_else(|| "-".to_owned())}</td>
                        <td>
                            <span class=format!("badge badge--{}", v.status.as_str())>{v.status.as_str()}</span>
                        </td>
                    }
                }
                on_preview=on_preview
            />
            <PreviewDialog preview=preview plan=volunteer_preview />
        </div>
    }
}

#[component]
pub fn VolunteerEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <VolunteerEditor />
        </AdminLayout>
    }
}

#[component]
fn VolunteerEditor() -> impl IntoView {
    let ctx = PageContext::expect();
    let editor = use_record_editor::<Volunteer>();
    let picker = RwSignal::new(MediaPickerState::default());

    let edit = move |f: &dyn Fn(&mut Volunteer)| editor.update(|s| f(&mut s.record));
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

    let heading = move || {
        if editor.with(EditorState::is_update) { "Edit Volunteer" } else { "Create Volunteer" }
    };
    let plan = Signal::derive(move || editor.with(|s| volunteer_preview(&s.record)));

    view! {
        <div class="editor-page">
            <header class="page-header">
                <h1>{heading}</h1>
                <a class="btn" href=Collection::Volunteers.route()>
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
                            value=text_signal(editor, |v| Some(v.name.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|v| v.name.clone_from(&value)))
                            required=true
                        />
                        <TextField
                            label="Role"
                            value=text_signal(editor, |v| Some(v.role.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|v| v.role.clone_from(&value)))
                        />
                        <SelectField
                            label="Category"
                            value=text_signal(editor, |v| v.category.as_deref())
                            options=options(VOLUNTEER_CATEGORIES)
                            placeholder="Select a category"
                            on_change=Callback::new(move |value: String| {
                                edit(&|v| v.category = Some(value.clone()).filter(|c| !c.is_empty()));
                            })
                        />
                        <SelectField
                            label="Status"
                            value=Signal::derive(move || editor.with(|s| s.record.status.as_str().to_owned()))
                            options=options(VolunteerStatus::ALL.map(VolunteerStatus::as_str))
                            on_change=Callback::new(move |value: String| {
                                edit(&|v| v.status = VolunteerStatus::parse_lenient(&value));
                            })
                        />
                        <CheckboxField
                            label="Featured"
                            checked=Signal::derive(move || editor.with(|s| s.record.featured))
                            on_change=Callback::new(move |featured| edit(&|v| v.featured = featured))
                        />
                        <NumberField
                            label="Order"
                            value=Signal::derive(move || editor.with(|s| s.record.order))
                            on_input=Callback::new(move |order| edit(&|v| v.order = order))
                        />
                        <ImageField
                            label="Photo"
                            url=Signal::derive(move || editor.with(|s| s.record.resolved_image().map(str::to_owned)))
                            on_choose=Callback::new(move |()| picker.update(|p| p.open(MediaTarget::ProfileImage)))
                            on_clear=Callback::new(move |()| {
                                edit(&|v| {
                                    v.set_image(None, None);
                                    v.image = None;
                                });
                            })
                        />
                        <div class="field">
                            <span class="field__label">"Bio"</span>
                            <RichTextEditor
                                initial=editor.with_untracked(|s| s.record.bio.clone())
                                on_change=Callback::new(move |html: String| edit(&|v| v.bio.clone_from(&html)))
                            />
                        </div>
                        <TextAreaField
                            label="Testimonial"
                            value=text_signal(editor, |v| Some(v.testimonial.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|v| v.testimonial.clone_from(&value)))
                        />
                        <LinksEditor
                            links=Signal::derive(move || editor.with(|s| s.record.links.clone()))
                            on_change=Callback::new(move |links: Vec<Link>| edit(&|v| v.links.clone_from(&links)))
                        />
                        {move || editor.with(|s| s.error.clone()).map(|e| view! { <p class="editor-form__error">{e}</p> })}
                        <div class="editor-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || editor.with(|s| s.saving)>
                                {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save Volunteer" }}
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

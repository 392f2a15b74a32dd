//! Homepage carousel slides: list and editor with a slide preview.

use leptos::prelude::*;

use content::{CarouselSlide, ImageSlot, MediaPick, MediaTarget};

use crate::components::collection_table::CollectionTable;
use crate::components::editor_status::EditorStatus;
use crate::components::form_fields::{TextAreaField, TextField, text_signal};
use crate::components::image_field::ImageField;
use crate::components::layout::AdminLayout;
use crate::components::media_picker::MediaPicker;
use crate::net::types::Collection;
use crate::state::editor::EditorState;
use crate::state::media::MediaPickerState;
use crate::util::resource::{PageContext, submit_record, use_collection_list, use_record_editor};

#[component]
pub fn CarouselPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <SlideList />
        </AdminLayout>
    }
}

#[component]
fn SlideList() -> impl IntoView {
    let list = use_collection_list::<CarouselSlide>();

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Carousel"</h1>
                <a class="btn btn--primary" href=Collection::Carousel.new_route()>
                    "+ New Slide"
                </a>
            </header>
            <CollectionTable
                list=list
                columns=vec!["Image", "Title", "Subtitle"]
                row=|slide: &CarouselSlide| {
                    let image = slide.resolved_image().map(str::to_owned);
                    view! {
                        <td>
                            {image.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                        </td>
                        <td class="table__primary">{slide.title.clone()}</td>
                        <td>{slide.subtitle.clone()}</td>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn CarouselEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <SlideEditor />
        </AdminLayout>
    }
}

#[component]
fn SlideEditor() -> impl IntoView {
    let ctx = PageContext::expect();
    let editor = use_record_editor::<CarouselSlide>();
    let picker = RwSignal::new(MediaPickerState::default());

    let edit = move |f: &dyn Fn(&mut CarouselSlide)| editor.update(|s| f(&mut s.record));
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
                <h1>{move || if editor.with(EditorState::is_update) { "Edit Slide" } else { "Create Slide" }}</h1>
                <a class="btn" href=Collection::Carousel.route()>
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
                            label="Title"
                            value=text_signal(editor, |c| Some(c.title.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|c| c.title.clone_from(&value)))
                            required=true
                        />
                        <TextField
                            label="Subtitle"
                            value=text_signal(editor, |c| Some(c.subtitle.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|c| c.subtitle.clone_from(&value)))
                        />
                        <TextAreaField
                            label="Excerpt"
                            value=text_signal(editor, |c| Some(c.excerpt.as_str()))
                            on_input=Callback::new(move |value: String| edit(&|c| c.excerpt.clone_from(&value)))
                        />
                        <ImageField
                            label="Image"
                            url=image
                            on_choose=Callback::new(move |()| picker.update(|p| p.open(MediaTarget::ProfileImage)))
                            on_clear=Callback::new(move |()| {
                                edit(&|c| {
                                    c.set_image(None, None);
                                    c.image = None;
                                });
                            })
                        />
                        {move || editor.with(|s| s.error.clone()).map(|e| view! { <p class="editor-form__error">{e}</p> })}
                        <div class="editor-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || editor.with(|s| s.saving)>
                                {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save Slide" }}
                            </button>
                        </div>
                    </form>
                    <aside class="preview preview--slide">
                        <div
                            class="slide"
                            style=move || {
                                image
                                    .get()
                                    .map(|src| format!("background-image: url('{src}')"))
                                    .unwrap_or_default()
                            }
                        >
                            <div class="slide__caption">
                                <h2>{move || editor.with(|s| s.record.title.clone())}</h2>
                                <h3>{move || editor.with(|s| s.record.subtitle.clone())}</h3>
                                <p>{move || editor.with(|s| s.record.excerpt.clone())}</p>
                            </div>
                        </div>
                    </aside>
                </div>
            </Show>
            <MediaPicker picker=picker on_pick=on_pick />
        </div>
    }
}

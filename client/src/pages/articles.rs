//! Article list and block-document editor pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor keeps the whole article in one `EditorState<Document>`. Form
//! fields, the section editor and the media picker each replace it with the
//! result of one `Document` operation; the preview pane re-renders from the
//! same signal. Section and block edits attribute the article to the
//! signed-in user; saving derives the slug and issues one create or update.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use leptos::prelude::*;

use content::document::ARTICLE_CATEGORIES;
use content::{Document, DocumentField, MediaPick, MediaTarget, Status};

use crate::components::article_preview::ArticlePreviewPane;
use crate::components::collection_table::CollectionTable;
use crate::components::editor_status::EditorStatus;
use crate::components::form_fields::{
    CheckboxField, SelectField, TextAreaField, TextField, format_optional_number, options, parse_optional_number,
    text_signal,
};
use crate::components::image_field::ImageField;
use crate::components::layout::AdminLayout;
use crate::components::media_picker::MediaPicker;
use crate::components::section_editor::SectionEditor;
use crate::net::types::Collection;
use crate::state::auth::AuthState;
use crate::state::editor::EditorState;
use crate::state::media::MediaPickerState;
use crate::util::resource::{PageContext, submit_record, use_collection_list, use_record_editor};

/// Result of a section or block edit: `author_name` follows the user who
/// touched the content. Without a signed-in name the stored author stays.
pub fn stamp_section_edit(doc: &Document, author: Option<&str>) -> Document {
    doc.with_author(author.unwrap_or_default())
}

/// Body sent on save: slug derived from the title. Authorship is left as
/// the last content edit set it.
pub fn prepare_for_save(doc: &Document) -> Document {
    doc.with_derived_slug()
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <ArticleList />
        </AdminLayout>
    }
}

#[component]
fn ArticleList() -> impl IntoView {
    let list = use_collection_list::<Document>();

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Articles"</h1>
                <a class="btn btn--primary" href=Collection::Articles.new_route()>
                    "+ New Article"
                </a>
            </header>
            <CollectionTable
                list=list
                columns=vec!["Title", "Category", "Status"]
                row=|doc: &Document| {
                    view! {
                        <td class="table__primary">{doc.title.clone()}</td>
                        <td>{doc.category.clone().unwrap_or_else(|| "-".to_owned())}</td>
                        <td>
                            <span class=format!("badge badge--{}", doc.status.as_str())>{doc.status.as_str()}</span>
                        </td>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn ArticleEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <ArticleEditor />
        </AdminLayout>
    }
}

#[component]
fn ArticleEditor() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = PageContext::expect();
    let editor = use_record_editor::<Document>();
    let picker = RwSignal::new(MediaPickerState::default());
    let tag_input = RwSignal::new(String::new());

    let author = move || auth.with_untracked(|a| a.author_name().map(str::to_owned));
    let document = Signal::derive(move || editor.with(|s| s.record.clone()));
    let set_document = Callback::new(move |doc: Document| {
        let author = author();
        editor.update(|s| s.record = stamp_section_edit(&doc, author.as_deref()));
    });
    let edit = move |f: &dyn Fn(&Document) -> Document| editor.update(|s| s.record = f(&s.record));
    let set_field = move |field: DocumentField| edit(&|doc| doc.set_field(field.clone()));

    let on_pick = Callback::new(move |(target, pick): (MediaTarget, MediaPick)| {
        let next = editor.with_untracked(|s| s.record.apply_media(&target, &pick));
        if matches!(target, MediaTarget::Block { .. }) {
            set_document.run(next);
        } else {
            editor.update(|s| s.record = next);
        }
    });

    let add_tag = move || {
        let tag = tag_input.get_untracked();
        edit(&|doc| doc.add_tag(&tag));
        tag_input.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = editor.with_untracked(|s| prepare_for_save(&s.record));
        submit_record(&ctx, editor, record);
    };

    let heading = move || {
        if editor.with(EditorState::is_update) { "Edit Article" } else { "Create Article" }
    };
    let article_id = editor.with_untracked(|s| s.mode.id().map(str::to_owned));

    view! {
        <div class="editor-page">
            <header class="page-header">
                <h1>{heading}</h1>
                <a class="btn" href=Collection::Articles.route()>
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
                            value=text_signal(editor, |d| Some(d.title.as_str()))
                            on_input=Callback::new(move |v| set_field(DocumentField::Title(v)))
                            placeholder="Article Title"
                            required=true
                        />
                        <TextField
                            label="Subtitle"
                            value=text_signal(editor, |d| d.subtitle.as_deref())
                            on_input=Callback::new(move |v| set_field(DocumentField::Subtitle(v)))
                            placeholder="Optional Subtitle"
                        />
                        <TextAreaField
                            label="Excerpt"
                            value=text_signal(editor, |d| d.excerpt.as_deref())
                            on_input=Callback::new(move |v| set_field(DocumentField::Excerpt(v)))
                        />
                        <SelectField
                            label="Category"
                            value=text_signal(editor, |d| d.category.as_deref())
                            options=options(ARTICLE_CATEGORIES)
                            placeholder="Select a category"
                            on_change=Callback::new(move |v| set_field(DocumentField::Category(v)))
                        />
                        <SelectField
                            label="Status"
                            value=Signal::derive(move || editor.with(|s| s.record.status.as_str().to_owned()))
                            options=options(Status::ALL.map(Status::as_str))
                            on_change=Callback::new(move |v: String| {
                                if let Ok(status) = v.parse::<Status>() {
                                    set_field(DocumentField::Status(status));
                                }
                            })
                        />
                        <TextField
                            label="Language"
                            value=text_signal(editor, |d| Some(d.language.as_str()))
                            on_input=Callback::new(move |v| set_field(DocumentField::Language(v)))
                        />
                        <TextField
                            label="Reading time (min)"
                            value=Signal::derive(move || editor.with(|s| format_optional_number(s.record.reading_time)))
                            on_input=Callback::new(move |v: String| {
                                set_field(DocumentField::ReadingTime(parse_optional_number(&v)));
                            })
                        />
                        <TextField
                            label="Published at"
                            value=text_signal(editor, |d| d.published_at.as_deref())
                            on_input=Callback::new(move |v| set_field(DocumentField::PublishedAt(v)))
                            placeholder="YYYY-MM-DD"
                        />
                        <CheckboxField
                            label="Featured"
                            checked=Signal::derive(move || editor.with(|s| s.record.featured))
                            on_change=Callback::new(move |v| set_field(DocumentField::Featured(v)))
                        />
                        <TextField
                            label="Hero image URL"
                            value=text_signal(editor, |d| d.hero_url.as_deref())
                            on_input=Callback::new(move |v| set_field(DocumentField::HeroUrl(v)))
                            placeholder="https://..."
                        />
                        <ImageField
                            label="Hero image"
                            url=Signal::derive(move || editor.with(|s| s.record.hero_url.clone()))
                            on_choose=Callback::new(move |()| picker.update(|p| p.open(MediaTarget::Hero)))
                            on_clear=Callback::new(move |()| set_field(DocumentField::HeroUrl(String::new())))
                        />

                        <div class="field">
                            <span class="field__label">"Tags"</span>
                            <div class="tags">
                                {move || {
                                    editor
                                        .with(|s| s.record.tags.clone())
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, tag)| {
                                            view! {
                                                <span class="tag">
                                                    {tag}
                                                    <button
                                                        type="button"
                                                        class="tag__remove"
                                                        title="Remove tag"
                                                        on:click=move |_| edit(&|doc| doc.remove_tag(index))
                                                    >
                                                        "×"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Add a tag (press Enter)"
                                prop:value=move || tag_input.get()
                                on:input=move |ev| tag_input.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_tag();
                                    }
                                }
                            />
                        </div>

                        <h2 class="editor-form__heading">"Content"</h2>
                        <p class="editor-form__hint">
                            {move || {
                                editor.with(|s| {
                                    format!("{} section(s), {} block(s)", s.record.sections.len(), s.record.block_count())
                                })
                            }}
                        </p>
                        <SectionEditor document=document on_change=set_document picker=picker />

                        {move || editor.with(|s| s.error.clone()).map(|e| view! { <p class="editor-form__error">{e}</p> })}
                        <div class="editor-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || editor.with(|s| s.saving)>
                                {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save Article" }}
                            </button>
                        </div>
                    </form>
                    <ArticlePreviewPane document=document />
                </div>
            </Show>
            <MediaPicker picker=picker on_pick=on_pick article_id=article_id />
        </div>
    }
}

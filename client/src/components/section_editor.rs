//! Block-document editor: sections of typed blocks with drag reordering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The article editor page owns the `Document`. This component reads it
//! through a signal and reports every edit as a whole new document built by
//! one `content::document` operation, so the page's save path sees exactly
//! what the preview shows.
//!
//! DESIGN
//! ======
//! Sections and blocks are keyed by id and read their values reactively;
//! an edit in one block never rebuilds the others. Section reordering uses
//! HTML5 drag events on the section handle: `dragstart` records the dragged
//! id, `drop` on another section applies `Document::move_section`. Up/down
//! buttons cover the same move without a pointer. Folding a section only
//! hides its blocks with a class, so open rich-text editors keep their state.

use leptos::prelude::*;

use content::{BlockContent, BlockId, BlockKind, Document, MediaTarget, SectionId};

use crate::components::rich_text::RichTextEditor;
use crate::state::media::MediaPickerState;
use crate::state::sections::CollapsedSections;

fn block_ids(doc: &Document, section_id: &SectionId) -> Vec<BlockId> {
    doc.section(section_id).map(|s| s.blocks.iter().map(|b| b.id.clone()).collect()).unwrap_or_default()
}

#[component]
pub fn SectionEditor(
    #[prop(into)] document: Signal<Document>,
    on_change: Callback<Document>,
    picker: RwSignal<MediaPickerState>,
) -> impl IntoView {
    let dragged = RwSignal::new(None::<SectionId>);
    let drag_over = RwSignal::new(None::<SectionId>);
    let collapsed = RwSignal::new(CollapsedSections::default());

    let add_section = move |_| on_change.run(document.with_untracked(Document::add_section));

    view! {
        <div class="sections">
            <For each=move || document.with(Document::section_ids) key=|id| id.clone() let:section_id>
                <SectionCard
                    section_id=section_id
                    document=document
                    on_change=on_change
                    picker=picker
                    dragged=dragged
                    drag_over=drag_over
                    collapsed=collapsed
                />
            </For>
            <button type="button" class="btn sections__add" on:click=add_section>
                "+ Add section"
            </button>
        </div>
    }
}

#[component]
fn SectionCard(
    section_id: SectionId,
    document: Signal<Document>,
    on_change: Callback<Document>,
    picker: RwSignal<MediaPickerState>,
    dragged: RwSignal<Option<SectionId>>,
    drag_over: RwSignal<Option<SectionId>>,
    collapsed: RwSignal<CollapsedSections>,
) -> impl IntoView {
    let id = StoredValue::new(section_id);
    let edit = move |f: &dyn Fn(&Document, &SectionId) -> Document| {
        let next = document.with_untracked(|doc| id.with_value(|sid| f(doc, sid)));
        on_change.run(next);
    };

    let title = move || document.with(|doc| id.with_value(|sid| doc.section(sid).map(|s| s.title.clone())).unwrap_or_default());
    let index = move || document.with(|doc| id.with_value(|sid| doc.sections.iter().position(|s| &s.id == sid)));
    let count = move || document.with(|doc| doc.sections.len());
    let folded = move || collapsed.with(|c| id.with_value(|sid| c.is_collapsed(sid)));
    let block_total = move || document.with(|doc| id.with_value(|sid| block_ids(doc, sid).len()));

    let move_by = move |delta: isize| {
        let Some(from) = index() else {
            return;
        };
        let Some(to) = from.checked_add_signed(delta) else {
            return;
        };
        on_change.run(document.with_untracked(|doc| doc.reorder_sections(from, to)));
    };

    let class = move || {
        let over = drag_over.with(|o| id.with_value(|sid| o.as_ref() == Some(sid)));
        match (over, folded()) {
            (true, true) => "section section--drop-target section--collapsed",
            (true, false) => "section section--drop-target",
            (false, true) => "section section--collapsed",
            (false, false) => "section",
        }
    };
    let remove_section = move |_| {
        edit(&|doc, sid| doc.remove_section(sid));
        let remaining = document.with_untracked(Document::section_ids);
        collapsed.update(|c| c.retain_existing(&remaining));
    };

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(transfer) = ev.data_transfer() {
            let _ = id.with_value(|sid| transfer.set_data("text/plain", sid.as_str()));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
        dragged.set(Some(id.get_value()));
    };
    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(Some(id.get_value()));
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(None);
        if let Some(source) = dragged.get_untracked() {
            edit(&|doc, over| doc.move_section(&source, Some(over)));
        }
        dragged.set(None);
    };
    let on_drag_end = move |_| {
        dragged.set(None);
        drag_over.set(None);
    };

    view! {
        <section class=class on:dragover=on_drag_over on:drop=on_drop>
            <header class="section__header">
                <span
                    class="section__handle"
                    title="Drag to reorder"
                    draggable="true"
                    on:dragstart=on_drag_start
                    on:dragend=on_drag_end
                >
                    "⠿"
                </span>
                <input
                    class="field__input section__title"
                    type="text"
                    placeholder="Section title"
                    prop:value=title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|doc, sid| doc.rename_section(sid, &value));
                    }
                />
                {move || {
                    folded().then(|| {
                        let n = block_total();
                        view! { <span class="section__summary">{format!("{n} block(s)")}</span> }
                    })
                }}
                <button
                    type="button"
                    class="btn"
                    aria-expanded=move || (!folded()).to_string()
                    on:click=move |_| collapsed.update(|c| id.with_value(|sid| c.toggle(sid)))
                >
                    {move || if folded() { "Expand" } else { "Collapse" }}
                </button>
                <button
                    type="button"
                    class="btn"
                    title="Move up"
                    disabled=move || index() == Some(0)
                    on:click=move |_| move_by(-1)
                >
                    "↑"
                </button>
                <button
                    type="button"
                    class="btn"
                    title="Move down"
                    disabled=move || index().is_none_or(|i| i + 1 >= count())
                    on:click=move |_| move_by(1)
                >
                    "↓"
                </button>
                <button
                    type="button"
                    class="btn btn--danger"
                    on:click=remove_section
                >
                    "Remove section"
                </button>
            </header>
            <div class="section__blocks">
                <For
                    each=move || document.with(|doc| id.with_value(|sid| block_ids(doc, sid)))
                    key=|block_id| block_id.clone()
                    let:block_id
                >
                    <BlockEditor
                        section_id=id.get_value()
                        block_id=block_id
                        document=document
                        on_change=on_change
                        picker=picker
                    />
                </For>
            </div>
            <div class="section__add-block">
                {BlockKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                type="button"
                                class="btn btn--small"
                                on:click=move |_| edit(&|doc, sid| doc.add_block(sid, kind))
                            >
                                {format!("+ {}", kind.label())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BlockEditor(
    section_id: SectionId,
    block_id: BlockId,
    document: Signal<Document>,
    on_change: Callback<Document>,
    picker: RwSignal<MediaPickerState>,
) -> impl IntoView {
    let ids = StoredValue::new((section_id, block_id));
    let current = move || document.with(|doc| ids.with_value(|(sid, bid)| doc.block(sid, bid).cloned()));
    let update = move |value: String| {
        let next = document.with_untracked(|doc| ids.with_value(|(sid, bid)| doc.update_block(sid, bid, &value)));
        on_change.run(next);
    };
    let remove = move |_| {
        let next = document.with_untracked(|doc| ids.with_value(|(sid, bid)| doc.remove_block(sid, bid)));
        on_change.run(next);
    };
    let open_picker = move |_| {
        let (section_id, block_id) = ids.get_value();
        picker.update(|p| p.open(MediaTarget::Block { section_id, block_id }));
    };

    // The block kind never changes after creation; read it once.
    let initial = document.with_untracked(|doc| ids.with_value(|(sid, bid)| doc.block(sid, bid).cloned()));
    let kind = initial.as_ref().and_then(BlockContent::kind);
    let type_name = initial.as_ref().map(|c| c.type_name().to_owned()).unwrap_or_default();

    let body = match kind {
        Some(kind) if kind.is_media() => {
            let url = move || current().map(|c| c.value().to_owned()).unwrap_or_default();
            let placeholder = if kind == BlockKind::Video { "Video URL" } else { "Image URL" };
            view! {
                <div class="block__media">
                    <input
                        class="field__input"
                        type="url"
                        placeholder=placeholder
                        prop:value=url
                        on:input=move |ev| update(event_target_value(&ev))
                    />
                    <button type="button" class="btn" on:click=open_picker>
                        "Choose from library"
                    </button>
                    {move || {
                        let src = url();
                        (!src.is_empty() && kind == BlockKind::Image)
                            .then(|| view! { <img class="block__thumb" src=src alt="" /> })
                    }}
                </div>
            }
            .into_any()
        }
        Some(_) => {
            let initial_html = initial.as_ref().map(|c| c.value().to_owned()).unwrap_or_default();
            view! { <RichTextEditor initial=initial_html on_change=Callback::new(update) /> }.into_any()
        }
        None => view! { <p class="block__unknown">{format!("Unsupported block type: {type_name}")}</p> }.into_any(),
    };

    let label = kind.map_or_else(|| type_name.clone(), |k| k.label().to_owned());

    view! {
        <div class="block">
            <div class="block__header">
                <span class="block__kind">{label}</span>
                <button type="button" class="btn btn--small btn--danger" on:click=remove>
                    "Remove"
                </button>
            </div>
            {body}
        </div>
    }
}

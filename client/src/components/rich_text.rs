//! Minimal rich-text input over a `contenteditable` host.
//!
//! DESIGN
//! ======
//! The host's markup is seeded once from `initial` and never re-rendered
//! from props, which would reset the caret. Callers mount the editor after
//! the record has loaded and key it by record/block id. Output passes
//! through `normalize_rich_text` before it reaches the callback.

use leptos::prelude::*;

/// Toolbar entries as `(label, title, execCommand name)`.
const TOOLBAR: [(&str, &str, &str); 6] = [
    ("B", "Bold", "bold"),
    ("I", "Italic", "italic"),
    ("U", "Underline", "underline"),
    ("1.", "Numbered list", "insertOrderedList"),
    ("•", "Bulleted list", "insertUnorderedList"),
    ("Tx", "Clear formatting", "removeFormat"),
];

#[cfg(feature = "hydrate")]
fn exec(command: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    let _ = doc.exec_command(command);
}

#[component]
pub fn RichTextEditor(
    #[prop(into)] initial: String,
    on_change: Callback<String>,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let host = event_target::<web_sys::Element>(&ev);
            on_change.run(content::block::normalize_rich_text(&host.inner_html()));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, on_change);
    };

    view! {
        <div class="rich-text">
            <div class="rich-text__toolbar">
                {TOOLBAR
                    .into_iter()
                    .map(|(label, title, command)| {
                        view! {
                            <button
                                type="button"
                                class="rich-text__button"
                                title=title
                                on:mousedown=move |ev| {
                                    ev.prevent_default();
                                    #[cfg(feature = "hydrate")]
                                    exec(command);
                                    #[cfg(not(feature = "hydrate"))]
                                    let _ = command;
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="rich-text__body"
                contenteditable="true"
                data-placeholder=placeholder.unwrap_or_else(|| "Start writing...".to_owned())
                inner_html=initial
                on:input=on_input
            ></div>
        </div>
    }
}

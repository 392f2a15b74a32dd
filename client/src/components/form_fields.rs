//! Labelled form inputs shared by the editor pages.
//!
//! Inputs are controlled: the value comes in as a signal and every change is
//! reported through a callback, so the page keeps the record as the single
//! source of truth.

#[cfg(test)]
#[path = "form_fields_test.rs"]
mod form_fields_test;

use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Parse a numeric input. Blank or invalid text clears the value.
pub fn parse_optional_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

pub fn format_optional_number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Select options whose value and label are the same text.
pub fn options<I: IntoIterator<Item = &'static str>>(values: I) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.to_owned(), v.to_owned())).collect()
}

/// Input value over one text field of the edited record; `None` reads as
/// blank.
pub fn text_signal<T>(editor: RwSignal<EditorState<T>>, read: fn(&T) -> Option<&str>) -> Signal<String>
where
    T: Send + Sync + 'static,
{
    Signal::derive(move || editor.with(|s| read(&s.record).unwrap_or_default().to_owned()))
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="text"
                required=required
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Select over `(value, label)` options. An empty first option is added
/// when `placeholder` is given.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        let selected_value = option.clone();
                        view! {
                            <option value=option selected=move || value.get() == selected_value>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn CheckboxField(#[prop(into)] label: String, #[prop(into)] checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="field field--inline">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="field__label">{label}</span>
        </label>
    }
}

/// Integer input; blank clears the value.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<i64>>,
    on_input: Callback<Option<i64>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="number"
                prop:value=move || format_optional_number(value.get())
                on:input=move |ev| on_input.run(parse_optional_number(&event_target_value(&ev)))
            />
        </label>
    }
}

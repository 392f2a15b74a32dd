//! Table of collection records with edit links and confirmed delete.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_status::ListStatus;
use crate::net::types::Resource;
use crate::state::lists::ListState;
use crate::util::resource::{PageContext, delete_confirmed};

/// `row` renders the data cells for one record; the actions cell is added
/// here. With `on_preview` set, each row also gets a Preview button that
/// reports the row id.
#[component]
pub fn CollectionTable<T, R, V>(
    list: RwSignal<ListState<T>>,
    columns: Vec<&'static str>,
    row: R,
    #[prop(optional)] on_preview: Option<Callback<String>>,
) -> impl IntoView
where
    T: Resource,
    R: Fn(&T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let ctx = PageContext::expect();
    let collection = T::COLLECTION;
    let on_confirm = Callback::new(move |()| delete_confirmed(&ctx, list));
    let on_cancel = Callback::new(move |()| list.update(ListState::cancel_delete));

    view! {
        <ListStatus list=list empty_message=format!("No {} yet.", collection.label().to_lowercase()) />
        <Show when=move || list.with(|l| !l.items.is_empty())>
            {
                let row = row.clone();
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                {columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                list.get()
                                    .items
                                    .iter()
                                    .map(|item| {
                                        let id = item.id().unwrap_or_default().to_owned();
                                        let edit_href = collection.edit_route(&id);
                                        let preview_id = id.clone();
                                        view! {
                                            <tr>
                                                {row(item)}
                                                <td class="table__actions">
                                                    {on_preview
                                                        .map(|preview| {
                                                            view! {
                                                                <button
                                                                    type="button"
                                                                    class="btn btn--link"
                                                                    title="Preview"
                                                                    on:click=move |_| preview.run(preview_id.clone())
                                                                >
                                                                    "Preview"
                                                                </button>
                                                            }
                                                        })}
                                                    <a class="btn btn--link" href=edit_href>
                                                        "Edit"
                                                    </a>
                                                    <button
                                                        type="button"
                                                        class="btn btn--link btn--danger"
                                                        on:click=move |_| list.update(|l| l.request_delete(&id))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                }
            }
        </Show>
        <Show when=move || list.with(|l| l.pending_delete.is_some())>
            <ConfirmDialog
                message=format!("Delete this {}? This cannot be undone.", collection.singular().to_lowercase())
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </Show>
    }
}

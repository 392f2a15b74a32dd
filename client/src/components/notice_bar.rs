//! Transient notice banner.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Shows the current notice, if any. Clicking it dismisses early.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        {move || {
            notices
                .get()
                .current
                .map(|notice| {
                    let seq = notice.seq;
                    view! {
                        <div
                            class=format!("notice notice--{}", notice.level.as_str())
                            role="status"
                            on:click=move |_| {
                                notices.update(|n| {
                                    n.dismiss(seq);
                                });
                            }
                        >
                            {notice.message}
                        </div>
                    }
                })
        }}
    }
}

//! Authenticated page frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every console route except `/login` renders inside `AdminLayout`, which
//! installs the unauthenticated redirect and holds back page content until
//! the stored session has resolved.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_bar::NoticeBar;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="admin-page admin-page--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <Sidebar />
                <main class="admin-page__main">{children()}</main>
                <NoticeBar />
            </div>
        </Show>
    }
}

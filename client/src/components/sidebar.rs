//! Navigation sidebar with the signed-in user and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Collection;
use crate::state::auth::AuthState;
use crate::util::auth::logout;

/// Sidebar entries as `(label, href)`, in display order.
pub fn nav_items() -> Vec<(&'static str, &'static str)> {
    let mut items = vec![("Dashboard", "/")];
    items.extend(Collection::ALL.iter().map(|c| (c.label(), c.route())));
    items.push(("Media", "/media"));
    items
}

/// Whether `href` is the active entry for `path`. The dashboard matches
/// only exactly; sections also match their nested routes.
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(auth);
        navigate("/login", NavigateOptions::default());
    };

    let user_label = move || auth.get().author_name().map(str::to_owned).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"CCI ADMIN"</div>
            <nav class="sidebar__nav">
                {nav_items()
                    .into_iter()
                    .map(|(label, href)| {
                        let class = move || {
                            if is_active(href, &pathname.get()) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a class=class href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{user_label}</span>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

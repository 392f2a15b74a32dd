//! Dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route: one card per managed collection with
//! shortcuts to its list and to a fresh editor, plus the media library.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::net::types::Collection;
use crate::state::auth::AuthState;

/// Greeting line for the signed-in user.
pub fn greeting(auth: &AuthState) -> String {
    match auth.author_name() {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <AdminLayout>
            <div class="dashboard-page">
                <header class="page-header">
                    <h1>"Dashboard"</h1>
                    <p class="page-header__subtitle">{move || auth.with(greeting)}</p>
                </header>
                <div class="dashboard-page__cards">
                    {Collection::ALL
                        .into_iter()
                        .map(|collection| {
                            view! {
                                <div class="card">
                                    <h2 class="card__title">{collection.label()}</h2>
                                    <div class="card__actions">
                                        <a class="btn" href=collection.route()>
                                            "Manage"
                                        </a>
                                        <a class="btn btn--primary" href=collection.new_route()>
                                            {format!("New {}", collection.singular())}
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="card">
                        <h2 class="card__title">"Media"</h2>
                        <div class="card__actions">
                            <a class="btn" href="/media">
                                "Open library"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </AdminLayout>
    }
}

//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, ApiConfig};
use crate::state::auth::AuthState;
use crate::util::auth::complete_login;

const MISSING_FIELDS: &str = "Veuillez remplir tous les champs.";
const BAD_CREDENTIALS: &str = "Email ou mot de passe incorrect.";

/// Trimmed email and raw password, or the message to show.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cfg = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: nothing to do here.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.get().is_signed_in() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let cfg = cfg.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&cfg, &email_value, &password_value).await {
                Ok(resp) => {
                    complete_login(auth, &cfg, &resp.token, resp.user).await;
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(BAD_CREDENTIALS.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CCI Admin"</h1>
                <p class="login-card__subtitle">"Connexion"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Mot de passe"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

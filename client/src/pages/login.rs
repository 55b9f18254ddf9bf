//! Login page: email + password exchanged for tokens, then identity.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::types::Credentials;

use crate::components::feedback::LoadingIndicator;
use crate::state::session::use_session;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED: &str = "Failed to login. Please check your credentials.";
const DASHBOARD_PATH: &str = "/dashboard";

/// Trim and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::BrowserApi::new();
            let storage = crate::util::storage::BrowserStorage;
            match portal::flows::sign_in(&api, &storage, &credentials).await {
                Ok(user) => {
                    session.update(|store| store.set_user(Some(user)));
                    signed_in.set(true);
                }
                Err(e) => error.set(Some(e.user_message(LOGIN_FAILED))),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, signed_in);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Welcome Back"</h2>
                <p class="login-card__subtitle">"Sign in to your SaaS dashboard"</p>
                <Show when=move || error.get().is_some()>
                    <div class="notice notice--error" role="alert">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            required
                            placeholder="admin@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        <Show when=move || busy.get() fallback=|| "Sign In">
                            <LoadingIndicator label="Signing in..."/>
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}

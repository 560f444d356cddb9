//! Login page.
//!
//! Consumes the [`NavigationIntent`] left behind by a guard redirect (shown
//! as a notice, and used to send the user back where they were headed), and
//! exchanges email + password for a credential. All failures become a
//! single local error message; nothing propagates past the component.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::error::{ApiError, GENERIC_MESSAGE};
use crate::net::types::AuthResponse;
use crate::state::session::{NavigationIntent, SessionState};

/// Fold a login outcome into the session store.
///
/// `Ok` means the credential was installed and the caller should navigate;
/// `Err` carries the message to show. A 2xx response without a usable token
/// is an authentication failure, not a crash, and leaves the store
/// untouched.
fn apply_login(
    state: &mut SessionState,
    outcome: Result<AuthResponse, ApiError>,
) -> Result<(), String> {
    match outcome {
        Ok(resp) => match resp.access_token.filter(|t| !t.is_empty()) {
            Some(tok) => {
                state.install(tok);
                Ok(())
            }
            None => Err(resp.message.unwrap_or_else(|| GENERIC_MESSAGE.to_owned())),
        },
        Err(err) => Err(err.user_message()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let intent = expect_context::<RwSignal<Option<NavigationIntent>>>();
    let navigate = use_navigate();

    // Consume the redirect intent exactly once; later mounts start clean.
    let captured = intent.try_update(Option::take).flatten();
    let notice = captured.as_ref().map(|i| i.message.clone());
    let origin = StoredValue::new(captured.map_or_else(|| "/".to_owned(), |i| i.from));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter your email and password.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            let outcome = api::login(token.as_deref(), &email_value, &password_value).await;
            let mut applied = Ok(());
            session.update(|s| applied = apply_login(s, outcome));
            busy.set(false);
            match applied {
                Ok(()) => navigate(&origin.get_value(), NavigateOptions::default()),
                Err(msg) => error.set(Some(msg)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in to your account"</h1>
            {notice.map(|msg| view! { <p class="auth-page__notice">{msg}</p> })}
            <form class="auth-page__form" on:submit=on_submit>
                <label>
                    "Email address"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p>
                "Don't have an account? "
                <A href="/register">"Sign up"</A>
            </p>
            <A href="/">"Back home"</A>
        </div>
    }
}

//! Registration page.
//!
//! Validates locally before any network call; only a form that passes every
//! check reaches the backend. A response with a credential signs the user
//! in immediately; one with only a message (email verification pending)
//! shows the message and stays on the page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, RegisterRequest};
use crate::state::session::SessionState;

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
    pub receive_emails: bool,
}

/// Local validation, run before any network call.
///
/// # Errors
///
/// The message to show for the first failing check.
pub fn validate(form: &RegisterForm) -> Result<(), String> {
    if form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
    {
        return Err("Please fill in all required fields.".to_owned());
    }
    if form.password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long".to_owned());
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_owned());
    }
    if !form.accepted_terms {
        return Err("You must accept the terms to create an account.".to_owned());
    }
    Ok(())
}

/// What the page does after the backend call resolves.
#[derive(Debug, PartialEq, Eq)]
enum RegisterOutcome {
    /// Credential received: signed in, navigate home.
    SignedIn,
    /// Created but no credential (verification flow): show the message.
    Pending(String),
    Failed(String),
}

fn apply_register(
    state: &mut SessionState,
    outcome: Result<AuthResponse, ApiError>,
) -> RegisterOutcome {
    match outcome {
        Ok(resp) => match resp.access_token.filter(|t| !t.is_empty()) {
            Some(tok) => {
                state.install(tok);
                RegisterOutcome::SignedIn
            }
            None => RegisterOutcome::Pending(resp.message.unwrap_or_else(|| {
                "Account created. Check your email to finish signing up.".to_owned()
            })),
        },
        Err(err) => RegisterOutcome::Failed(err.user_message()),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);
    let receive_emails = RwSignal::new(true);

    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
            receive_emails: receive_emails.get_untracked(),
        };
        if let Err(msg) = validate(&form) {
            error.set(Some(msg));
            return;
        }
        busy.set(true);
        error.set(None);
        info.set(None);

        let request = RegisterRequest {
            first_name: form.first_name.trim().to_owned(),
            last_name: form.last_name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            password: form.password,
            receive_emails: form.receive_emails,
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            let outcome = api::register(token.as_deref(), &request).await;
            let mut applied = RegisterOutcome::Pending(String::new());
            session.update(|s| applied = apply_register(s, outcome));
            busy.set(false);
            match applied {
                RegisterOutcome::SignedIn => navigate("/", NavigateOptions::default()),
                RegisterOutcome::Pending(msg) => info.set(Some(msg)),
                RegisterOutcome::Failed(msg) => error.set(Some(msg)),
            }
        });
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           signal: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                {text_field("First name", "text", first_name)}
                {text_field("Last name", "text", last_name)}
                {text_field("Email address", "email", email)}
                {text_field("Password", "password", password)}
                {text_field("Confirm password", "password", confirm_password)}
                <label class="auth-page__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || accepted_terms.get()
                        on:change=move |ev| accepted_terms.set(event_target_checked(&ev))
                    />
                    "I accept the terms of service"
                </label>
                <label class="auth-page__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || receive_emails.get()
                        on:change=move |ev| receive_emails.set(event_target_checked(&ev))
                    />
                    "Send me product updates"
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || info.get().is_some()>
                    <p class="auth-page__notice">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p>
                "Already registered? "
                <A href="/login">"Sign in"</A>
            </p>
            <A href="/">"Back home"</A>
        </div>
    }
}

//! Site footer with the newsletter signup form.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionState;

#[component]
pub fn Footer() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            notice.set(Some("Please enter an email address.".to_owned()));
            return;
        }
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match api::subscribe_newsletter(token.as_deref(), &address).await {
                Ok(()) => {
                    email.set(String::new());
                    notice.set(Some("Thanks! You're on the list.".to_owned()));
                }
                Err(err) => notice.set(Some(err.user_message())),
            }
        });
    };

    view! {
        <footer class="footer">
            <form class="footer__newsletter" on:submit=on_submit>
                <label for="newsletter-email">"Get product updates"</label>
                <input
                    id="newsletter-email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Subscribe"</button>
            </form>
            <Show when=move || notice.get().is_some()>
                <p class="footer__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <p class="footer__copyright">"Copyright 2026 Ledgerly. All rights reserved."</p>
        </footer>
    }
}

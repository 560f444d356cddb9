//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::SessionState;

/// Site-wide navigation. Swaps the login/register links for a sign-out
/// button while a session is active.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let token = session.get_untracked().access_token;
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Best effort server-side; the local session is cleared either way.
            api::logout(token.as_deref()).await;
            session.update(SessionState::invalidate);
            navigate("/", NavigateOptions::default());
        });
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Ledgerly"</A>
            <div class="navbar__links">
                <A href="/features">"Features"</A>
                <A href="/customers">"Customers"</A>
                <A href="/reports">"Reports"</A>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || session.get().is_authenticated
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="navbar__link">"Log in"</A>
                            <A href="/register" attr:class="btn btn--primary">"Get started"</A>
                        }
                    }
                >
                    <button class="btn" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

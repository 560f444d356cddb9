//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <h1>"Page not found"</h1>
            <A href="/">"Back home"</A>
        </div>
    }
}

//! Landing page hero section.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Accounting made simple for small businesses."</h1>
            <p class="hero__subtitle">
                "Most bookkeeping software is accurate, but hard to use. We make the \
                 opposite trade-off, and hope you don't get audited."
            </p>
            <div class="hero__actions">
                <A href="/register" attr:class="btn btn--primary">"Get 6 months free"</A>
                <a class="btn" href="#pricing">"See pricing"</a>
            </div>
        </section>
    }
}

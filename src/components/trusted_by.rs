//! "Trusted by" logo strip.

use leptos::prelude::*;

const COMPANIES: [&str; 6] = [
    "Transistor",
    "Tuple",
    "StaticKit",
    "Mirage",
    "Laravel",
    "Statamic",
];

#[component]
pub fn TrustedBy() -> impl IntoView {
    view! {
        <section class="trusted-by">
            <p class="trusted-by__caption">"Trusted by these six companies so far"</p>
            <ul class="trusted-by__logos">
                {COMPANIES
                    .into_iter()
                    .map(|name| view! { <li class="trusted-by__logo">{name}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

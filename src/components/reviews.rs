//! Customer review gallery.

use leptos::prelude::*;

struct Review {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const REVIEWS: [Review; 3] = [
    Review {
        quote: "Ledgerly paid for itself the first month. I found two invoices I'd \
                forgotten to send.",
        author: "Sheryl Berge",
        role: "CEO at Lynch LLC",
    },
    Review {
        quote: "The reporting is simple enough that I actually look at it, which is \
                more than I can say for the last three tools we tried.",
        author: "Amy Hahn",
        role: "Director at Velocity Industries",
    },
    Review {
        quote: "Switching took an afternoon. Our accountant stopped sighing at us.",
        author: "Leland Kiehn",
        role: "Founder of Kiehn and Sons",
    },
];

#[component]
pub fn Reviews() -> impl IntoView {
    view! {
        <section class="reviews">
            <h2 class="reviews__title">"Loved by businesses worldwide."</h2>
            <ul class="reviews__grid">
                {REVIEWS
                    .iter()
                    .map(|r| {
                        view! {
                            <li class="reviews__card">
                                <blockquote>{r.quote}</blockquote>
                                <figcaption>
                                    <span class="reviews__author">{r.author}</span>
                                    <span class="reviews__role">{r.role}</span>
                                </figcaption>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

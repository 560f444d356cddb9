//! Frequently asked questions accordion.

use leptos::prelude::*;

const FAQS: [(&str, &str); 4] = [
    (
        "Does Ledgerly handle VAT?",
        "Well no, but if you move your company offshore you can probably ignore it.",
    ),
    (
        "Can I pay for my subscription via purchase order?",
        "Absolutely, we are happy to take your money in any form.",
    ),
    (
        "How do I apply for a job at Ledgerly?",
        "We only hire our customers, so subscribe for a minimum of 6 months first.",
    ),
    (
        "Can we expect more inventory features?",
        "In life, you can expect anything. Whether it happens is another matter.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section class="faq">
            <h2 class="faq__title">"Frequently asked questions"</h2>
            <ul class="faq__list">
                {FAQS
                    .into_iter()
                    .enumerate()
                    .map(|(i, (question, answer))| {
                        let toggle = move |_| {
                            open.update(|o| *o = if *o == Some(i) { None } else { Some(i) });
                        };
                        view! {
                            <li class="faq__item">
                                <button class="faq__question" on:click=toggle>
                                    {question}
                                </button>
                                <Show when=move || open.get() == Some(i)>
                                    <p class="faq__answer">{answer}</p>
                                </Show>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

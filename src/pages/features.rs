//! Public features page.

use leptos::prelude::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <h1>"Everything you need to run your books."</h1>
            <p>
                "Invoicing, expense tracking, bank reconciliation, and payroll \
                 in one place. No spreadsheets required."
            </p>
        </div>
    }
}

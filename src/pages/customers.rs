//! Public customers page.

use leptos::prelude::*;

#[component]
pub fn CustomersPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <h1>"Teams of one to one hundred run on Ledgerly."</h1>
            <p>
                "From freelancers sending their first invoice to agencies \
                 reconciling five bank accounts a week."
            </p>
        </div>
    }
}

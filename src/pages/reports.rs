//! Reports page. Only reachable through the route guard.

use leptos::prelude::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <h1>"Reports"</h1>
            <p>"Profit and loss, cash flow, and expense breakdowns for your business."</p>
        </div>
    }
}

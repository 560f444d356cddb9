//! Pricing plan boxes.

use leptos::prelude::*;
use leptos_router::components::A;

struct Plan {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$9",
        description: "Good for anyone who is self-employed and just getting started.",
        features: &[
            "Send 10 quotes and invoices",
            "Connect up to 2 bank accounts",
            "Track up to 15 expenses per month",
            "Manual payroll support",
            "Export up to 3 reports",
        ],
        popular: false,
    },
    Plan {
        name: "Small business",
        price: "$15",
        description: "Perfect for small / medium sized businesses.",
        features: &[
            "Send 25 quotes and invoices",
            "Connect up to 5 bank accounts",
            "Track up to 50 expenses per month",
            "Automated payroll support",
            "Export up to 12 reports",
            "Bulk reconcile transactions",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "$39",
        description: "For even the biggest enterprise companies.",
        features: &[
            "Send unlimited quotes and invoices",
            "Connect up to 15 bank accounts",
            "Track up to 200 expenses per month",
            "Automated payroll support",
            "Export up to 25 reports, including TPS",
        ],
        popular: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section class="pricing" id="pricing">
            <h2 class="pricing__title">"Simple pricing, for everyone."</h2>
            <div class="pricing__grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let card_class = if plan.popular {
                            "pricing__card pricing__card--popular"
                        } else {
                            "pricing__card"
                        };
                        view! {
                            <div class=card_class>
                                <h3>{plan.name}</h3>
                                <p class="pricing__price">{plan.price}</p>
                                <p class="pricing__description">{plan.description}</p>
                                <ul>
                                    {plan
                                        .features
                                        .iter()
                                        .map(|f| view! { <li>{*f}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <A href="/register" attr:class="btn">"Get started"</A>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

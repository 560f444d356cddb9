//! Marketing landing page composed from the presentational sections.

use leptos::prelude::*;

use crate::components::faq::Faq;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::pricing::Pricing;
use crate::components::reviews::Reviews;
use crate::components::trusted_by::TrustedBy;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Hero/>
        <TrustedBy/>
        <Reviews/>
        <Pricing/>
        <Faq/>
        <Footer/>
    }
}

//! Root application component with routing, session context, and the
//! startup session bootstrap.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};

use crate::components::navbar::Navbar;
use crate::components::protected_route::{ProtectedRoute, apply_renewal};
use crate::pages::customers::CustomersPage;
use crate::pages::features::FeaturesPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::reports::ReportsPage;
use crate::state::session::{NavigationIntent, SessionState};

/// Root application component.
///
/// Provides the session store and redirect intent as contexts, runs the
/// silent renewal once per page load, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let intent = RwSignal::new(None::<NavigationIntent>);
    provide_context(session);
    provide_context(intent);

    // Silent renewal on startup: a returning visitor with a live refresh
    // cookie gets a credential without re-entering a password. Every
    // failure shape is the expected anonymous-visitor path and stays quiet.
    leptos::task::spawn_local(async move {
        let token = session.get_untracked().access_token;
        let outcome = crate::net::api::refresh(token.as_deref()).await;
        if let Err(err) = &outcome {
            log::debug!("session bootstrap: no active session ({err})");
        }
        session.update(|s| {
            apply_renewal(s, outcome);
        });
    });

    view! {
        <Title text="Ledgerly"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("customers") view=CustomersPage/>
                    <Route
                        path=StaticSegment("reports")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <ReportsPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </ParentRoute>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}

/// Shared chrome for the public and protected pages.
#[component]
fn Layout() -> impl IntoView {
    view! {
        <Navbar/>
        <main>
            <Outlet/>
        </main>
    }
}

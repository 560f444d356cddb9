//! Route guard for views that require an authenticated session.
//!
//! The access decision itself is a pure function of the credential and the
//! clock ([`evaluate`]); the component only schedules its consequences —
//! rendering children, kicking off a renewal as a post-render task, or
//! redirecting to the login page with a captured [`NavigationIntent`].

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::AuthResponse;
use crate::state::session::{NavigationIntent, SessionState};
use crate::util::token;

/// Reason string carried to the login page on a guard redirect.
pub const LOGIN_REDIRECT_MESSAGE: &str = "Please log in to access this page";

/// Access decision for a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// No credential at all: redirect without decoding or any network call.
    Redirect,
    /// Credential present and unexpired: render immediately, no renewal.
    Allow,
    /// Credential present but expired (or undecodable, which counts as
    /// expired): attempt one renewal.
    Renew,
}

/// Classify the current credential against the clock.
///
/// Fail-closed: an undecodable payload or missing expiry claim is treated
/// as expired, and a token expiring exactly `now` is expired.
pub fn evaluate(credential: Option<&str>, now: u64) -> GuardDecision {
    match credential {
        None => GuardDecision::Redirect,
        Some(t) if t.is_empty() => GuardDecision::Redirect,
        Some(t) if token::is_expired(t, now) => GuardDecision::Renew,
        Some(_) => GuardDecision::Allow,
    }
}

/// Fold a renewal outcome into the session store.
///
/// Returns whether the session ended up authenticated. Any failure shape —
/// transport error, rejection, or a 2xx without a token — lands on the
/// unauthenticated path.
pub(crate) fn apply_renewal(
    state: &mut SessionState,
    outcome: Result<AuthResponse, ApiError>,
) -> bool {
    match outcome {
        Ok(resp) => match resp.access_token.filter(|t| !t.is_empty()) {
            Some(tok) => {
                state.install(tok);
                true
            }
            None => {
                state.invalidate();
                false
            }
        },
        Err(err) => {
            log::warn!("credential renewal failed: {err}");
            state.invalidate();
            false
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum GuardStatus {
    Checking,
    Allowed,
    Denied,
}

/// Wraps children that must only render for an authenticated session.
///
/// Evaluated per navigation, and reactively: the decision derives from the
/// session signal, so a credential that arrives after the first check
/// (bootstrap finishing, a renewal resolving) re-runs the guard instead of
/// leaving the page stuck on its first answer. Each guarded render owns at
/// most one renewal attempt; concurrent guards are not deduplicated.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let intent = expect_context::<RwSignal<Option<NavigationIntent>>>();
    let location = use_location();
    let navigate = use_navigate();

    let status = RwSignal::new(GuardStatus::Checking);

    Effect::new(move || {
        let state = session.get();
        if !state.bootstrapped {
            // Startup renewal still in flight; don't flash the login page.
            status.set(GuardStatus::Checking);
            return;
        }
        match evaluate(state.access_token.as_deref(), token::now_epoch_secs()) {
            GuardDecision::Allow => status.set(GuardStatus::Allowed),
            GuardDecision::Renew => {
                status.set(GuardStatus::Checking);
                let current = state.access_token.clone();
                leptos::task::spawn_local(async move {
                    let outcome = api::refresh(current.as_deref()).await;
                    // The session write re-runs this effect: success lands
                    // on Allow, failure on Redirect.
                    session.update(|s| {
                        apply_renewal(s, outcome);
                    });
                });
            }
            GuardDecision::Redirect => {
                status.set(GuardStatus::Denied);
                intent.set(Some(NavigationIntent {
                    from: location.pathname.get_untracked(),
                    message: LOGIN_REDIRECT_MESSAGE.to_owned(),
                }));
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    view! {
        {move || match status.get() {
            GuardStatus::Checking => {
                view! { <p class="protected-route__loading">"Loading..."</p> }.into_any()
            }
            GuardStatus::Allowed => children().into_any(),
            GuardStatus::Denied => ().into_any(),
        }}
    }
}

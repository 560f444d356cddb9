#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state holding the current access credential.
///
/// Provided app-wide as `RwSignal<SessionState>` via context. Writers always
/// replace the relevant fields in a single `update`, so no reader ever
/// observes `is_authenticated == true` with an empty credential.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The bearer token, if one has been acquired this page load. Never
    /// persisted; only the server-side refresh cookie survives reloads.
    pub access_token: Option<String>,
    /// True only while `access_token` is present and was unexpired at the
    /// last check.
    pub is_authenticated: bool,
    /// True once the startup renewal attempt has resolved either way. Lets
    /// guards distinguish "still checking" from "checked and absent".
    pub bootstrapped: bool,
}

impl SessionState {
    /// Store a freshly issued credential and mark the session authenticated.
    pub fn install(&mut self, token: String) {
        self.access_token = Some(token);
        self.is_authenticated = true;
        self.bootstrapped = true;
    }

    /// Drop the credential and mark the session unauthenticated.
    ///
    /// There is no separate "destroyed" state; the absence of a valid
    /// credential is it.
    pub fn invalidate(&mut self) {
        self.access_token = None;
        self.is_authenticated = false;
        self.bootstrapped = true;
    }

    /// The current credential, read at the moment the caller needs it.
    pub fn token(&self) -> Option<String> {
        self.access_token.clone()
    }
}

/// Where a guard redirect came from and why.
///
/// Captured when an unauthenticated visitor hits a protected route and
/// consumed exactly once by the login page, which shows `message` and
/// returns the user to `from` after a successful sign-in. Request-scoped;
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub from: String,
    pub message: String,
}

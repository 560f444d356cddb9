use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_starts_empty_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.access_token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.bootstrapped);
}

// =============================================================
// install / invalidate
// =============================================================

#[test]
fn install_sets_token_and_flag_together() {
    let mut state = SessionState::default();
    state.install("T".to_owned());
    assert_eq!(state.token().as_deref(), Some("T"));
    assert!(state.is_authenticated);
    assert!(state.bootstrapped);
}

#[test]
fn authenticated_implies_token_present() {
    // The invariant holds across every mutation path.
    let mut state = SessionState::default();
    state.install("T".to_owned());
    assert!(!state.is_authenticated || state.access_token.is_some());

    state.invalidate();
    assert!(!state.is_authenticated || state.access_token.is_some());
}

#[test]
fn invalidate_clears_token_and_flag() {
    let mut state = SessionState::default();
    state.install("T".to_owned());
    state.invalidate();
    assert!(state.access_token.is_none());
    assert!(!state.is_authenticated);
    assert!(state.bootstrapped);
}

#[test]
fn install_replaces_previous_token() {
    let mut state = SessionState::default();
    state.install("old".to_owned());
    state.install("new".to_owned());
    assert_eq!(state.token().as_deref(), Some("new"));
}

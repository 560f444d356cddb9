use super::*;
use crate::net::error::NETWORK_MESSAGE;

// =============================================================
// apply_login
// =============================================================

#[test]
fn login_token_installs_and_authenticates() {
    let mut state = SessionState::default();
    let outcome = Ok(AuthResponse {
        access_token: Some("T".to_owned()),
        ..AuthResponse::default()
    });
    assert_eq!(apply_login(&mut state, outcome), Ok(()));
    assert_eq!(state.token().as_deref(), Some("T"));
    assert!(state.is_authenticated);
}

#[test]
fn login_rejection_shows_server_error_verbatim() {
    let mut state = SessionState::default();
    let outcome = Err(ApiError::Rejected {
        status: 400,
        body: r#"{"error": "Invalid credentials"}"#.to_owned(),
    });
    assert_eq!(
        apply_login(&mut state, outcome),
        Err("Invalid credentials".to_owned())
    );
    // The store is left empty and unauthenticated.
    assert!(state.access_token.is_none());
    assert!(!state.is_authenticated);
}

#[test]
fn login_transport_failure_shows_network_message() {
    let mut state = SessionState::default();
    let outcome = Err(ApiError::Transport("offline".to_owned()));
    assert_eq!(
        apply_login(&mut state, outcome),
        Err(NETWORK_MESSAGE.to_owned())
    );
    assert!(!state.is_authenticated);
}

#[test]
fn login_response_without_token_is_a_failure() {
    let mut state = SessionState::default();
    let outcome = Ok(AuthResponse {
        message: Some("Try again later".to_owned()),
        ..AuthResponse::default()
    });
    assert_eq!(
        apply_login(&mut state, outcome),
        Err("Try again later".to_owned())
    );
    assert!(!state.is_authenticated);
}

#[test]
fn login_response_without_token_or_message_uses_generic() {
    let mut state = SessionState::default();
    assert_eq!(
        apply_login(&mut state, Ok(AuthResponse::default())),
        Err(GENERIC_MESSAGE.to_owned())
    );
}

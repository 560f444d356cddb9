use super::*;
use crate::state::session::SessionState;

// =============================================================
// bearer_header
// =============================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("T")).as_deref(), Some("Bearer T"));
}

#[test]
fn bearer_header_absent_without_token() {
    assert_eq!(bearer_header(None), None);
}

#[test]
fn bearer_header_treats_empty_token_as_absent() {
    assert_eq!(bearer_header(Some("")), None);
}

// =============================================================
// Credential read-at-call-time round trip
// =============================================================

#[test]
fn calls_carry_latest_installed_token() {
    let mut session = SessionState::default();
    session.install("T".to_owned());
    assert_eq!(
        bearer_header(session.token().as_deref()).as_deref(),
        Some("Bearer T")
    );

    // A replacement credential wins on the next read; nothing is cached.
    session.install("T2".to_owned());
    assert_eq!(
        bearer_header(session.token().as_deref()).as_deref(),
        Some("Bearer T2")
    );

    session.invalidate();
    assert_eq!(bearer_header(session.token().as_deref()), None);
}

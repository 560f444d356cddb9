use super::*;

fn rejected(status: u16, body: &str) -> ApiError {
    ApiError::Rejected {
        status,
        body: body.to_owned(),
    }
}

// =============================================================
// Transport and decode failures
// =============================================================

#[test]
fn transport_failure_uses_network_message() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message(), NETWORK_MESSAGE);
}

#[test]
fn decode_failure_uses_generic_message() {
    let err = ApiError::Decode("missing field".to_owned());
    assert_eq!(err.user_message(), GENERIC_MESSAGE);
}

// =============================================================
// Rejection body extraction
// =============================================================

#[test]
fn rejection_error_field_shown_verbatim() {
    let err = rejected(400, r#"{"error": "Invalid credentials"}"#);
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn rejection_prefers_error_over_message() {
    let err = rejected(400, r#"{"error": "e1", "message": "m1"}"#);
    assert_eq!(err.user_message(), "e1");
}

#[test]
fn rejection_message_field_shown_when_no_error() {
    let err = rejected(403, r#"{"message": "Account locked"}"#);
    assert_eq!(err.user_message(), "Account locked");
}

#[test]
fn rejection_array_field_uses_first_element() {
    let err = rejected(400, r#"{"email": ["user with this email already exists."]}"#);
    assert_eq!(err.user_message(), "user with this email already exists.");
}

#[test]
fn rejection_bare_string_body_shown_verbatim() {
    let err = rejected(400, r#""plain rejection""#);
    assert_eq!(err.user_message(), "plain rejection");
}

#[test]
fn rejection_non_json_body_shown_trimmed() {
    let err = rejected(502, "  Bad Gateway \n");
    assert_eq!(err.user_message(), "Bad Gateway");
}

#[test]
fn rejection_empty_body_falls_back_to_generic() {
    let err = rejected(500, "");
    assert_eq!(err.user_message(), GENERIC_MESSAGE);
}

#[test]
fn rejection_unrecognized_shape_falls_back_to_generic() {
    let err = rejected(500, r#"{"detail": 42}"#);
    assert_eq!(err.user_message(), GENERIC_MESSAGE);
}

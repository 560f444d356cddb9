use super::*;
use crate::net::error::GENERIC_MESSAGE;

fn valid_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "longenough1".to_owned(),
        confirm_password: "longenough1".to_owned(),
        accepted_terms: true,
        receive_emails: false,
    }
}

// =============================================================
// validate — all checks run before any network call
// =============================================================

#[test]
fn valid_form_passes() {
    assert_eq!(validate(&valid_form()), Ok(()));
}

#[test]
fn missing_required_field_fails() {
    for field in ["first_name", "last_name", "email", "password"] {
        let mut form = valid_form();
        match field {
            "first_name" => form.first_name.clear(),
            "last_name" => form.last_name.clear(),
            "email" => form.email.clear(),
            _ => form.password.clear(),
        }
        assert_eq!(
            validate(&form),
            Err("Please fill in all required fields.".to_owned()),
            "field: {field}"
        );
    }
}

#[test]
fn whitespace_only_name_fails() {
    let mut form = valid_form();
    form.first_name = "   ".to_owned();
    assert_eq!(
        validate(&form),
        Err("Please fill in all required fields.".to_owned())
    );
}

#[test]
fn short_password_fails_with_exact_message() {
    let mut form = valid_form();
    form.password = "short".to_owned();
    form.confirm_password = "short".to_owned();
    assert_eq!(
        validate(&form),
        Err("Password must be at least 8 characters long".to_owned())
    );
}

#[test]
fn eight_character_password_passes_length_check() {
    let mut form = valid_form();
    form.password = "12345678".to_owned();
    form.confirm_password = "12345678".to_owned();
    assert_eq!(validate(&form), Ok(()));
}

#[test]
fn mismatched_confirmation_fails_with_exact_message() {
    let mut form = valid_form();
    form.password = "longenough1".to_owned();
    form.confirm_password = "different".to_owned();
    assert_eq!(validate(&form), Err("Passwords do not match".to_owned()));
}

#[test]
fn unaccepted_terms_fail() {
    let mut form = valid_form();
    form.accepted_terms = false;
    assert_eq!(
        validate(&form),
        Err("You must accept the terms to create an account.".to_owned())
    );
}

// =============================================================
// apply_register
// =============================================================

#[test]
fn register_with_token_signs_in_immediately() {
    let mut state = SessionState::default();
    let outcome = Ok(AuthResponse {
        access_token: Some("T".to_owned()),
        ..AuthResponse::default()
    });
    assert_eq!(apply_register(&mut state, outcome), RegisterOutcome::SignedIn);
    assert!(state.is_authenticated);
    assert_eq!(state.token().as_deref(), Some("T"));
}

#[test]
fn register_without_token_is_pending_with_server_message() {
    let mut state = SessionState::default();
    let outcome = Ok(AuthResponse {
        message: Some("Verification email sent".to_owned()),
        ..AuthResponse::default()
    });
    assert_eq!(
        apply_register(&mut state, outcome),
        RegisterOutcome::Pending("Verification email sent".to_owned())
    );
    assert!(!state.is_authenticated);
}

#[test]
fn register_rejection_surfaces_field_error() {
    let mut state = SessionState::default();
    let outcome = Err(ApiError::Rejected {
        status: 400,
        body: r#"{"email": ["user with this email already exists."]}"#.to_owned(),
    });
    assert_eq!(
        apply_register(&mut state, outcome),
        RegisterOutcome::Failed("user with this email already exists.".to_owned())
    );
    assert!(!state.is_authenticated);
}

#[test]
fn register_decode_failure_is_generic() {
    let mut state = SessionState::default();
    let outcome = Err(ApiError::Decode("bad json".to_owned()));
    assert_eq!(
        apply_register(&mut state, outcome),
        RegisterOutcome::Failed(GENERIC_MESSAGE.to_owned())
    );
}

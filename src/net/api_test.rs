use super::*;

// =============================================================
// Rejection message extraction
// =============================================================

#[test]
fn rejection_uses_backend_error_message() {
    let err = rejection(r#"{"error":"invalid credentials"}"#);
    assert_eq!(err, AuthError::Rejected("invalid credentials".to_owned()));
}

#[test]
fn rejection_falls_back_on_non_json_body() {
    let err = rejection("<html>502 Bad Gateway</html>");
    assert_eq!(
        err,
        AuthError::Rejected("An unknown authentication error occurred.".to_owned())
    );
}

#[test]
fn rejection_falls_back_when_error_field_is_missing() {
    let err = rejection(r#"{"detail":"nope"}"#);
    assert_eq!(
        err,
        AuthError::Rejected("An unknown authentication error occurred.".to_owned())
    );
}

#[test]
fn rejection_falls_back_on_empty_body() {
    let err = rejection("");
    assert_eq!(
        err,
        AuthError::Rejected("An unknown authentication error occurred.".to_owned())
    );
}

// =============================================================
// Error display
// =============================================================

#[test]
fn rejected_error_displays_bare_message() {
    let err = AuthError::Rejected("invalid credentials".to_owned());
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn transport_error_display_names_the_network() {
    let err = AuthError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

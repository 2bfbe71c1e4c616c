use super::*;

// =============================================================
// Auth response decoding
// =============================================================

#[test]
fn auth_response_decodes_token_and_user() {
    let json = r#"{"token":"t1","user":{"id":2,"email":"a@b.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(json).expect("valid response");
    assert_eq!(resp.token, "t1");
    assert_eq!(
        resp.user,
        User {
            id: 2,
            email: "a@b.com".to_owned()
        }
    );
}

#[test]
fn auth_response_without_user_is_rejected() {
    // A token with no user would break the both-or-neither session
    // invariant, so it must fail at the deserialization boundary.
    let json = r#"{"token":"t1"}"#;
    assert!(serde_json::from_str::<AuthResponse>(json).is_err());
}

#[test]
fn auth_response_with_malformed_user_is_rejected() {
    let json = r#"{"token":"t1","user":{"id":"two","email":"a@b.com"}}"#;
    assert!(serde_json::from_str::<AuthResponse>(json).is_err());
}

// =============================================================
// Request encoding
// =============================================================

#[test]
fn login_request_serializes_camel_case() {
    let req = LoginRequest {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
        remember_me: true,
    };
    let json = serde_json::to_value(&req).expect("serializable");
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["rememberMe"], true);
}

#[test]
fn register_request_omits_absent_country() {
    let req = RegisterRequest {
        full_name: "Ana Costa".to_owned(),
        email: "ana@b.com".to_owned(),
        phone: "+5511999999999".to_owned(),
        password: "secret123".to_owned(),
        country: None,
    };
    let json = serde_json::to_value(&req).expect("serializable");
    assert_eq!(json["fullName"], "Ana Costa");
    assert!(json.get("country").is_none());
}

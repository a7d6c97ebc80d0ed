use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@example.com ", "secret"),
        Ok(LoginRequest { email: "ana@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("ana@example.com", " spaced ").unwrap();
    assert_eq!(request.password, " spaced ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("ana@example.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_address_without_at() {
    assert_eq!(validate_login_input("ana.example.com", "secret"), Err("Enter a valid email address."));
}

#[test]
fn login_failure_shows_backend_reason_for_rejected_credentials() {
    let err = ApiError::Unauthenticated { message: Some("Invalid credentials".to_owned()) };
    assert_eq!(login_failure_message(&err), "Invalid credentials");
}

#[test]
fn login_failure_without_reason_is_generic() {
    assert_eq!(login_failure_message(&ApiError::Unauthenticated { message: None }), "Login failed");
    assert_eq!(login_failure_message(&ApiError::Network("offline".to_owned())), "Login failed");
}

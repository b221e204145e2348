use super::*;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

fn profile(email: &str, username: &str) -> SignupProfile {
    SignupProfile { email: email.to_owned(), password: "secret".to_owned(), username: username.to_owned() }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_valid_credentials_returns_user() {
    let user = login(&credentials("demo@example.com", "password123")).unwrap();
    assert_eq!(user.username.as_deref(), Some("demo"));
}

#[test]
fn login_invalid_credentials_errors() {
    let err = login(&credentials("demo@example.com", "wrong")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn invalid_credentials_message() {
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "Invalid email or password. Please try again."
    );
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_new_email_creates_user() {
    let user = signup(&profile("new@example.com", "newbie")).unwrap();
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.username.as_deref(), Some("newbie"));
    assert_eq!(user.avatar.as_deref(), Some(DEFAULT_SIGNUP_AVATAR));
    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
}

#[test]
fn signup_assigns_distinct_ids() {
    let a = signup(&profile("a@example.com", "a")).unwrap();
    let b = signup(&profile("b@example.com", "b")).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn signup_existing_email_is_duplicate() {
    let err = signup(&profile("demo@example.com", "demo2")).unwrap_err();
    assert_eq!(err, AuthError::DuplicateEmail { email: "demo@example.com".to_owned() });
    assert!(err.to_string().contains("demo@example.com"));
}

use super::*;

// =============================================================
// find_test_account
// =============================================================

#[test]
fn find_test_account_matches_demo() {
    let account = find_test_account("demo@example.com", "password123").unwrap();
    assert_eq!(account.user_id, "demo-user-1");
}

#[test]
fn find_test_account_matches_every_table_entry() {
    for account in TEST_ACCOUNTS {
        let found = find_test_account(account.email, account.password).unwrap();
        assert_eq!(found, account);
    }
}

#[test]
fn find_test_account_wrong_password_is_none() {
    assert!(find_test_account("demo@example.com", "wrong").is_none());
}

#[test]
fn find_test_account_is_case_sensitive() {
    assert!(find_test_account("Demo@Example.com", "password123").is_none());
    assert!(find_test_account("demo@example.com", "PASSWORD123").is_none());
}

#[test]
fn find_test_account_does_not_cross_match_passwords() {
    assert!(find_test_account("demo@example.com", "testpass").is_none());
    assert!(find_test_account("test@user.com", "password123").is_none());
}

#[test]
fn find_test_account_empty_input_is_none() {
    assert!(find_test_account("", "").is_none());
}

// =============================================================
// verify_credentials
// =============================================================

#[test]
fn verify_credentials_returns_table_user() {
    let user = verify_credentials("demo@example.com", "password123").unwrap();
    assert_eq!(user.id, "demo-user-1");
    assert_eq!(user.email, "demo@example.com");
    assert_eq!(user.username.as_deref(), Some("demo"));
    assert_eq!(user.avatar.as_deref(), Some("/assets/users/john-doe.png"));
}

#[test]
fn verify_credentials_second_account() {
    let user = verify_credentials("test@user.com", "testpass").unwrap();
    assert_eq!(user.id, "test-user-2");
    assert_eq!(user.username.as_deref(), Some("testuser"));
}

#[test]
fn verify_credentials_rejects_unknown_email() {
    assert!(verify_credentials("nobody@example.com", "password123").is_none());
}

// =============================================================
// is_test_account
// =============================================================

#[test]
fn is_test_account_known_emails() {
    assert!(is_test_account("demo@example.com"));
    assert!(is_test_account("test@user.com"));
}

#[test]
fn is_test_account_unknown_email() {
    assert!(!is_test_account("new@example.com"));
    assert!(!is_test_account("DEMO@example.com"));
}

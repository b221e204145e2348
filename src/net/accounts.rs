//! Static test accounts and the credential lookups over them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for a user database. Matching is exact and case-sensitive on
//! both email and password; there is no hashing, throttling or lockout.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use super::types::User;

/// A hardcoded sign-in record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub user_id: &'static str,
    pub username: &'static str,
    pub avatar: &'static str,
}

impl TestAccount {
    /// Build the `User` this account signs in as.
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.user_id.to_owned(),
            email: self.email.to_owned(),
            username: Some(self.username.to_owned()),
            avatar: Some(self.avatar.to_owned()),
        }
    }
}

pub const TEST_ACCOUNTS: &[TestAccount] = &[
    TestAccount {
        email: "demo@example.com",
        password: "password123",
        user_id: "demo-user-1",
        username: "demo",
        avatar: "/assets/users/john-doe.png",
    },
    TestAccount {
        email: "test@user.com",
        password: "testpass",
        user_id: "test-user-2",
        username: "testuser",
        avatar: "/assets/users/jane-doe.png",
    },
];

/// First account whose email and password both match exactly.
#[must_use]
pub fn find_test_account(email: &str, password: &str) -> Option<&'static TestAccount> {
    TEST_ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
}

/// Resolve credentials to the matching account's user.
#[must_use]
pub fn verify_credentials(email: &str, password: &str) -> Option<User> {
    find_test_account(email, password).map(TestAccount::user)
}

/// Whether `email` already belongs to a test account.
#[must_use]
pub fn is_test_account(email: &str) -> bool {
    TEST_ACCOUNTS.iter().any(|account| account.email == email)
}

//! Mock Identity Provider
//!
//! Stand-in for a real identity backend: a fixed credential table checked
//! locally. Usernames match case-insensitively after trimming, passwords
//! match exactly. An optional simulated latency mimics the network
//! round-trip.

use std::time::Duration;

use crate::domain::entity::user::User;
use crate::domain::identity::{Credentials, IdentityProvider};
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::AuthResult;

/// One entry in the mock credential table
#[derive(Debug, Clone)]
pub struct MockRecord {
    pub username: String,
    pub password: String,
    pub user: User,
}

impl MockRecord {
    pub fn new(
        id: &str,
        username: &str,
        password: &str,
        name: &str,
        email: &str,
        role: UserRole,
    ) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            user: User::new(
                UserId::new(id),
                Email::new(email).expect("mock record email is well-formed"),
                name,
            )
            .with_role(role),
        }
    }
}

/// Mock identity provider
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    records: Vec<MockRecord>,
    latency: Duration,
}

impl MockIdentityProvider {
    /// Provider with the built-in credential table
    pub fn new() -> Self {
        Self {
            records: vec![
                MockRecord::new(
                    "1",
                    "admin",
                    "brie1192",
                    "Admin User",
                    "admin@example.com",
                    UserRole::Admin,
                ),
                MockRecord::new(
                    "2",
                    "john",
                    "brie1192",
                    "John Doe",
                    "john@example.com",
                    UserRole::User,
                ),
                MockRecord::new(
                    "3",
                    "Brie",
                    "brie1192",
                    "Jane Smith",
                    "jane@example.com",
                    UserRole::User,
                ),
                MockRecord::new(
                    "4",
                    "root",
                    "root123",
                    "Root User",
                    "root@example.com",
                    UserRole::User,
                ),
            ],
            latency: Duration::ZERO,
        }
    }

    /// Provider with a custom credential table
    pub fn with_records(records: Vec<MockRecord>) -> Self {
        Self {
            records,
            latency: Duration::ZERO,
        }
    }

    /// Simulate a network round-trip of `latency` per verify call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for MockIdentityProvider {
    async fn verify(&self, credentials: &Credentials) -> AuthResult<Option<User>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let username = credentials.username.trim().to_lowercase();
        let matched = self.records.iter().find(|record| {
            record.username.to_lowercase() == username && record.password == credentials.password
        });

        Ok(matched.map(|record| record.user.clone()))
    }
}

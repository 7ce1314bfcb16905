//! Identity Provider Seam
//!
//! The capability that turns credentials into a user. The app ships a mock
//! implementation (`infra::mock`); a real backend can be slotted in without
//! touching the state machine.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Login input. Never persisted; the password is wiped from memory when
/// the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity provider trait
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Verify credentials. `Ok(None)` means no matching identity.
    async fn verify(&self, credentials: &Credentials) -> AuthResult<Option<User>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("admin", "brie1192");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("brie1192"));
    }
}

//! Persisted Session Entity
//!
//! The record the session repository stores: the signed-in user plus the
//! opaque token backing the session. Both must be present for a session to
//! be restorable.

use crate::domain::entity::user::User;
use crate::domain::value_object::session_token::SessionToken;

/// A restorable session
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedSession {
    pub user: User,
    pub token: SessionToken,
}

impl PersistedSession {
    /// Open a fresh session for `user`
    pub fn open(user: User) -> Self {
        Self {
            user,
            token: SessionToken::issue(),
        }
    }
}

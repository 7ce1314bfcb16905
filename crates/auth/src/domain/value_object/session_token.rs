//! SessionToken Value Object
//!
//! Opaque token string stored alongside the user record. There is no real
//! backend, so `issue` fabricates a timestamped token the way the mock API
//! would hand one out. The token carries no claims and is never verified
//! beyond presence.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Fabricate a fresh token
    pub fn issue() -> Self {
        Self(format!("mock-token-{}", Utc::now().timestamp_millis()))
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

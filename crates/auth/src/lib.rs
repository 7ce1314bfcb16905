//! Auth Session Core
//!
//! Clean Architecture structure:
//! - `domain/` - entities, value objects, validation, provider/repository traits
//! - `application/` - the session state machine and its configuration
//! - `infra/` - key-value-backed session repository, mock identity provider
//!
//! ## Features
//! - Login form validation with field-level errors
//! - Login/logout/register against a pluggable identity provider
//! - Session persistence through an asynchronous key-value store
//! - Observable auth state (`user` / `is_authenticated` / `is_loading`)
//!
//! ## Concurrency Model
//! - At most one mutating operation in flight per manager; a second call
//!   is rejected with `AuthError::OperationInFlight`
//! - State snapshots are published over a `tokio::sync::watch` channel in
//!   the order the initiating calls were issued

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::manager::{AuthState, RegisterInput, SessionManager, Stage};
pub use domain::identity::{Credentials, IdentityProvider};
pub use domain::repository::SessionRepository;
pub use error::{AuthError, AuthResult};
pub use infra::kv::KvSessionRepository;
pub use infra::mock::MockIdentityProvider;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod validation {
    pub use crate::domain::validation::*;
}

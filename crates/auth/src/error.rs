//! Auth Error Types
//!
//! Error taxonomy for the session core. Validation errors are recoverable
//! and never mutate auth state; credential and storage errors revert the
//! state machine to `Unauthenticated` before they surface.

use storage::StorageError;
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Input failed format checks
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A login/logout/register call is already in flight
    #[error("Another authentication operation is in progress")]
    OperationInFlight,

    /// The identity provider did not answer within the configured timeout
    #[error("Identity provider timed out")]
    ProviderTimeout,

    /// Persistence failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Log the error with the appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            AuthError::ProviderTimeout => {
                tracing::error!("Identity provider timed out");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::OperationInFlight => {
                tracing::warn!("Rejected concurrent auth operation");
            }
            AuthError::Validation(e) => {
                tracing::debug!(error = %e, "Validation failed");
            }
        }
    }
}

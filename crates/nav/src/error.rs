//! Navigation Error Types
//!
//! Navigation failures are never fatal: callers log them and move on.

use thiserror::Error;

/// Navigation error variants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The navigation surface has not been attached yet
    #[error("Navigation surface is not ready")]
    NotReady,
}

//! Application Layer
//!
//! The session state machine and its configuration.

pub mod config;
pub mod manager;

// Re-exports
pub use config::AuthConfig;
pub use manager::{AuthState, RegisterInput, SessionManager, Stage};

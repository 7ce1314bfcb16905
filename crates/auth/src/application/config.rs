//! Application Configuration

use std::time::Duration;

/// Auth application configuration
///
/// `restore_session` resolves the startup policy explicitly: `true` trusts
/// a complete persisted user+token pair and resumes it, `false` wipes
/// storage on startup so every launch begins at the login screen. One
/// policy is chosen per manager instance.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Resume a persisted session on startup
    pub restore_session: bool,
    /// Upper bound on a single identity-provider call
    pub provider_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            restore_session: true,
            provider_timeout: Duration::from_secs(10),
        }
    }
}

impl AuthConfig {
    /// Policy variant that forces re-login on every launch
    pub fn fresh_each_launch() -> Self {
        Self {
            restore_session: false,
            ..Default::default()
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }
}

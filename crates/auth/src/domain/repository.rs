//! Repository Traits
//!
//! Interface for session persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::session::PersistedSession;
use crate::error::AuthResult;

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Load the persisted session, if a complete one exists
    async fn load(&self) -> AuthResult<Option<PersistedSession>>;

    /// Persist `session`, replacing any previous one
    async fn save(&self, session: &PersistedSession) -> AuthResult<()>;

    /// Remove any persisted session. Idempotent.
    async fn clear(&self) -> AuthResult<()>;
}

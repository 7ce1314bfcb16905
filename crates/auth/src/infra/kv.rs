//! Key-Value Session Repository
//!
//! Stores the session as two entries: the user record as JSON under
//! `auth:user` and the raw token under `auth:token`. A session only
//! restores when both are present; a user record that no longer parses is
//! treated as absent rather than failing startup.

use storage::{KeyValueStore, StorageError};

use crate::domain::entity::session::PersistedSession;
use crate::domain::entity::user::User;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

const USER_KEY: &str = "auth:user";
const TOKEN_KEY: &str = "auth:token";

/// Session repository over any key-value store
#[derive(Clone)]
pub struct KvSessionRepository<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> KvSessionRepository<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> SessionRepository for KvSessionRepository<S>
where
    S: KeyValueStore + Sync,
{
    async fn load(&self) -> AuthResult<Option<PersistedSession>> {
        let Some(raw_user) = self.store.get(USER_KEY).await? else {
            return Ok(None);
        };
        let Some(token) = self.store.get(TOKEN_KEY).await? else {
            return Ok(None);
        };

        let user: User = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "Persisted user record is corrupt; ignoring it");
                return Ok(None);
            }
        };

        Ok(Some(PersistedSession {
            user,
            token: SessionToken::new(token),
        }))
    }

    async fn save(&self, session: &PersistedSession) -> AuthResult<()> {
        let raw_user = serde_json::to_string(&session.user).map_err(StorageError::from)?;
        self.store.set(USER_KEY, &raw_user).await?;
        self.store.set(TOKEN_KEY, session.token.as_str()).await?;
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.store.clear(&[USER_KEY, TOKEN_KEY]).await?;
        Ok(())
    }
}

//! Session Manager
//!
//! The auth state machine. Stages:
//!
//! ```text
//! Initializing -> Unauthenticated <-> Authenticating -> Authenticated
//!                        ^                                   |
//!                        +------------ LoggingOut <----------+
//! ```
//!
//! Snapshots of `{user, is_authenticated, is_loading}` are published over a
//! watch channel after every transition, in the order the initiating calls
//! were issued. At most one mutating operation runs at a time; a second
//! call while one is in flight is rejected with
//! [`AuthError::OperationInFlight`].

use tokio::sync::{Mutex, MutexGuard, watch};
use tokio::time::timeout;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::PersistedSession;
use crate::domain::entity::user::User;
use crate::domain::identity::{Credentials, IdentityProvider};
use crate::domain::repository::SessionRepository;
use crate::domain::validation;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// State machine stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initializing,
    Unauthenticated,
    Authenticating,
    Authenticated,
    LoggingOut,
}

impl Stage {
    /// Whether an operation is in flight in this stage
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Stage::Initializing | Stage::Authenticating | Stage::LoggingOut
        )
    }
}

/// Published auth state snapshot
///
/// Invariant: `is_authenticated` holds exactly when `user` is present, and
/// `is_loading` is true only while an operation is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    /// State at process start, before storage has been consulted
    pub fn initializing() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    fn of(stage: Stage, user: &Option<User>) -> Self {
        Self {
            user: user.clone(),
            is_authenticated: stage == Stage::Authenticated,
            is_loading: stage.is_transient(),
        }
    }
}

/// Registration input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

struct Inner {
    stage: Stage,
    user: Option<User>,
}

/// Auth session manager
pub struct SessionManager<P, R>
where
    P: IdentityProvider,
    R: SessionRepository,
{
    provider: P,
    repo: R,
    config: AuthConfig,
    inner: Mutex<Inner>,
    tx: watch::Sender<AuthState>,
}

impl<P, R> SessionManager<P, R>
where
    P: IdentityProvider + Send + Sync,
    R: SessionRepository + Send + Sync,
{
    pub fn new(provider: P, repo: R, config: AuthConfig) -> Self {
        let (tx, _rx) = watch::channel(AuthState::initializing());
        Self {
            provider,
            repo,
            config,
            inner: Mutex::new(Inner {
                stage: Stage::Initializing,
                user: None,
            }),
            tx,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }

    /// Consult storage and settle into `Authenticated` or `Unauthenticated`
    ///
    /// Under the restore policy a complete persisted user+token pair is
    /// trusted; under the fresh-launch policy storage is wiped so every
    /// launch starts at the login screen. A storage failure degrades to
    /// `Unauthenticated` rather than blocking startup.
    pub async fn initialize(&self) -> AuthResult<()> {
        let mut inner = self.begin(Stage::Initializing)?;

        if self.config.restore_session {
            match self.repo.load().await {
                Ok(Some(session)) => {
                    tracing::info!(user = %session.user.id, "Restored persisted session");
                    inner.stage = Stage::Authenticated;
                    inner.user = Some(session.user);
                }
                Ok(None) => {
                    inner.stage = Stage::Unauthenticated;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Session restore failed; starting unauthenticated");
                    inner.stage = Stage::Unauthenticated;
                }
            }
        } else {
            if let Err(err) = self.repo.clear().await {
                tracing::warn!(error = %err, "Startup session clear failed");
            }
            inner.stage = Stage::Unauthenticated;
        }

        self.publish(&inner);
        Ok(())
    }

    /// Verify credentials, persist the session, transition to `Authenticated`
    ///
    /// No match leaves nothing persisted and ends `Unauthenticated`. A
    /// persistence failure after a successful match rolls both storage and
    /// in-memory state back so neither side is left without the other.
    pub async fn login(&self, credentials: Credentials) -> AuthResult<User> {
        let mut inner = self.begin(Stage::Authenticating)?;

        match self.authenticate(&credentials).await {
            Ok(user) => {
                inner.stage = Stage::Authenticated;
                inner.user = Some(user.clone());
                self.publish(&inner);
                tracing::info!(user = %user.id, name = %user.name, "User signed in");
                Ok(user)
            }
            Err(err) => {
                inner.stage = Stage::Unauthenticated;
                self.publish(&inner);
                Err(err)
            }
        }
    }

    /// Clear the persisted session and end `Unauthenticated`
    ///
    /// Fails open: a storage failure still ends the in-memory session, but
    /// the error is surfaced to the caller.
    pub async fn logout(&self) -> AuthResult<()> {
        let mut inner = self.begin(Stage::LoggingOut)?;

        let cleared = self.repo.clear().await;
        inner.stage = Stage::Unauthenticated;
        self.publish(&inner);

        match cleared {
            Ok(()) => {
                tracing::info!("User signed out");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Session clear failed; signed out in memory anyway");
                Err(err)
            }
        }
    }

    /// Create a fresh user, persist it, transition to `Authenticated`
    ///
    /// Format failures surface as `AuthError::Validation` without touching
    /// auth state. The rollback policy matches `login`.
    pub async fn register(&self, input: RegisterInput) -> AuthResult<User> {
        let email = Email::new(&input.email)?;
        if let Some(err) = validation::validate_password(&input.password) {
            return Err(err.into());
        }

        let mut inner = self.begin(Stage::Authenticating)?;
        let user = User::new(UserId::generate(), email, input.name);

        match self.persist(PersistedSession::open(user.clone())).await {
            Ok(()) => {
                inner.stage = Stage::Authenticated;
                inner.user = Some(user.clone());
                self.publish(&inner);
                tracing::info!(user = %user.id, "User registered");
                Ok(user)
            }
            Err(err) => {
                inner.stage = Stage::Unauthenticated;
                self.publish(&inner);
                Err(err)
            }
        }
    }

    /// Acquire the single-flight lock and enter a transient stage
    fn begin(&self, stage: Stage) -> AuthResult<MutexGuard<'_, Inner>> {
        let mut inner = self
            .inner
            .try_lock()
            .map_err(|_| AuthError::OperationInFlight)?;
        inner.stage = stage;
        inner.user = None;
        self.publish(&inner);
        Ok(inner)
    }

    fn publish(&self, inner: &Inner) {
        self.tx.send_replace(AuthState::of(inner.stage, &inner.user));
    }

    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<User> {
        let user = self
            .verify(credentials)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        self.persist(PersistedSession::open(user.clone())).await?;
        Ok(user)
    }

    /// Provider call bounded by the configured timeout so a hung provider
    /// cannot leave `is_loading` stuck
    async fn verify(&self, credentials: &Credentials) -> AuthResult<Option<User>> {
        match timeout(self.config.provider_timeout, self.provider.verify(credentials)).await {
            Ok(result) => result,
            Err(_) => Err(AuthError::ProviderTimeout),
        }
    }

    /// Persist, undoing any partial write on failure so storage never holds
    /// a session the in-memory state does not back
    async fn persist(&self, session: PersistedSession) -> AuthResult<()> {
        if let Err(err) = self.repo.save(&session).await {
            if let Err(clear_err) = self.repo.clear().await {
                tracing::warn!(error = %clear_err, "Partial session cleanup failed");
            }
            return Err(err);
        }
        Ok(())
    }
}

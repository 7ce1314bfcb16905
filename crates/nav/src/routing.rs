//! Auth-Driven Routing
//!
//! Background task keeping the navigator in step with auth state. Loading
//! snapshots are ignored; every settled snapshot requests a reset to
//! `Dashboard` (authenticated) or `Login` (unauthenticated). Outcomes are
//! traced and never propagated - a navigation failure must not take the
//! app down.

use auth::AuthState;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::navigator::{Navigator, ResetOutcome};
use crate::route::Route;

/// Handle to the routing task. Dropping it cancels the task, so a
/// torn-down surface never receives a stale reset.
pub struct RoutingHandle {
    task: JoinHandle<()>,
}

impl RoutingHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RoutingHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the routing task over a stream of auth state snapshots
pub fn spawn_auth_routing(
    navigator: Navigator,
    mut states: watch::Receiver<AuthState>,
) -> RoutingHandle {
    let task = tokio::spawn(async move {
        loop {
            let settled = {
                let state = states.borrow_and_update();
                (!state.is_loading).then_some(state.is_authenticated)
            };

            if let Some(authenticated) = settled {
                let target = if authenticated {
                    Route::Dashboard
                } else {
                    Route::Login
                };
                match navigator.request_reset(target) {
                    ResetOutcome::Applied => {
                        tracing::info!(route = %target, "Auth route reset applied");
                    }
                    ResetOutcome::Deferred => {
                        tracing::debug!(route = %target, "Auth route reset deferred");
                    }
                    ResetOutcome::Skipped => {}
                }
            }

            if states.changed().await.is_err() {
                // Auth store dropped; nothing left to track.
                break;
            }
        }
    });

    RoutingHandle { task }
}

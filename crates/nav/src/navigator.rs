//! Navigator
//!
//! Clonable handle over the route stack. Resets requested while the
//! surface is not ready, or while an interaction is in flight, are buffered
//! and applied once the navigator becomes idle - the last requested target
//! wins.

use std::sync::{Arc, Mutex};

use crate::error::NavError;
use crate::route::Route;

/// What happened to a reset request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The stack was replaced with the single target root
    Applied,
    /// The target was already current; nothing changed
    Skipped,
    /// Buffered until the surface is ready and interactions settle
    Deferred,
}

struct NavState {
    stack: Vec<Route>,
    ready: bool,
    interactions: u32,
    pending_reset: Option<Route>,
}

/// Navigation controller handle
#[derive(Clone)]
pub struct Navigator {
    state: Arc<Mutex<NavState>>,
}

impl Navigator {
    /// A navigator whose surface is not yet attached
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(NavState {
                stack: Vec::new(),
                ready: false,
                interactions: 0,
                pending_reset: None,
            })),
        }
    }

    /// The active route, if any
    pub fn current(&self) -> Option<Route> {
        self.lock().stack.last().copied()
    }

    /// Back-stack depth
    pub fn depth(&self) -> usize {
        self.lock().stack.len()
    }

    pub fn is_ready(&self) -> bool {
        self.lock().ready
    }

    /// Attach the surface; applies any buffered reset
    pub fn set_ready(&self) {
        let mut state = self.lock();
        state.ready = true;
        Self::apply_pending(&mut state);
    }

    /// Push a route. Pushing the current route again is a no-op.
    pub fn navigate(&self, route: Route) -> Result<(), NavError> {
        let mut state = self.lock();
        if !state.ready {
            return Err(NavError::NotReady);
        }
        if state.stack.last() == Some(&route) {
            return Ok(());
        }
        state.stack.push(route);
        tracing::debug!(route = %route, "Navigated");
        Ok(())
    }

    /// Pop back one screen, never past the root. Returns the new current
    /// route, or `None` when already at the root.
    pub fn go_back(&self) -> Option<Route> {
        let mut state = self.lock();
        if state.stack.len() < 2 {
            return None;
        }
        state.stack.pop();
        state.stack.last().copied()
    }

    /// Replace the whole stack with `route` as the sole root
    ///
    /// Skipped when `route` is already current; deferred while the surface
    /// is not ready or an interaction is in flight.
    pub fn request_reset(&self, route: Route) -> ResetOutcome {
        let mut state = self.lock();
        if !state.ready || state.interactions > 0 {
            state.pending_reset = Some(route);
            return ResetOutcome::Deferred;
        }
        state.pending_reset = None;
        if state.stack.last() == Some(&route) {
            return ResetOutcome::Skipped;
        }
        state.stack = vec![route];
        tracing::debug!(route = %route, "Route reset applied");
        ResetOutcome::Applied
    }

    /// Mark a UI interaction as in flight. Resets requested while any
    /// guard is alive are deferred until the last one drops.
    pub fn begin_interaction(&self) -> InteractionGuard {
        self.lock().interactions += 1;
        InteractionGuard {
            navigator: self.clone(),
        }
    }

    fn end_interaction(&self) {
        let mut state = self.lock();
        state.interactions = state.interactions.saturating_sub(1);
        Self::apply_pending(&mut state);
    }

    fn apply_pending(state: &mut NavState) {
        if !state.ready || state.interactions > 0 {
            return;
        }
        if let Some(route) = state.pending_reset.take() {
            if state.stack.last() == Some(&route) {
                return;
            }
            state.stack = vec![route];
            tracing::debug!(route = %route, "Deferred route reset applied");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NavState> {
        self.state.lock().expect("navigator lock poisoned")
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII marker for an in-flight UI interaction
pub struct InteractionGuard {
    navigator: Navigator,
}

impl Drop for InteractionGuard {
    fn drop(&mut self) {
        self.navigator.end_interaction();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_navigator() -> Navigator {
        let nav = Navigator::new();
        nav.set_ready();
        nav
    }

    #[test]
    fn test_navigate_requires_ready_surface() {
        let nav = Navigator::new();
        assert_eq!(nav.navigate(Route::Dashboard), Err(NavError::NotReady));
        nav.set_ready();
        assert_eq!(nav.navigate(Route::Dashboard), Ok(()));
        assert_eq!(nav.current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_reset_replaces_whole_stack() {
        let nav = ready_navigator();
        nav.request_reset(Route::Dashboard);
        nav.navigate(Route::Banking).unwrap();
        nav.navigate(Route::Ideas).unwrap();

        assert_eq!(nav.request_reset(Route::Login), ResetOutcome::Applied);
        assert_eq!(nav.current(), Some(Route::Login));
        assert_eq!(nav.depth(), 1);
        // Back button cannot leave the new root.
        assert_eq!(nav.go_back(), None);
    }

    #[test]
    fn test_reset_to_current_route_is_skipped() {
        let nav = ready_navigator();
        assert_eq!(nav.request_reset(Route::Dashboard), ResetOutcome::Applied);
        assert_eq!(nav.request_reset(Route::Dashboard), ResetOutcome::Skipped);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_reset_buffers_until_surface_ready() {
        let nav = Navigator::new();
        assert_eq!(nav.request_reset(Route::Dashboard), ResetOutcome::Deferred);
        assert_eq!(nav.current(), None);

        nav.set_ready();
        assert_eq!(nav.current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_last_buffered_target_wins() {
        let nav = Navigator::new();
        nav.request_reset(Route::Dashboard);
        nav.request_reset(Route::Login);
        nav.set_ready();
        assert_eq!(nav.current(), Some(Route::Login));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_reset_defers_behind_interactions() {
        let nav = ready_navigator();
        nav.request_reset(Route::Login);

        let guard = nav.begin_interaction();
        assert_eq!(nav.request_reset(Route::Dashboard), ResetOutcome::Deferred);
        assert_eq!(nav.current(), Some(Route::Login));

        drop(guard);
        assert_eq!(nav.current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_nested_interactions_apply_on_last_drop() {
        let nav = ready_navigator();
        nav.request_reset(Route::Login);

        let outer = nav.begin_interaction();
        let inner = nav.begin_interaction();
        nav.request_reset(Route::Dashboard);

        drop(inner);
        assert_eq!(nav.current(), Some(Route::Login));
        drop(outer);
        assert_eq!(nav.current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_go_back_stops_at_root() {
        let nav = ready_navigator();
        nav.request_reset(Route::Dashboard);
        nav.navigate(Route::Links).unwrap();

        assert_eq!(nav.go_back(), Some(Route::Dashboard));
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_pushing_current_route_is_a_noop() {
        let nav = ready_navigator();
        nav.request_reset(Route::Dashboard);
        nav.navigate(Route::Banking).unwrap();
        nav.navigate(Route::Banking).unwrap();
        assert_eq!(nav.depth(), 2);
    }
}

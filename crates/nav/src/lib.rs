//! Navigation Controller
//!
//! Holds the single active route and its back-stack, and keeps the route in
//! step with auth state:
//! - becoming authenticated resets the stack to `Dashboard` as the sole root
//! - becoming unauthenticated resets the stack to `Login` as the sole root
//!
//! Resets are skipped when the target is already current, deferred while a
//! UI interaction is in flight, and buffered until the navigation surface
//! reports ready. The auth-driven routing task is cancellable through its
//! handle so a torn-down surface never receives a stale reset.

pub mod error;
pub mod navigator;
pub mod route;
pub mod routing;

pub use error::NavError;
pub use navigator::{InteractionGuard, Navigator, ResetOutcome};
pub use route::Route;
pub use routing::{RoutingHandle, spawn_auth_routing};

//! Domain Layer
//!
//! Entities, value objects, validation rules, and the trait seams the
//! application layer depends on.

pub mod entity;
pub mod identity;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::{session::PersistedSession, user::User};
pub use identity::{Credentials, IdentityProvider};
pub use repository::SessionRepository;

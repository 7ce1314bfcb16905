//! Infrastructure Layer
//!
//! Key-value-backed session persistence and the mock identity provider.

pub mod kv;
pub mod mock;

pub use kv::KvSessionRepository;
pub use mock::MockIdentityProvider;

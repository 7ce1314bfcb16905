//! Persistent Key-Value Storage
//!
//! Thin asynchronous key-value contract over opaque string keys, plus the
//! two backends the app ships with:
//! - [`MemoryStore`] - process-local map, used by tests and previews
//! - [`FileStore`] - single JSON file on disk, the durable backend
//!
//! Callers treat every failure as "operation failed" and do not retry;
//! `remove` and `clear` are idempotent.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

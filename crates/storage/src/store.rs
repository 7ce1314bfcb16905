//! Key-Value Store Trait
//!
//! Interface for persistent key-value storage. Implementations live in
//! sibling modules; consumers depend only on this trait.

use crate::error::StorageResult;

/// Asynchronous key-value store over opaque string keys
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete the entry under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Delete every entry in `keys`. Missing keys are skipped.
    async fn clear(&self, keys: &[&str]) -> StorageResult<()>;
}

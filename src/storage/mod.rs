// src/storage/mod.rs

//! Persistent key-value storage.
//!
//! Values are JSON text. The score ledger and profile store only see the
//! [`KeyValueStore`] trait, so they run the same against [`MemoryStore`] in
//! tests and [`FileStore`] in the binary.

pub mod file;
pub mod memory;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppResult;

pub use file::FileStore;
pub use memory::MemoryStore;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// All keys currently stored, in ascending order.
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// Reads and deserializes a stored value.
///
/// An absent key is `Ok(None)`; a value that does not parse is a storage error.
pub fn read_json<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

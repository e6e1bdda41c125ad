//! Durable key-value storage for the studio storefront.
//!
//! Provides the `Storage` trait the cart persistence adapter writes through,
//! with two backends: a file-backed store for real sessions and an in-memory
//! store for tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use studio_store::{MemoryStore, Storage, StorageExt};
//!
//! let store = MemoryStore::new();
//! store.set_json("cart", &cart)?;
//! let cart: Option<Cart> = store.get_json("cart")?;
//! ```

mod error;
mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A durable key-value store holding raw byte payloads.
///
/// Object-safe so callers can hold a `Box<dyn Storage>` and swap backends.
pub trait Storage {
    /// Read the payload stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `bytes` under `key`, replacing any previous payload.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Remove the payload under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// JSON convenience methods available on every `Storage` backend.
pub trait StorageExt: Storage {
    /// Read and deserialize the JSON value stored under `key`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.read(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and write it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.write(key, &bytes)
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, MemoryStore, Storage, StorageExt, StoreError};
}

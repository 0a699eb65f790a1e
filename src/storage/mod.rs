//! Persistent Store
//!
//! A small key-value store holding serialized JSON blobs, the equivalent of
//! browser local storage. Every write replaces the whole value of a key.

use mockall::automock;
use serde::{Serialize, de::DeserializeOwned};

pub mod errors;
mod file;
mod memory;

pub use errors::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the serialized cart.
pub const CART_KEY: &str = "cart-state";

/// Key holding the last submitted order.
pub const ORDER_KEY: &str = "order-state";

/// Key-value store of serialized values.
#[automock]
pub trait Store: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error when serialization or the underlying write fails.
pub fn save_json<T>(store: &dyn Store, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;

    store.set(key, &json)
}

/// Load and deserialize the JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error when the read fails or the stored value does not
/// deserialize into `T`.
pub fn load_json<T>(store: &dyn Store, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
{
    store
        .get(key)?
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(StoreError::from)
}

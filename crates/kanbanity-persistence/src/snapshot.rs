//! Best-effort snapshot load/save.
//!
//! Neither function reports an error to the caller. A failed or corrupt read
//! yields the fallback; a failed write is logged and reported as `false`,
//! leaving the in-memory value authoritative.

use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load the JSON snapshot under `key`, or `fallback` when it is missing,
/// unreadable or unparsable.
pub fn load<T, S>(store: &S, key: &str, fallback: T) -> T
where
    T: Serialize + DeserializeOwned + Send + Sync,
    S: KeyValueStore + ?Sized,
{
    load_with(store, &JsonSerializer, key, fallback)
}

pub fn load_with<T, S, F>(store: &S, serializer: &F, key: &str, fallback: T) -> T
where
    T: Send + Sync,
    S: KeyValueStore + ?Sized,
    F: Serializer<T> + ?Sized,
{
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::debug!("No snapshot stored under '{}', using fallback", key);
            return fallback;
        }
        Err(e) => {
            tracing::warn!("Failed to read snapshot '{}': {}", key, e);
            return fallback;
        }
    };

    match serializer.deserialize(&bytes) {
        Ok(value) => {
            tracing::info!("Loaded snapshot '{}' ({} bytes)", key, bytes.len());
            value
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable snapshot '{}': {}", key, e);
            fallback
        }
    }
}

/// Serialize `value` as JSON and write it under `key`.
/// Returns whether the write went through.
pub fn save<T, S>(store: &S, key: &str, value: &T) -> bool
where
    T: Serialize + DeserializeOwned + Send + Sync,
    S: KeyValueStore + ?Sized,
{
    save_with(store, &JsonSerializer, key, value)
}

pub fn save_with<T, S, F>(store: &S, serializer: &F, key: &str, value: &T) -> bool
where
    T: Send + Sync,
    S: KeyValueStore + ?Sized,
    F: Serializer<T> + ?Sized,
{
    let bytes = match serializer.serialize(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to serialize snapshot '{}': {}", key, e);
            return false;
        }
    };

    match store.set(key, &bytes) {
        Ok(()) => {
            tracing::debug!("Saved snapshot '{}' ({} bytes)", key, bytes.len());
            true
        }
        Err(e) => {
            tracing::warn!("Failed to save snapshot '{}': {}", key, e);
            false
        }
    }
}

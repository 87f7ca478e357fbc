use kanbanity_core::KanbanResult;
use std::sync::Arc;

/// Durable key-value storage holding serialized snapshots.
///
/// Receivers are `&self`; implementations synchronise internally. Values
/// are whole snapshots, so `set` always overwrites.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when nothing is stored
    fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> KanbanResult<()>;

    fn contains(&self, key: &str) -> KanbanResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

macro_rules! forward_key_value_store {
    ($($wrapper:ident),+) => {$(
        impl<S: KeyValueStore + ?Sized> KeyValueStore for $wrapper<S> {
            fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>> {
                (**self).get(key)
            }

            fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()> {
                (**self).set(key, value)
            }

            fn remove(&self, key: &str) -> KanbanResult<()> {
                (**self).remove(key)
            }

            fn contains(&self, key: &str) -> KanbanResult<bool> {
                (**self).contains(key)
            }
        }
    )+};
}

forward_key_value_store!(Box, Arc);

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T>;
}

use crate::traits::KeyValueStore;
use kanbanity_core::{KanbanError, KanbanResult};
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-process store, optionally capped at a byte quota.
///
/// The quota counts key and value bytes of every entry. A disabled store
/// fails every access, like browser storage turned off by the user.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn used_bytes(&self) -> usize {
        self.entries
            .lock()
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    fn ensure_enabled(&self) -> KanbanResult<()> {
        if self.disabled {
            return Err(KanbanError::Storage("storage is disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>> {
        self.ensure_enabled()?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()> {
        self.ensure_enabled()?;
        let mut entries = self.entries.lock();

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(existing, bytes)| existing.len() + bytes.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(KanbanError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> KanbanResult<()> {
        self.ensure_enabled()?;
        self.entries.lock().remove(key);
        Ok(())
    }
}

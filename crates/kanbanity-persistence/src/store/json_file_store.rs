use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use kanbanity_core::{KanbanError, KanbanResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One JSON file per key under a base directory (`<dir>/<key>.json`)
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first write
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path the value for `key` is stored at.
    /// Keys are limited to ASCII letters, digits, `.`, `_` and `-` so they
    /// can never escape the base directory.
    pub fn path_for(&self, key: &str) -> KanbanResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(KanbanError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>> {
        AtomicWriter::read_if_exists(&self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        AtomicWriter::write_atomic(&path, value)?;

        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> KanbanResult<()> {
        match std::fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> KanbanResult<bool> {
        Ok(self.path_for(key)?.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.set("kanbanity-board", b"{}").unwrap();

        assert_eq!(store.get("kanbanity-board").unwrap(), Some(b"{}".to_vec()));
        assert!(dir.path().join("kanbanity-board.json").is_file());
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert_eq!(store.get("nothing").unwrap(), None);
        assert!(!store.contains("nothing").unwrap());
    }

    #[test]
    fn test_creates_directory_on_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("kanbanity");
        let store = JsonFileStore::new(&nested);

        store.set("board", b"[]").unwrap();

        assert!(nested.join("board.json").is_file());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.set("board", b"{}").unwrap();
        store.remove("board").unwrap();
        store.remove("board").unwrap();

        assert!(!store.contains("board").unwrap());
    }

    #[test]
    fn test_rejects_unsafe_keys() {
        let store = JsonFileStore::new("/tmp/unused");

        for key in ["", "../escape", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(store.path_for(key), Err(KanbanError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
        assert!(store.path_for("board_v2.backup-1").is_ok());
    }
}

use kanbanity_core::KanbanResult;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically.
    /// The temp file lives in the target's directory so the rename stays on
    /// one filesystem.
    pub fn write_atomic(path: &Path, data: &[u8]) -> KanbanResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file, `None` if it does not exist
    pub fn read_if_exists(path: &Path) -> KanbanResult<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage quota exceeded for key '{key}': {needed} bytes requested, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}


use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackListError {
    #[error("could not read from storage: {0}")]
    StorageRead(#[source] std::io::Error),

    #[error("could not write to storage: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("section [{0}] not found in store file")]
    SectionNotFound(String),

    #[error("input cannot be empty")]
    EmptyInput,

    #[error("no item numbered {index}: the list has {len} item(s)")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TrackListError>;

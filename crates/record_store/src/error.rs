use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failed-load signal surfaced to the caller. The analytics core never
/// retries; retry/backoff policy belongs to whoever owns the fetch.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to load records: {0}")]
    Load(#[from] std::io::Error),

    #[error("Malformed records data: {0}")]
    Malformed(#[from] serde_json::Error),
}

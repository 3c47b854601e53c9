/// Failure to read or write the persisted history.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("history storage is unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("stored history is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode the history: {0}")]
    Encode(#[source] serde_json::Error),
}

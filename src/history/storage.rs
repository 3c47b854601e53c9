//! Persistence port of the history store.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::history::{error::PersistenceError, record::BillHistoryRecord};

/// Storage holding the whole history collection as a single blob.
#[async_trait]
pub trait HistoryStorage: Send + Sync {
    /// Read the stored collection. Nothing stored yet means an empty collection.
    async fn read_all(&self) -> Result<Vec<BillHistoryRecord>, PersistenceError>;

    /// Replace the stored collection.
    async fn write_all(&self, records: &[BillHistoryRecord]) -> Result<(), PersistenceError>;
}

fn decode(blob: &[u8]) -> Result<Vec<BillHistoryRecord>, PersistenceError> {
    if blob.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(blob).map_err(PersistenceError::Corrupt)
}

fn encode(records: &[BillHistoryRecord]) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec(records).map_err(PersistenceError::Encode)
}

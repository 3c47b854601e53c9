use std::{
    io,
    sync::{
        Mutex,
        PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;

use crate::history::{
    error::PersistenceError,
    record::BillHistoryRecord,
    storage::{HistoryStorage, decode, encode},
};

/// In-process storage, keeps the encoded collection exactly as a file would.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<Vec<u8>>>,
    is_unavailable: AtomicBool,
}

impl MemoryStorage {
    /// Storage pre-filled with arbitrary contents, possibly not even valid JSON.
    pub fn with_blob(blob: impl Into<Vec<u8>>) -> Self {
        Self { blob: Mutex::new(Some(blob.into())), is_unavailable: AtomicBool::new(false) }
    }

    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the contents behind the store's back, as another client or a hand edit would.
    pub fn set_blob(&self, blob: impl Into<Vec<u8>>) {
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.into());
    }

    /// Make every subsequent operation fail, or recover.
    pub fn set_unavailable(&self, is_unavailable: bool) {
        self.is_unavailable.store(is_unavailable, Ordering::Relaxed);
    }

    fn ensure_available(&self) -> Result<(), PersistenceError> {
        if self.is_unavailable.load(Ordering::Relaxed) {
            Err(io::Error::other("memory storage is switched off").into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HistoryStorage for MemoryStorage {
    async fn read_all(&self) -> Result<Vec<BillHistoryRecord>, PersistenceError> {
        self.ensure_available()?;
        self.blob().map_or_else(|| Ok(Vec::new()), |blob| decode(&blob))
    }

    async fn write_all(&self, records: &[BillHistoryRecord]) -> Result<(), PersistenceError> {
        self.ensure_available()?;
        let blob = encode(records)?;
        self.set_blob(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty() {
        assert!(MemoryStorage::default().read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_blob_reads_empty() {
        assert!(MemoryStorage::with_blob("  \n").read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_blob() {
        let storage = MemoryStorage::with_blob("{\"id\":");
        assert!(matches!(storage.read_all().await, Err(PersistenceError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_set_blob() {
        let storage = MemoryStorage::default();
        storage.write_all(&[]).await.unwrap();
        storage.set_blob("not json");
        assert!(matches!(storage.read_all().await, Err(PersistenceError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_unavailable() {
        let storage = MemoryStorage::default();
        storage.set_unavailable(true);
        assert!(matches!(storage.read_all().await, Err(PersistenceError::Unavailable(_))));
        assert!(matches!(storage.write_all(&[]).await, Err(PersistenceError::Unavailable(_))));
        storage.set_unavailable(false);
        storage.write_all(&[]).await.unwrap();
        assert_eq!(storage.blob().as_deref(), Some(b"[]".as_slice()));
    }
}

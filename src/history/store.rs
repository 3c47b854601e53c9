use std::{collections::HashSet, iter};

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{
    billing::{BillInputs, BillResult},
    history::{
        CAPACITY,
        error::PersistenceError,
        record::{BillHistoryRecord, RecordId},
        storage::HistoryStorage,
    },
    prelude::*,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// The collection is being read from the storage.
    Loading,

    Ready,
}

/// History of saved bills over a [`HistoryStorage`].
///
/// Keeps an in-memory mirror of the stored collection. Every mutation reads the stored
/// collection first, so changes made by another client in between are not lost, and the mirror
/// is then replaced by what was actually written. A failed operation leaves the mirror as it was.
pub struct HistoryStore<S> {
    storage: S,
    records: Vec<BillHistoryRecord>,
    state: LoadState,
    issued_ids: HashSet<RecordId>,
    clock: fn() -> DateTime<Utc>,
}

impl<S: HistoryStorage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            records: Vec::new(),
            state: LoadState::Loading,
            issued_ids: HashSet::new(),
            clock: Utc::now,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Records as of the last successful operation, newest first.
    pub fn records(&self) -> &[BillHistoryRecord] {
        &self.records
    }

    pub fn find(&self, id: &RecordId) -> Option<&BillHistoryRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// Re-read the collection from the storage.
    #[instrument(skip_all)]
    pub async fn load(&mut self) -> Result<&[BillHistoryRecord], PersistenceError> {
        self.state = LoadState::Loading;
        let outcome = self.storage.read_all().await;
        self.state = LoadState::Ready;
        match outcome {
            Ok(records) => {
                self.records = newest_first(records);
                debug!(n_records = self.records.len(), "loaded");
                Ok(&self.records)
            }
            Err(error) => {
                error!("failed to load the history: {error}");
                Err(error)
            }
        }
    }

    /// Persist the computed bill as a new record, evicting the oldest ones above the capacity.
    #[instrument(skip_all, fields(mode = %inputs.mode))]
    pub async fn save(
        &mut self,
        inputs: &BillInputs,
        result: &BillResult,
    ) -> Result<BillHistoryRecord, PersistenceError> {
        let outcome = self.try_save(inputs, result).await;
        match &outcome {
            Ok(record) => info!(id = %record.id, "saved the bill"),
            Err(error) => error!("failed to save the bill: {error}"),
        }
        outcome
    }

    async fn try_save(
        &mut self,
        inputs: &BillInputs,
        result: &BillResult,
    ) -> Result<BillHistoryRecord, PersistenceError> {
        let stored = self.storage.read_all().await?;
        let id = self.allocate_id(&stored);
        let record = BillHistoryRecord::new(id, (self.clock)(), inputs, result);
        let updated = iter::once(record.clone())
            .chain(newest_first(stored))
            .take(CAPACITY)
            .collect_vec();
        self.storage.write_all(&updated).await?;
        self.records = updated;
        Ok(record)
    }

    /// Remove the record. An unknown id is not an error and leaves the collection untouched.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &RecordId) -> Result<(), PersistenceError> {
        let outcome = self.try_delete(id).await;
        if let Err(error) = &outcome {
            error!("failed to delete the bill: {error}");
        }
        outcome
    }

    async fn try_delete(&mut self, id: &RecordId) -> Result<(), PersistenceError> {
        let mut stored = self.storage.read_all().await?;
        let n_stored = stored.len();
        stored.retain(|record| record.id != *id);
        if stored.len() == n_stored {
            debug!("no such record");
        } else {
            self.storage.write_all(&stored).await?;
            info!("deleted the bill");
        }
        self.records = newest_first(stored);
        Ok(())
    }

    /// Remove all records.
    #[instrument(skip_all)]
    pub async fn clear(&mut self) -> Result<(), PersistenceError> {
        match self.storage.write_all(&[]).await {
            Ok(()) => {
                self.records.clear();
                info!("cleared the history");
                Ok(())
            }
            Err(error) => {
                error!("failed to clear the history: {error}");
                Err(error)
            }
        }
    }

    /// Fresh identifier, distinct from every stored one and from every one issued before.
    fn allocate_id(&mut self, stored: &[BillHistoryRecord]) -> RecordId {
        loop {
            let id = RecordId::random();
            if !stored.iter().any(|record| record.id == id) && self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Stable, so records with equal timestamps keep their stored order.
fn newest_first(records: Vec<BillHistoryRecord>) -> Vec<BillHistoryRecord> {
    records.into_iter().sorted_by(|lhs, rhs| rhs.created_at.cmp(&lhs.created_at)).collect()
}

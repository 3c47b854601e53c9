//! Bounded, newest-first history of computed bills.

pub mod error;
pub mod record;
pub mod storage;
pub mod store;

pub use self::{
    error::PersistenceError,
    record::{BillHistoryRecord, RecordId},
    storage::{HistoryStorage, file::FileStorage, memory::MemoryStorage},
    store::{HistoryStore, LoadState},
};

/// Maximum number of records kept, older ones are evicted on save.
pub const CAPACITY: usize = 50;

/// Well-known key the whole collection is stored under.
pub const STORAGE_KEY: &str = "bill_history";

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    history::{
        STORAGE_KEY,
        error::PersistenceError,
        record::BillHistoryRecord,
        storage::{HistoryStorage, decode, encode},
    },
    prelude::*,
};

/// JSON file on the local file system.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage file named after the well-known storage key.
    pub fn in_directory(directory: &Path) -> Self {
        Self::new(directory.join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[async_trait]
impl HistoryStorage for FileStorage {
    #[instrument(skip_all, fields(path = %self.path.display()), name = "Reading the history…")]
    async fn read_all(&self) -> Result<Vec<BillHistoryRecord>, PersistenceError> {
        match fs::read(&self.path).await {
            Ok(blob) => decode(&blob),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(error.into()),
        }
    }

    /// Write to a sibling file first and rename it over the target, so that readers never see
    /// a half-written collection.
    #[instrument(
        skip_all,
        fields(path = %self.path.display(), n_records = records.len()),
        name = "Writing the history…",
    )]
    async fn write_all(&self, records: &[BillHistoryRecord]) -> Result<(), PersistenceError> {
        let blob = encode(records)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        let temporary_path = self.temporary_path();
        fs::write(&temporary_path, blob).await?;
        fs::rename(&temporary_path, &self.path).await?;
        Ok(())
    }
}

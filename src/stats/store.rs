//! Statistics persistence
//!
//! The core only needs three operations from a store: append a finished game,
//! read the full log (most recent first), and look up the game played on a date
//! in a given mode. Two implementations are provided:
//! - `MemoryStore` keeps the log in process memory
//! - `JsonFileStore` appends one JSON object per line to a local file

use super::{GameMode, GameResultRecord};
use crate::error::StoreError;
use chrono::NaiveDate;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Append-only log of finished games
pub trait StatisticsStore: Send + Sync {
    /// Append a record to the log
    fn append(&self, record: GameResultRecord)
    -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Every record, most recently appended first
    fn all_records(&self) -> impl Future<Output = Result<Vec<GameResultRecord>, StoreError>> + Send;

    /// The most recent record played on `date` in `mode`, if any
    fn record_for_date(
        &self,
        date: NaiveDate,
        mode: GameMode,
    ) -> impl Future<Output = Result<Option<GameResultRecord>, StoreError>> + Send {
        async move {
            Ok(self
                .all_records()
                .await?
                .into_iter()
                .find(|r| r.date == date && r.mode == mode))
        }
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<GameResultRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from records given oldest first
    #[must_use]
    pub fn with_records(records: Vec<GameResultRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl StatisticsStore for MemoryStore {
    async fn append(&self, record: GameResultRecord) -> Result<(), StoreError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn all_records(&self) -> Result<Vec<GameResultRecord>, StoreError> {
        Ok(self.records.read().await.iter().rev().cloned().collect())
    }
}

/// JSON-lines file store
///
/// A missing file reads as an empty log. Appends are serialized through a lock
/// so concurrent writers never interleave lines.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatisticsStore for JsonFileStore {
    async fn append(&self, record: GameResultRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), word = %record.word, "appended game record");
        Ok(())
    }

    async fn all_records(&self) -> Result<Vec<GameResultRecord>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|e| StoreError::Corrupted {
                line: i + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }

        records.reverse();
        Ok(records)
    }
}

//! Read/update/subscribe contract for shared match records.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{watch, RwLock};

use crate::error::{SyncError, SyncResult};
use crate::model::{MatchRecord, MatchUpdate};

/// Storage backend holding shared match records.
///
/// Writes are last-write-wins; there is no compare-and-set. Subscribers see
/// the latest record (or `None` while the match does not exist).
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn fetch(&self, id: &str) -> SyncResult<MatchRecord>;

    /// Applies `update` to the record as a single write.
    async fn update(&self, id: &str, update: MatchUpdate) -> SyncResult<()>;

    async fn subscribe(&self, id: &str) -> SyncResult<watch::Receiver<Option<MatchRecord>>>;
}

struct Entry {
    record: Option<MatchRecord>,
    revision: u64,
    tx: watch::Sender<Option<MatchRecord>>,
}

impl Entry {
    fn empty() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            record: None,
            revision: 0,
            tx,
        }
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.tx.send_replace(self.record.clone());
    }
}

/// Process-local store used by the self-play driver and in tests.
#[derive(Default)]
pub struct InMemoryMatchStore {
    matches: RwLock<HashMap<String, Entry>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces a record and notifies subscribers.
    pub async fn insert(&self, record: MatchRecord) {
        let mut matches = self.matches.write().await;
        let entry = matches.entry(record.id.clone()).or_insert_with(Entry::empty);
        entry.record = Some(record);
        entry.publish();
    }

    /// Deletes a record; subscribers observe `None`.
    pub async fn remove(&self, id: &str) -> bool {
        let mut matches = self.matches.write().await;
        match matches.get_mut(id) {
            Some(entry) if entry.record.is_some() => {
                entry.record = None;
                entry.publish();
                true
            }
            _ => false,
        }
    }

    /// Number of writes seen by a match, `None` if it was never created.
    pub async fn revision(&self, id: &str) -> Option<u64> {
        self.matches.read().await.get(id).map(|e| e.revision)
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn fetch(&self, id: &str) -> SyncResult<MatchRecord> {
        self.matches
            .read()
            .await
            .get(id)
            .and_then(|e| e.record.clone())
            .ok_or_else(|| SyncError::MatchNotFound(id.to_string()))
    }

    async fn update(&self, id: &str, update: MatchUpdate) -> SyncResult<()> {
        let mut matches = self.matches.write().await;
        let entry = matches
            .get_mut(id)
            .filter(|e| e.record.is_some())
            .ok_or_else(|| SyncError::MatchNotFound(id.to_string()))?;

        if let Some(record) = entry.record.as_mut() {
            record.apply(update);
        }
        entry.publish();
        Ok(())
    }

    async fn subscribe(&self, id: &str) -> SyncResult<watch::Receiver<Option<MatchRecord>>> {
        let mut matches = self.matches.write().await;
        let entry = matches.entry(id.to_string()).or_insert_with(Entry::empty);
        Ok(entry.tx.subscribe())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;

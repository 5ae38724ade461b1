/// In-Memory Refresh Store
///
/// HashMap-backed implementation for tests and single-process embedding.
/// Every operation is one mutex critical section, which is what makes
/// `replace` and `delete_by_token` single-winner under concurrency. The
/// guard is never held across an await.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::store::{hash_token, RefreshRecord, RefreshStore};

struct Entry {
    subject: String,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct InMemoryRefreshStore {
    records: Mutex<HashMap<String, Entry>>,
}

impl InMemoryRefreshStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::ConnectionPool("record table lock poisoned".to_string()))
    }
}

#[async_trait]
impl RefreshStore for InMemoryRefreshStore {
    async fn exists(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.table()?.contains_key(&hash_token(token)))
    }

    async fn insert(&self, record: RefreshRecord) -> Result<(), StoreError> {
        self.table()?.insert(
            hash_token(&record.token),
            Entry {
                subject: record.subject,
                expires_at: record.expires_at,
            },
        );
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.table()?.remove(&hash_token(token)).is_some())
    }

    async fn replace(
        &self,
        old_token: &str,
        record: RefreshRecord,
    ) -> Result<bool, StoreError> {
        let mut records = self.table()?;

        if records.remove(&hash_token(old_token)).is_none() {
            return Ok(false);
        }
        records.insert(
            hash_token(&record.token),
            Entry {
                subject: record.subject,
                expires_at: record.expires_at,
            },
        );
        Ok(true)
    }

    async fn delete_by_subject(&self, subject: &str) -> Result<u64, StoreError> {
        let mut records = self.table()?;
        let before = records.len();
        records.retain(|_, entry| entry.subject != subject);
        Ok((before - records.len()) as u64)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let mut records = self.table()?;
        let before = records.len();
        records.retain(|_, entry| entry.expires_at > now);
        Ok((before - records.len()) as u64)
    }
}

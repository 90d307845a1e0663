//! In-memory shared-resource store backed by a DashMap.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use shareguard_core::error::AppError;
use shareguard_core::result::AppResult;
use shareguard_entity::share::{SharingKey, SharingRecord};

use crate::store::SharedResourceStore;

/// Shared-resource store holding grants in memory.
///
/// Per-key atomicity comes from the map's entry API: a racing insert on an
/// occupied key is rejected without ever holding a lock across await
/// points. Scans materialize a snapshot and sort it before returning.
#[derive(Debug, Default)]
pub struct MemorySharedStore {
    records: DashMap<SharingKey, SharingRecord>,
}

impl MemorySharedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut records: Vec<SharingRecord>) -> Vec<SharingRecord> {
        records.sort_by_key(SharingRecord::key);
        records
    }
}

#[async_trait]
impl SharedResourceStore for MemorySharedStore {
    async fn insert(&self, record: SharingRecord) -> AppResult<SharingRecord> {
        let key = record.key();
        match self.records.entry(key.clone()) {
            Entry::Occupied(_) => Err(AppError::already_shared(format!(
                "Grant {key} already exists"
            ))
            .with_resource(&key.resource_type_id, key.resource_id)
            .with_principal(key.principal_id)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                debug!(key = %key, "Grant stored");
                Ok(record)
            }
        }
    }

    async fn remove(&self, key: &SharingKey) -> AppResult<bool> {
        let removed = self.records.remove(key).is_some();
        if removed {
            debug!(key = %key, "Grant removed");
        }
        Ok(removed)
    }

    async fn find_by_entity(
        &self,
        resource_type_id: &str,
        resource_id: i64,
    ) -> AppResult<Vec<SharingRecord>> {
        let records = self
            .records
            .iter()
            .filter(|entry| {
                entry.resource_type_id == resource_type_id && entry.resource_id == resource_id
            })
            .map(|entry| entry.clone())
            .collect();
        Ok(Self::sorted(records))
    }

    async fn find_by_user(&self, principal_id: i64) -> AppResult<Vec<SharingRecord>> {
        let records = self
            .records
            .iter()
            .filter(|entry| entry.principal_id == principal_id)
            .map(|entry| entry.clone())
            .collect();
        Ok(Self::sorted(records))
    }

    async fn exists(&self, key: &SharingKey) -> AppResult<bool> {
        Ok(self.records.contains_key(key))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.len() as u64)
    }
}

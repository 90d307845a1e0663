//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use shareguard_core::config::store::StoreConfig;
use shareguard_core::error::AppError;
use shareguard_core::result::AppResult;
use shareguard_entity::share::{SharingKey, SharingRecord};

use crate::memory::MemorySharedStore;
use crate::store::SharedResourceStore;

/// Shared-resource store manager wrapping the configured provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct SharedStoreManager {
    /// The inner store provider.
    inner: Arc<dyn SharedResourceStore>,
}

impl SharedStoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn SharedResourceStore> = match config.provider.as_str() {
            "memory" => {
                info!("Initializing in-memory shared-resource store");
                Arc::new(MemorySharedStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn SharedResourceStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a reference to the inner provider.
    pub fn provider(&self) -> &dyn SharedResourceStore {
        self.inner.as_ref()
    }

    /// The inner provider as a shared handle.
    pub fn provider_arc(&self) -> Arc<dyn SharedResourceStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl SharedResourceStore for SharedStoreManager {
    async fn insert(&self, record: SharingRecord) -> AppResult<SharingRecord> {
        self.inner.insert(record).await
    }

    async fn remove(&self, key: &SharingKey) -> AppResult<bool> {
        self.inner.remove(key).await
    }

    async fn find_by_entity(
        &self,
        resource_type_id: &str,
        resource_id: i64,
    ) -> AppResult<Vec<SharingRecord>> {
        self.inner.find_by_entity(resource_type_id, resource_id).await
    }

    async fn find_by_user(&self, principal_id: i64) -> AppResult<Vec<SharingRecord>> {
        self.inner.find_by_user(principal_id).await
    }

    async fn exists(&self, key: &SharingKey) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.inner.count().await
    }
}

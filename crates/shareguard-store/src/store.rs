//! Keyed-store capability contract for sharing grants.

use async_trait::async_trait;

use shareguard_core::result::AppResult;
use shareguard_entity::share::{SharingKey, SharingRecord};

/// Persistent keyed collection of sharing grants.
///
/// The composite key is the identity; there is no update operation.
/// Implementations must make `insert` atomic per key: of two racing inserts
/// on the same key exactly one succeeds and the other observes
/// `AlreadyShared`. Query results are sorted by composite key so listings
/// are stable across calls and providers.
#[async_trait]
pub trait SharedResourceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new grant. Fails with `AlreadyShared` when the composite
    /// key is already present.
    async fn insert(&self, record: SharingRecord) -> AppResult<SharingRecord>;

    /// Remove a grant, returning whether it existed.
    async fn remove(&self, key: &SharingKey) -> AppResult<bool>;

    /// All grants on one resource instance.
    async fn find_by_entity(
        &self,
        resource_type_id: &str,
        resource_id: i64,
    ) -> AppResult<Vec<SharingRecord>>;

    /// All grants where the principal is the grantee, across types.
    async fn find_by_user(&self, principal_id: i64) -> AppResult<Vec<SharingRecord>>;

    /// Whether a grant with this key exists.
    async fn exists(&self, key: &SharingKey) -> AppResult<bool>;

    /// Total number of stored grants.
    async fn count(&self) -> AppResult<u64>;
}

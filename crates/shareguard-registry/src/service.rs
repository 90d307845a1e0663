//! Capability trait implemented by every shareable resource type.

use async_trait::async_trait;

use shareguard_core::result::AppResult;
use shareguard_entity::resource::ResourceDescriptor;

/// Access to one shareable resource type.
///
/// Implementations wrap the service that owns the domain type (documents,
/// folders, dashboards) and answer existence and ownership questions for it.
/// The sharing layer treats resources as opaque: a descriptor is all it ever
/// sees.
#[async_trait]
pub trait ResourceService: Send + Sync + std::fmt::Debug + 'static {
    /// The stable, namespaced identifier this service is registered under.
    fn resource_type_id(&self) -> &str;

    /// Look up a resource instance by id.
    ///
    /// Returns `Ok(None)` when no such resource exists. Errors are reserved
    /// for lookup failures (backing store unavailable), not for absence.
    async fn find(&self, resource_id: i64) -> AppResult<Option<ResourceDescriptor>>;
}

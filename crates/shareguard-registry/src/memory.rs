//! In-memory resource service backed by a DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use shareguard_core::result::AppResult;
use shareguard_entity::resource::ResourceDescriptor;

use crate::service::ResourceService;

/// Resource service holding descriptors in memory.
///
/// Used by hosts that keep their domain objects in process and by tests
/// that need a registry without a real backing service.
#[derive(Debug)]
pub struct MemoryResourceService {
    resource_type_id: String,
    resources: DashMap<i64, ResourceDescriptor>,
}

impl MemoryResourceService {
    /// Create an empty service for the given type identifier.
    pub fn new(resource_type_id: impl Into<String>) -> Self {
        Self {
            resource_type_id: resource_type_id.into(),
            resources: DashMap::new(),
        }
    }

    /// Insert or replace a descriptor.
    pub fn put(&self, descriptor: ResourceDescriptor) {
        self.resources.insert(descriptor.resource_id, descriptor);
    }

    /// Remove a descriptor, returning whether it existed.
    pub fn remove(&self, resource_id: i64) -> bool {
        self.resources.remove(&resource_id).is_some()
    }

    /// Number of stored descriptors.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no descriptors are stored.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ResourceService for MemoryResourceService {
    fn resource_type_id(&self) -> &str {
        &self.resource_type_id
    }

    async fn find(&self, resource_id: i64) -> AppResult<Option<ResourceDescriptor>> {
        Ok(self.resources.get(&resource_id).map(|r| r.clone()))
    }
}

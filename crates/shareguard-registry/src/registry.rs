//! Registry mapping resource type identifiers to their services.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use shareguard_core::error::AppError;
use shareguard_core::result::AppResult;

use crate::service::ResourceService;

/// Builder used during the startup registration window.
///
/// Each shareable type is registered exactly once; a second registration
/// under the same identifier is a wiring mistake and fails immediately.
/// Consuming the builder with [`build`](Self::build) freezes the mapping.
#[derive(Debug, Default)]
pub struct ResourceTypeRegistryBuilder {
    services: HashMap<String, Arc<dyn ResourceService>>,
}

impl ResourceTypeRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource service under its declared type identifier.
    pub fn register(mut self, service: Arc<dyn ResourceService>) -> AppResult<Self> {
        let type_id = service.resource_type_id().to_string();

        if type_id.trim().is_empty() {
            return Err(AppError::configuration(
                "Resource service declared an empty resource type id",
            ));
        }

        if self.services.contains_key(&type_id) {
            return Err(AppError::configuration(format!(
                "Resource type '{type_id}' is already registered"
            )));
        }

        info!(resource_type_id = %type_id, "Registering resource type");
        self.services.insert(type_id, service);
        Ok(self)
    }

    /// Freeze the registry. No further registrations are possible.
    pub fn build(self) -> ResourceTypeRegistry {
        info!(
            resource_type_count = self.services.len(),
            "Resource type registry frozen"
        );
        ResourceTypeRegistry {
            services: Arc::new(self.services),
        }
    }
}

/// Immutable registry of resource type services.
///
/// Built once at startup; lookups after that point never take a lock and
/// the set of known types never changes.
#[derive(Debug, Clone)]
pub struct ResourceTypeRegistry {
    services: Arc<HashMap<String, Arc<dyn ResourceService>>>,
}

impl ResourceTypeRegistry {
    /// Start building a registry.
    pub fn builder() -> ResourceTypeRegistryBuilder {
        ResourceTypeRegistryBuilder::new()
    }

    /// Resolve a type identifier to its registered service.
    pub fn resolve(&self, resource_type_id: &str) -> AppResult<Arc<dyn ResourceService>> {
        self.services.get(resource_type_id).cloned().ok_or_else(|| {
            AppError::unknown_resource_type(format!(
                "No resource service registered for type '{resource_type_id}'"
            ))
            .with_resource_type(resource_type_id)
        })
    }

    /// Whether a type identifier is registered.
    pub fn contains(&self, resource_type_id: &str) -> bool {
        self.services.contains_key(resource_type_id)
    }

    /// All registered type identifiers, sorted.
    pub fn type_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.services.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

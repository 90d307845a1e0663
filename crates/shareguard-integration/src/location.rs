//! Configuration-backed service location.

use std::collections::HashMap;

use async_trait::async_trait;

use shareguard_core::config::integration::IntegrationConfig;
use shareguard_core::result::AppResult;
use shareguard_core::traits::locator::ServiceLocation;

/// Service location reading endpoints from static configuration.
///
/// The endpoint map is fixed at construction; deployments that relocate a
/// collaborator update configuration and restart.
#[derive(Debug, Clone, Default)]
pub struct StaticServiceLocation {
    endpoints: HashMap<String, String>,
}

impl StaticServiceLocation {
    /// Location with no known endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Location backed by the configured endpoint map.
    pub fn from_config(config: &IntegrationConfig) -> Self {
        Self {
            endpoints: config.endpoints.clone(),
        }
    }

    /// Add an endpoint for one contract.
    pub fn with_endpoint(
        mut self,
        contract_id: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        self.endpoints.insert(contract_id.into(), endpoint.into());
        self
    }
}

#[async_trait]
impl ServiceLocation for StaticServiceLocation {
    async fn resolve_endpoint(&self, contract_id: &str) -> AppResult<Option<String>> {
        Ok(self.endpoints.get(contract_id).cloned())
    }
}

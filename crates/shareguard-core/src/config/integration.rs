//! Contract binding configuration for the integration client resolver.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Settings for resolving remote-capable contracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Contract identifier → remote endpoint base URL.
    ///
    /// Consulted only for contracts without an in-process provider. A
    /// contract missing from this map (and without a local provider) fails
    /// startup with an unresolvable-contract error.
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
    /// Request timeout for network-bound contract clients, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            endpoints: HashMap::new(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}

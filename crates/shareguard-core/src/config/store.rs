//! Shared-resource store configuration.

use serde::{Deserialize, Serialize};

/// Store backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: currently `"memory"`.
    ///
    /// Persistent backends plug in behind the same trait; the provider
    /// string selects the implementation at assembly time.
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

//! Sharing policy configuration.

use serde::{Deserialize, Serialize};

/// Behavior switches for the sharing service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Whether administrators may share resources they do not own.
    ///
    /// The ownership check of the share/unshare flow is bypassed for
    /// admins only when this is enabled. Defaults to `false`: admins must
    /// own a resource to share it, like everyone else.
    #[serde(default = "default_admin_owner_override")]
    pub admin_owner_override: bool,
    /// Whether mutating operations emit audit events.
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            admin_owner_override: default_admin_owner_override(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

fn default_admin_owner_override() -> bool {
    false
}

fn default_audit_enabled() -> bool {
    true
}

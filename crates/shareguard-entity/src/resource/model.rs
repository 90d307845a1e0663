//! Resource descriptor returned by resource type services.

use serde::{Deserialize, Serialize};

/// Snapshot of a resource instance, as reported by its owning service.
///
/// The sharing layer never loads resource payloads; it only needs to know
/// that the resource exists, who owns it, and what to call it in audit
/// output. A descriptor without an owner describes a resource that cannot
/// be shared at all (system-owned or ownerless by design).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// The resource instance id.
    pub resource_id: i64,
    /// Owning principal, if the resource has one.
    pub owner_principal_id: Option<i64>,
    /// Human-readable name for logs and audit trails.
    pub display_name: Option<String>,
}

impl ResourceDescriptor {
    /// Descriptor for an owned resource.
    pub fn owned(resource_id: i64, owner_principal_id: i64) -> Self {
        Self {
            resource_id,
            owner_principal_id: Some(owner_principal_id),
            display_name: None,
        }
    }

    /// Descriptor for a resource that has no owner and cannot be shared.
    pub fn ownerless(resource_id: i64) -> Self {
        Self {
            resource_id,
            owner_principal_id: None,
            display_name: None,
        }
    }

    /// Attach a display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

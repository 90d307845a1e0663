//! Audit events emitted by sharing mutations.
//!
//! Events are handed to the configured audit sink best-effort: emission
//! failures are logged and never surface to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The mutating action an audit event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A sharing grant was created.
    Shared,
    /// A sharing grant was removed.
    Unshared,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::Unshared => write!(f, "unshared"),
        }
    }
}

/// An immutable record of one sharing mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// The action that was performed.
    pub action: AuditAction,
    /// The resource type the grant applies to.
    pub resource_type_id: String,
    /// The resource the grant applies to.
    pub resource_id: i64,
    /// The principal that performed the mutation.
    pub acting_principal_id: i64,
    /// The principal the grant targets.
    pub target_principal_id: i64,
    /// When the mutation occurred.
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Create a new audit event stamped with the current time.
    pub fn new(
        action: AuditAction,
        resource_type_id: impl Into<String>,
        resource_id: i64,
        acting_principal_id: i64,
        target_principal_id: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            resource_type_id: resource_type_id.into(),
            resource_id,
            acting_principal_id,
            target_principal_id,
            timestamp: Utc::now(),
        }
    }

    /// Replace the event timestamp, typically with the request receipt time.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Convenience constructor for a share mutation.
    pub fn shared(
        resource_type_id: impl Into<String>,
        resource_id: i64,
        acting_principal_id: i64,
        target_principal_id: i64,
    ) -> Self {
        Self::new(
            AuditAction::Shared,
            resource_type_id,
            resource_id,
            acting_principal_id,
            target_principal_id,
        )
    }

    /// Convenience constructor for an unshare mutation.
    pub fn unshared(
        resource_type_id: impl Into<String>,
        resource_id: i64,
        acting_principal_id: i64,
        target_principal_id: i64,
    ) -> Self {
        Self::new(
            AuditAction::Unshared,
            resource_type_id,
            resource_id,
            acting_principal_id,
            target_principal_id,
        )
    }
}

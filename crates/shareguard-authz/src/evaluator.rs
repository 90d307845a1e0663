//! In-process permission evaluation over a materialized policy set.

use async_trait::async_trait;
use tracing::debug;

use shareguard_core::result::AppResult;
use shareguard_core::types::ShareAction;

use crate::manager::PermissionManager;
use crate::policies::PolicySet;

/// Permission manager that evaluates a [`PolicySet`] in process.
///
/// The default provider for single-process deployments and tests. Policy
/// is fixed at construction; an empty set denies everything.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissionManager {
    policies: PolicySet,
}

impl StaticPermissionManager {
    /// Creates an evaluator that denies everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator over the given policy set.
    pub fn with_policies(policies: PolicySet) -> Self {
        Self { policies }
    }

    /// A reference to the underlying policies.
    pub fn policies(&self) -> &PolicySet {
        &self.policies
    }
}

#[async_trait]
impl PermissionManager for StaticPermissionManager {
    async fn check_permission(
        &self,
        principal_id: i64,
        resource_type_id: &str,
        action: ShareAction,
    ) -> AppResult<bool> {
        let allowed = self.policies.allows(principal_id, resource_type_id, action);
        debug!(
            principal_id,
            resource_type_id,
            action = %action,
            allowed,
            "Evaluated permission"
        );
        Ok(allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_policy_denies() {
        let manager = StaticPermissionManager::new();
        assert!(
            !manager
                .check_permission(1, "doc", ShareAction::Share)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_granted_action_allowed() {
        let manager = StaticPermissionManager::with_policies(
            PolicySet::new().grant(1, "doc", ShareAction::Share),
        );
        assert!(
            manager
                .check_permission(1, "doc", ShareAction::Share)
                .await
                .unwrap()
        );
        assert!(
            !manager
                .check_permission(1, "doc", ShareAction::Find)
                .await
                .unwrap()
        );
    }
}

//! Permission manager capability contract.

use async_trait::async_trait;

use shareguard_core::result::AppResult;
use shareguard_core::types::ShareAction;

/// Evaluates whether a principal holds an action on a resource type.
///
/// The policy store behind the answer is the implementation's concern: the
/// in-process evaluator reads a materialized [`PolicySet`], a network-bound
/// client asks a remote policy service. Callers treat both identically.
///
/// [`PolicySet`]: crate::policies::PolicySet
#[async_trait]
pub trait PermissionManager: Send + Sync + std::fmt::Debug + 'static {
    /// Whether `principal_id` holds `action` on `resource_type_id`.
    ///
    /// `Ok(false)` is a policy answer; errors are reserved for evaluation
    /// failures (unreachable policy service, malformed response).
    async fn check_permission(
        &self,
        principal_id: i64,
        resource_type_id: &str,
        action: ShareAction,
    ) -> AppResult<bool>;
}

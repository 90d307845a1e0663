//! Service location trait used by the integration client resolver.

use async_trait::async_trait;

use crate::result::AppResult;

/// Resolves a contract identifier to a network endpoint.
///
/// Consulted once per contract during startup binding, and only for
/// contracts without an in-process provider. Returning `None` means no
/// endpoint is known for the contract.
#[async_trait]
pub trait ServiceLocation: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve the endpoint base URL for a contract identifier.
    async fn resolve_endpoint(&self, contract_id: &str) -> AppResult<Option<String>>;
}

//! Capability trait over the host's principal store.

use async_trait::async_trait;

use shareguard_core::result::AppResult;
use shareguard_entity::principal::Principal;

/// Read-only lookup into the host application's principal store.
///
/// All three lookups return `Ok(None)` for absence; errors are reserved
/// for store failures. Email and username matching semantics (case
/// folding, aliasing) are the host's concern.
#[async_trait]
pub trait PrincipalDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Look up a principal by id.
    async fn find_by_id(&self, principal_id: i64) -> AppResult<Option<Principal>>;

    /// Look up a principal by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Principal>>;

    /// Look up a principal by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Principal>>;
}

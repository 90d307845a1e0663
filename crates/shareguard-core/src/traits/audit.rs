//! Audit sink trait for recording sharing mutations.

use async_trait::async_trait;

use crate::events::AuditEvent;
use crate::result::AppResult;

/// Destination for audit events.
///
/// Emission is best-effort: the sharing service attempts one `record` call
/// per committed mutation and logs failures without escalating them, so
/// implementations are free to fail without affecting callers.
#[async_trait]
pub trait AuditSink: Send + Sync + std::fmt::Debug + 'static {
    /// Record one audit event.
    async fn record(&self, event: AuditEvent) -> AppResult<()>;
}

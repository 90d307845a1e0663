//! Audit sink implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use shareguard_core::events::AuditEvent;
use shareguard_core::result::AppResult;
use shareguard_core::traits::audit::AuditSink;

/// Audit sink that writes events to the `audit` log target.
///
/// The default sink: deployments that ship audit records elsewhere replace
/// it with their own implementation.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    /// Create the sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: AuditEvent) -> AppResult<()> {
        info!(
            target: "audit",
            event_id = %event.id,
            action = %event.action,
            resource_type_id = %event.resource_type_id,
            resource_id = event.resource_id,
            acting_principal_id = event.acting_principal_id,
            target_principal_id = event.target_principal_id,
            "Sharing mutation"
        );
        Ok(())
    }
}

/// Audit sink that captures events in memory, in emission order.
///
/// Used by tests to assert exactly which mutations were committed.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of captured events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether no events were captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, event: AuditEvent) -> AppResult<()> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
        Ok(())
    }
}

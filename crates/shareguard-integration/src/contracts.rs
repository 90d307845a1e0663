//! Well-known contract identifiers.
//!
//! Contract identifiers are stable, versioned strings; bumping the version
//! is how incompatible contract changes roll out. Hosts may define their
//! own identifiers for additional remote-capable collaborators.

/// Permission evaluation contract ([`PermissionManager`]).
///
/// [`PermissionManager`]: shareguard_authz::PermissionManager
pub const PERMISSION_MANAGER: &str = "shareguard.permission-manager.v1";

/// Audit event recording contract ([`AuditSink`]).
///
/// [`AuditSink`]: shareguard_core::traits::audit::AuditSink
pub const AUDIT_SINK: &str = "shareguard.audit-sink.v1";

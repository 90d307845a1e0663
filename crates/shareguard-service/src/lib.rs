//! Sharing service orchestration.
//!
//! [`SharingService`] is the subsystem's primary surface: it verifies
//! ownership through the resource type registry, resolves grantees through
//! the principal directory, consults the permission manager, runs the
//! constraint-validator chain, and mutates the shared-resource store. Every
//! committed mutation emits an audit event, best-effort.

pub mod audit;
pub mod context;
pub mod sharing;
pub mod validation;

pub use audit::{MemoryAuditSink, TracingAuditSink};
pub use context::RequestContext;
pub use sharing::SharingService;
pub use validation::{ConstraintValidator, KeyIntegrityValidator, ValidatorChain};

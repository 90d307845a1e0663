//! Capability traits defined in `shareguard-core` and implemented elsewhere.
//!
//! Traits that depend on domain entities (resource services, the principal
//! directory, the permission manager, the shared-resource store) live in
//! the crates that own those concerns.

pub mod audit;
pub mod locator;

pub use audit::AuditSink;
pub use locator::ServiceLocation;

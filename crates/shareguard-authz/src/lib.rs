//! Permission manager contract and the default policy evaluator.
//!
//! The sharing layer never interprets policy itself; it asks a
//! [`PermissionManager`] whether a principal holds an action on a resource
//! type. [`StaticPermissionManager`] evaluates an in-process [`PolicySet`];
//! deployments with a central policy service bind a network client to the
//! same contract instead.

pub mod evaluator;
pub mod manager;
pub mod policies;

pub use evaluator::StaticPermissionManager;
pub use manager::PermissionManager;
pub use policies::{ANY_RESOURCE_TYPE, PolicySet};

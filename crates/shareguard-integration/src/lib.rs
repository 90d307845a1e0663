//! Deployment-transparent contract binding.
//!
//! Collaborators that may live in process or across the network are named
//! by contract identifiers. [`IntegrationResolverBuilder`] collects local
//! providers and remote client factories, then binds each contract exactly
//! once at startup: a local provider always wins, otherwise the configured
//! [`ServiceLocation`] must yield an endpoint for the remote factory, and a
//! contract satisfiable by neither fails the build. Call sites resolve a
//! plain `Arc<dyn Contract>` and never learn which side of the boundary
//! answers them.
//!
//! [`ServiceLocation`]: shareguard_core::traits::locator::ServiceLocation

pub mod contracts;
pub mod location;
pub mod permission_client;
pub mod resolver;

pub use location::StaticServiceLocation;
pub use permission_client::HttpPermissionClient;
pub use resolver::{BindingKind, IntegrationResolver, IntegrationResolverBuilder};

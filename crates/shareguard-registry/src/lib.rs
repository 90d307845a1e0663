//! Resource type registry.
//!
//! Host applications expose each shareable domain type through a
//! [`ResourceService`] implementation and register it here under a stable
//! type identifier. Registration happens once during startup; after
//! [`ResourceTypeRegistryBuilder::build`] the registry is frozen and lookups
//! are lock-free.

pub mod memory;
pub mod registry;
pub mod service;

pub use memory::MemoryResourceService;
pub use registry::{ResourceTypeRegistry, ResourceTypeRegistryBuilder};
pub use service::ResourceService;

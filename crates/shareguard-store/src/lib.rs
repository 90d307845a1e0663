//! Shared-resource store.
//!
//! Persists sharing grants as a keyed collection over the composite key
//! (resource type, resource id, principal id). The trait is the only thing
//! the sharing service sees; [`SharedStoreManager`] selects the concrete
//! provider from configuration.

pub mod memory;
pub mod provider;
pub mod store;

pub use memory::MemorySharedStore;
pub use provider::SharedStoreManager;
pub use store::SharedResourceStore;

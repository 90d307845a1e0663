//! Principal domain entities.

pub mod model;
pub mod reference;

pub use model::Principal;
pub use reference::PrincipalRef;

//! Principal directory and resolution.
//!
//! The host application supplies a [`PrincipalDirectory`] over its user or
//! account store; [`PrincipalResolver`] turns the loose identifiers callers
//! send (id, email, username) into a concrete [`Principal`] following a
//! strict precedence order.
//!
//! [`Principal`]: shareguard_entity::principal::Principal

pub mod directory;
pub mod memory;
pub mod resolver;

pub use directory::PrincipalDirectory;
pub use memory::MemoryPrincipalDirectory;
pub use resolver::PrincipalResolver;

//! # shareguard-core
//!
//! Core crate for ShareGuard. Contains the unified error system, the
//! configuration schemas, the audit event types, the sharing action
//! vocabulary, and the capability traits that have no dependency on
//! domain entities.
//!
//! This crate has **no** internal dependencies on other ShareGuard crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorContext, ErrorKind};
pub use result::AppResult;

//! # shareguard-entity
//!
//! Domain entity models for ShareGuard. Every struct in this crate is a
//! domain value object: sharing grants keyed by their composite key,
//! canonical principal identities read from the directory capability, and
//! projections of externally-owned resources. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod principal;
pub mod resource;
pub mod share;

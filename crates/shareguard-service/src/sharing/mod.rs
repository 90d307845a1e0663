//! Sharing grant orchestration.

pub mod service;

pub use service::SharingService;

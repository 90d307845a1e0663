//! Sharing grant domain entities.

pub mod model;
pub mod request;

pub use model::{SharingKey, SharingRecord};
pub use request::SharingRequest;

//! Core type definitions used across the ShareGuard workspace.

pub mod action;

pub use action::ShareAction;

//! Sharing action vocabulary evaluated by the permission manager.

use serde::{Deserialize, Serialize};

/// An action a principal may hold on a resource type.
///
/// Actions gate the sharing-service operations: `Share` covers grant
/// creation and removal, `Find` covers reading another resource's
/// sharing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareAction {
    /// Create or remove sharing grants on a resource type.
    Share,
    /// List sharing grants on resources of a type.
    Find,
}

impl std::fmt::Display for ShareAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Share => write!(f, "SHARE"),
            Self::Find => write!(f, "FIND"),
        }
    }
}

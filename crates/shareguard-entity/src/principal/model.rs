//! Principal entity model.

use serde::{Deserialize, Serialize};

/// A canonical identity record, owned and lifecycle-managed by an external
/// identity collaborator. ShareGuard only reads principals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique principal identifier. Always positive.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Whether this principal has administrator privileges.
    pub is_admin: bool,
}

impl Principal {
    /// Create a new principal record.
    pub fn new(id: i64, email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            username: username.into(),
            is_admin: false,
        }
    }

    /// Mark the principal as an administrator.
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

//! Principal reference used to name a grantee at share time.

use serde::{Deserialize, Serialize};

/// A reference to a principal by id, email, or username.
///
/// Exactly one resolution path is attempted, in that order; empty strings
/// and non-positive ids count as absent. The reference never outlives
/// resolution; persisted records carry only the resolved id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalRef {
    /// Resolved principal id, if the caller already knows it.
    pub principal_id: Option<i64>,
    /// Email hint, used only when no valid id is supplied.
    pub principal_email: Option<String>,
    /// Username hint, used only when neither id nor email is supplied.
    pub principal_username: Option<String>,
}

impl PrincipalRef {
    /// Reference a principal by id.
    pub fn by_id(principal_id: i64) -> Self {
        Self {
            principal_id: Some(principal_id),
            ..Self::default()
        }
    }

    /// Reference a principal by email.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            principal_email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Reference a principal by username.
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            principal_username: Some(username.into()),
            ..Self::default()
        }
    }

    /// Normalize the reference: trims hints, drops empty strings and
    /// non-positive ids so that precedence only sees usable identifiers.
    pub fn normalized(&self) -> Self {
        let principal_id = self.principal_id.filter(|id| *id > 0);
        let principal_email = self
            .principal_email
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let principal_username = self
            .principal_username
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            principal_id,
            principal_email,
            principal_username,
        }
    }

    /// Whether the normalized reference carries no identifier at all.
    pub fn is_empty(&self) -> bool {
        let n = self.normalized();
        n.principal_id.is_none() && n.principal_email.is_none() && n.principal_username.is_none()
    }
}

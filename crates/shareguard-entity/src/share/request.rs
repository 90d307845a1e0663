//! Share request payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::principal::PrincipalRef;

/// Caller-supplied payload for a share or unshare operation.
///
/// The target principal may be designated by id, email, or username;
/// identifiers are resolved in that order of precedence. Validation here
/// covers transport-level shape only; resolution and existence checks
/// happen in the sharing service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SharingRequest {
    /// Stable, namespaced resource type identifier.
    #[validate(length(min = 1))]
    pub resource_type_id: String,
    /// The resource instance to share.
    pub resource_id: i64,
    /// Target principal id, if known.
    pub principal_id: Option<i64>,
    /// Target principal email, used when no valid id is supplied.
    #[validate(email)]
    pub principal_email: Option<String>,
    /// Target principal username, used when neither id nor email resolve.
    #[validate(length(min = 1))]
    pub principal_username: Option<String>,
}

impl SharingRequest {
    /// Request targeting a principal by id.
    pub fn by_id(resource_type_id: impl Into<String>, resource_id: i64, principal_id: i64) -> Self {
        Self {
            resource_type_id: resource_type_id.into(),
            resource_id,
            principal_id: Some(principal_id),
            ..Default::default()
        }
    }

    /// Request targeting a principal by email.
    pub fn by_email(
        resource_type_id: impl Into<String>,
        resource_id: i64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            resource_type_id: resource_type_id.into(),
            resource_id,
            principal_email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Request targeting a principal by username.
    pub fn by_username(
        resource_type_id: impl Into<String>,
        resource_id: i64,
        username: impl Into<String>,
    ) -> Self {
        Self {
            resource_type_id: resource_type_id.into(),
            resource_id,
            principal_username: Some(username.into()),
            ..Default::default()
        }
    }

    /// The principal designation carried by this request.
    pub fn principal_ref(&self) -> PrincipalRef {
        PrincipalRef {
            principal_id: self.principal_id,
            principal_email: self.principal_email.clone(),
            principal_username: self.principal_username.clone(),
        }
        .normalized()
    }
}

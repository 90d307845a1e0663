//! Principal resolution with fixed identifier precedence.

use std::sync::Arc;

use tracing::debug;
use validator::ValidateEmail;

use shareguard_core::error::AppError;
use shareguard_core::result::AppResult;
use shareguard_entity::principal::{Principal, PrincipalRef};

use crate::directory::PrincipalDirectory;

/// Resolves caller-supplied principal designations to concrete principals.
///
/// Precedence is id, then email, then username. Exactly one lookup path is
/// taken per resolution: once an identifier is present it must resolve, and
/// a miss is an error rather than a cue to try the next identifier. This
/// keeps resolution deterministic when callers send several identifiers
/// that point at different accounts.
#[derive(Debug, Clone)]
pub struct PrincipalResolver {
    directory: Arc<dyn PrincipalDirectory>,
}

impl PrincipalResolver {
    /// Create a resolver over the given directory.
    pub fn new(directory: Arc<dyn PrincipalDirectory>) -> Self {
        Self { directory }
    }

    /// Resolve a principal reference to a concrete principal.
    pub async fn resolve(&self, principal_ref: &PrincipalRef) -> AppResult<Principal> {
        let normalized = principal_ref.normalized();

        if let Some(principal_id) = normalized.principal_id {
            debug!(principal_id, "Resolving principal by id");
            return self
                .directory
                .find_by_id(principal_id)
                .await?
                .ok_or_else(|| {
                    AppError::invalid_principal(format!(
                        "No principal with id {principal_id}"
                    ))
                    .with_principal(principal_id)
                });
        }

        if let Some(email) = normalized.principal_email.as_deref() {
            if !email.validate_email() {
                return Err(AppError::invalid_principal(format!(
                    "'{email}' is not a valid email address"
                )));
            }
            debug!(email, "Resolving principal by email");
            return self.directory.find_by_email(email).await?.ok_or_else(|| {
                AppError::invalid_principal(format!("No principal with email '{email}'"))
            });
        }

        if let Some(username) = normalized.principal_username.as_deref() {
            debug!(username, "Resolving principal by username");
            return self
                .directory
                .find_by_username(username)
                .await?
                .ok_or_else(|| {
                    AppError::invalid_principal(format!(
                        "No principal with username '{username}'"
                    ))
                });
        }

        Err(AppError::missing_principal_identifier(
            "Request carries no principal id, email, or username",
        ))
    }
}

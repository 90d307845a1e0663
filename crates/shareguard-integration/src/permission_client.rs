//! Network-bound permission manager client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shareguard_authz::PermissionManager;
use shareguard_core::error::{AppError, ErrorKind};
use shareguard_core::result::AppResult;
use shareguard_core::types::ShareAction;

/// Wire request for a permission check.
#[derive(Debug, Serialize)]
struct CheckPermissionRequest<'a> {
    principal_id: i64,
    resource_type_id: &'a str,
    action: ShareAction,
}

/// Wire response for a permission check.
#[derive(Debug, Deserialize)]
struct CheckPermissionResponse {
    allowed: bool,
}

/// Permission manager speaking JSON over HTTP to a remote policy service.
///
/// Issues `POST {endpoint}/permissions/check` and reads `{"allowed": bool}`.
/// Transport, status, and decode failures all surface as `ExternalService`
/// errors; deciding how to treat an unavailable policy service is the
/// caller's job (the sharing service fails closed).
#[derive(Debug, Clone)]
pub struct HttpPermissionClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpPermissionClient {
    /// Build a client against an endpoint base URL.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let endpoint: String = endpoint.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The endpoint base URL this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PermissionManager for HttpPermissionClient {
    async fn check_permission(
        &self,
        principal_id: i64,
        resource_type_id: &str,
        action: ShareAction,
    ) -> AppResult<bool> {
        let url = format!("{}/permissions/check", self.endpoint);
        let response = self
            .http
            .post(&url)
            .json(&CheckPermissionRequest {
                principal_id,
                resource_type_id,
                action,
            })
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Permission check request to {url} failed"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Permission service returned {status} for {url}"
            )));
        }

        let body: CheckPermissionResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Malformed permission service response",
                e,
            )
        })?;

        debug!(
            principal_id,
            resource_type_id,
            action = %action,
            allowed = body.allowed,
            "Remote permission check"
        );
        Ok(body.allowed)
    }
}

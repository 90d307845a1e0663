//! Unified application error types for ShareGuard.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Sharing failures additionally carry
//! an [`ErrorContext`] naming the resource type, resource, and principal
//! involved, so callers can build actionable messages without ever seeing
//! raw store or transport errors.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The resource type identifier is not registered.
    UnknownResourceType,
    /// The target resource does not exist in its resource service.
    ResourceNotFound,
    /// The target resource does not expose an owning principal.
    NotShareable,
    /// The acting principal lacks the required action on the resource type.
    PermissionDenied,
    /// The acting principal does not own the target resource.
    NotOwner,
    /// No principal identifier (id, email, or username) was supplied.
    MissingPrincipalIdentifier,
    /// The supplied principal reference did not resolve to a known identity.
    InvalidPrincipal,
    /// A sharing record with the same composite key already exists.
    AlreadyShared,
    /// No sharing record exists for the given composite key.
    SharingNotFound,
    /// A constraint validator rejected the candidate record.
    ConstraintViolation,
    /// No in-process or remote provider satisfies a required contract.
    /// Fatal at startup: the subsystem must not accept traffic.
    UnresolvableContract,
    /// A configuration error occurred.
    Configuration,
    /// A shared-resource store error occurred.
    Store,
    /// A call to an external collaborator failed.
    ExternalService,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownResourceType => write!(f, "UNKNOWN_RESOURCE_TYPE"),
            Self::ResourceNotFound => write!(f, "RESOURCE_NOT_FOUND"),
            Self::NotShareable => write!(f, "NOT_SHAREABLE"),
            Self::PermissionDenied => write!(f, "PERMISSION_DENIED"),
            Self::NotOwner => write!(f, "NOT_OWNER"),
            Self::MissingPrincipalIdentifier => write!(f, "MISSING_PRINCIPAL_IDENTIFIER"),
            Self::InvalidPrincipal => write!(f, "INVALID_PRINCIPAL"),
            Self::AlreadyShared => write!(f, "ALREADY_SHARED"),
            Self::SharingNotFound => write!(f, "SHARING_NOT_FOUND"),
            Self::ConstraintViolation => write!(f, "CONSTRAINT_VIOLATION"),
            Self::UnresolvableContract => write!(f, "UNRESOLVABLE_CONTRACT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Store => write!(f, "STORE"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Structured context identifying what a failure was about.
///
/// Every field is optional; operations fill in whatever key components
/// apply to the failing step.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorContext {
    /// The resource type identifier involved, if any.
    pub resource_type_id: Option<String>,
    /// The resource id involved, if any.
    pub resource_id: Option<i64>,
    /// The principal id involved, if any.
    pub principal_id: Option<i64>,
}

impl ErrorContext {
    /// Returns `true` when no context field is set.
    pub fn is_empty(&self) -> bool {
        self.resource_type_id.is_none() && self.resource_id.is_none() && self.principal_id.is_none()
    }
}

/// The unified application error used throughout ShareGuard.
///
/// All internal errors are mapped into `AppError` using `From` impls or
/// explicit `.map_err()` calls. Only [`ErrorKind::UnresolvableContract`] is
/// startup-fatal; every other kind is recoverable at the call boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Structured context for the caller (resource type, resource, principal).
    pub context: ErrorContext,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
            source: Some(Box::new(source)),
        }
    }

    /// Attach the resource type identifier to the error context.
    pub fn with_resource_type(mut self, resource_type_id: impl Into<String>) -> Self {
        self.context.resource_type_id = Some(resource_type_id.into());
        self
    }

    /// Attach the resource type identifier and resource id to the error context.
    pub fn with_resource(mut self, resource_type_id: impl Into<String>, resource_id: i64) -> Self {
        self.context.resource_type_id = Some(resource_type_id.into());
        self.context.resource_id = Some(resource_id);
        self
    }

    /// Attach the principal id to the error context.
    pub fn with_principal(mut self, principal_id: i64) -> Self {
        self.context.principal_id = Some(principal_id);
        self
    }

    /// Create an unknown-resource-type error.
    pub fn unknown_resource_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownResourceType, message)
    }

    /// Create a resource-not-found error.
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotFound, message)
    }

    /// Create a not-shareable error.
    pub fn not_shareable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotShareable, message)
    }

    /// Create a permission-denied error.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    /// Create a not-owner error.
    pub fn not_owner(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotOwner, message)
    }

    /// Create a missing-principal-identifier error.
    pub fn missing_principal_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingPrincipalIdentifier, message)
    }

    /// Create an invalid-principal error.
    pub fn invalid_principal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPrincipal, message)
    }

    /// Create an already-shared error.
    pub fn already_shared(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyShared, message)
    }

    /// Create a sharing-not-found error.
    pub fn sharing_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SharingNotFound, message)
    }

    /// Create a constraint-violation error.
    pub fn constraint_violation(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstraintViolation, reason)
    }

    /// Create an unresolvable-contract error.
    pub fn unresolvable_contract(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvableContract, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    /// Create an external-service error.
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error is fatal at startup rather than recoverable.
    pub fn is_startup_fatal(&self) -> bool {
        self.kind == ErrorKind::UnresolvableContract
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            context: self.context.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

//! Pluggable constraint validation run before grant persistence.

use std::sync::Arc;

use async_trait::async_trait;

use shareguard_core::error::AppError;
use shareguard_core::result::AppResult;
use shareguard_entity::share::SharingRecord;
use shareguard_store::SharedResourceStore;

/// One constraint checked against a candidate grant before it is stored.
///
/// Validators receive the declared resource type and a store handle for
/// uniqueness queries. A failure aborts the mutation before persistence
/// and leaves the store untouched.
#[async_trait]
pub trait ConstraintValidator: Send + Sync + std::fmt::Debug + 'static {
    /// Check the candidate, failing with `ConstraintViolation` on breach.
    async fn validate(
        &self,
        candidate: &SharingRecord,
        declared_type: &str,
        store: &dyn SharedResourceStore,
    ) -> AppResult<()>;
}

/// Ordered chain of constraint validators.
///
/// Validators are composed, not inherited: callers register zero or more,
/// they run in registration order, and the first failure short-circuits
/// the remainder.
#[derive(Debug, Clone, Default)]
pub struct ValidatorChain {
    validators: Vec<Arc<dyn ConstraintValidator>>,
}

impl ValidatorChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain with the built-in key integrity check registered.
    pub fn with_defaults() -> Self {
        Self::new().push(Arc::new(KeyIntegrityValidator))
    }

    /// Append a validator to the end of the chain.
    pub fn push(mut self, validator: Arc<dyn ConstraintValidator>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Run every validator in order; the first failure wins.
    pub async fn run(
        &self,
        candidate: &SharingRecord,
        declared_type: &str,
        store: &dyn SharedResourceStore,
    ) -> AppResult<()> {
        for validator in &self.validators {
            validator.validate(candidate, declared_type, store).await?;
        }
        Ok(())
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Built-in validator enforcing composite-key integrity.
///
/// Rejects empty or mismatched type identifiers and non-positive resource
/// or principal ids, so no provider ever sees a malformed key.
#[derive(Debug, Clone, Copy)]
pub struct KeyIntegrityValidator;

#[async_trait]
impl ConstraintValidator for KeyIntegrityValidator {
    async fn validate(
        &self,
        candidate: &SharingRecord,
        declared_type: &str,
        _store: &dyn SharedResourceStore,
    ) -> AppResult<()> {
        if candidate.resource_type_id.trim().is_empty() {
            return Err(AppError::constraint_violation(
                "Candidate grant has an empty resource type id",
            ));
        }
        if candidate.resource_type_id != declared_type {
            return Err(AppError::constraint_violation(format!(
                "Candidate grant type '{}' does not match declared type '{declared_type}'",
                candidate.resource_type_id
            ))
            .with_resource_type(declared_type));
        }
        if candidate.resource_id <= 0 {
            return Err(AppError::constraint_violation(format!(
                "Candidate grant has non-positive resource id {}",
                candidate.resource_id
            ))
            .with_resource(&candidate.resource_type_id, candidate.resource_id));
        }
        if candidate.principal_id <= 0 {
            return Err(AppError::constraint_violation(format!(
                "Candidate grant has non-positive principal id {}",
                candidate.principal_id
            ))
            .with_principal(candidate.principal_id));
        }
        Ok(())
    }
}

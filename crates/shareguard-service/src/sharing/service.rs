//! Sharing service: grant creation, revocation, and queries.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use shareguard_authz::PermissionManager;
use shareguard_core::config::sharing::SharingConfig;
use shareguard_core::error::{AppError, ErrorKind};
use shareguard_core::events::AuditEvent;
use shareguard_core::result::AppResult;
use shareguard_core::traits::audit::AuditSink;
use shareguard_core::types::ShareAction;
use shareguard_directory::PrincipalResolver;
use shareguard_entity::principal::{Principal, PrincipalRef};
use shareguard_entity::resource::ResourceDescriptor;
use shareguard_entity::share::{SharingKey, SharingRecord, SharingRequest};
use shareguard_registry::ResourceTypeRegistry;
use shareguard_store::SharedResourceStore;

use crate::context::RequestContext;
use crate::validation::ValidatorChain;

/// Orchestrates sharing grants across resource types.
///
/// Every mutation verifies ownership through the resource type registry,
/// resolves principals through the directory, and consults the permission
/// manager before touching the store. The store mutation itself is a
/// single atomic operation, so caller-side cancellation never leaves a
/// partial write behind.
#[derive(Debug, Clone)]
pub struct SharingService {
    /// Frozen resource type registry.
    registry: ResourceTypeRegistry,
    /// Principal resolution with id/email/username precedence.
    resolver: PrincipalResolver,
    /// Permission evaluation, local or remote.
    permissions: Arc<dyn PermissionManager>,
    /// Grant persistence.
    store: Arc<dyn SharedResourceStore>,
    /// Constraint validators run before every insert.
    validators: ValidatorChain,
    /// Audit event destination.
    audit: Arc<dyn AuditSink>,
    /// Behavior switches.
    config: SharingConfig,
}

impl SharingService {
    /// Creates a new sharing service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: ResourceTypeRegistry,
        resolver: PrincipalResolver,
        permissions: Arc<dyn PermissionManager>,
        store: Arc<dyn SharedResourceStore>,
        validators: ValidatorChain,
        audit: Arc<dyn AuditSink>,
        config: SharingConfig,
    ) -> Self {
        Self {
            registry,
            resolver,
            permissions,
            store,
            validators,
            audit,
            config,
        }
    }

    /// Shares a resource with the principal designated by the request.
    ///
    /// The request is shape-validated before any lookup. The acting
    /// principal must own the resource and, unless an admin, hold the
    /// `SHARE` action on the resource type. The created record carries the
    /// resolved grantee id; resolution hints are never stored.
    pub async fn share(
        &self,
        ctx: &RequestContext,
        resource_type_id: &str,
        resource_id: i64,
        request: SharingRequest,
    ) -> AppResult<SharingRecord> {
        request.validate().map_err(|e| {
            AppError::with_source(ErrorKind::ConstraintViolation, "Malformed sharing request", e)
                .with_resource(resource_type_id, resource_id)
        })?;

        let (actor, _descriptor) = self
            .authorize_mutation(ctx, resource_type_id, resource_id)
            .await?;

        let grantee = self.resolver.resolve(&request.principal_ref()).await?;

        let candidate = SharingRecord::new(resource_type_id, resource_id, grantee.id, actor.id);
        self.validators
            .run(&candidate, resource_type_id, self.store.as_ref())
            .await?;

        let record = self.store.insert(candidate).await?;

        self.emit_audit(
            AuditEvent::shared(resource_type_id, resource_id, actor.id, grantee.id)
                .at(ctx.request_time),
        )
        .await;

        info!(
            acting_principal_id = actor.id,
            target_principal_id = grantee.id,
            resource_type_id,
            resource_id,
            "Resource shared"
        );

        Ok(record)
    }

    /// Revokes a grant.
    ///
    /// Runs the same ownership and permission checks as [`share`](Self::share);
    /// the resource must still resolve so ownership can be established.
    pub async fn unshare(
        &self,
        ctx: &RequestContext,
        resource_type_id: &str,
        resource_id: i64,
        principal_id: i64,
    ) -> AppResult<()> {
        let (actor, _descriptor) = self
            .authorize_mutation(ctx, resource_type_id, resource_id)
            .await?;

        let key = SharingKey::new(resource_type_id, resource_id, principal_id);
        let removed = self.store.remove(&key).await?;
        if !removed {
            return Err(AppError::sharing_not_found(format!(
                "No grant {key} to remove"
            ))
            .with_resource(resource_type_id, resource_id)
            .with_principal(principal_id));
        }

        self.emit_audit(
            AuditEvent::unshared(resource_type_id, resource_id, actor.id, principal_id)
                .at(ctx.request_time),
        )
        .await;

        info!(
            acting_principal_id = actor.id,
            target_principal_id = principal_id,
            resource_type_id,
            resource_id,
            "Resource unshared"
        );

        Ok(())
    }

    /// All grants on one resource instance, sorted by composite key.
    ///
    /// Allowed for the resource's owner, admins, and holders of the `FIND`
    /// action on the resource type.
    pub async fn find_by_entity(
        &self,
        ctx: &RequestContext,
        resource_type_id: &str,
        resource_id: i64,
    ) -> AppResult<Vec<SharingRecord>> {
        let handle = self.registry.resolve(resource_type_id)?;
        let actor = self.resolve_actor(ctx).await?;

        let mut allowed = actor.is_admin;
        if !allowed {
            if let Some(descriptor) = handle.find(resource_id).await? {
                allowed = descriptor.owner_principal_id == Some(actor.id);
            }
        }
        if !allowed {
            allowed = self
                .permissions
                .check_permission(actor.id, resource_type_id, ShareAction::Find)
                .await?;
        }
        if !allowed {
            return Err(AppError::permission_denied(format!(
                "Principal {} may not list grants on {resource_type_id}/{resource_id}",
                actor.id
            ))
            .with_resource(resource_type_id, resource_id)
            .with_principal(actor.id));
        }

        self.store.find_by_entity(resource_type_id, resource_id).await
    }

    /// All grants where the principal is the grantee, across types.
    ///
    /// Callable by the principal itself or an admin.
    pub async fn find_by_user(
        &self,
        ctx: &RequestContext,
        principal_id: i64,
    ) -> AppResult<Vec<SharingRecord>> {
        let actor = self.resolve_actor(ctx).await?;
        if actor.id != principal_id && !actor.is_admin {
            return Err(AppError::permission_denied(format!(
                "Principal {} may not list grants received by principal {principal_id}",
                actor.id
            ))
            .with_principal(actor.id));
        }

        self.store.find_by_user(principal_id).await
    }

    /// The principals a resource is shared with.
    pub async fn sharing_users_of(
        &self,
        ctx: &RequestContext,
        resource_type_id: &str,
        resource_id: i64,
    ) -> AppResult<BTreeSet<i64>> {
        let records = self
            .find_by_entity(ctx, resource_type_id, resource_id)
            .await?;
        Ok(records.iter().map(|record| record.principal_id).collect())
    }

    /// The resource ids of one type shared with a principal.
    pub async fn entity_ids_shared_with(
        &self,
        ctx: &RequestContext,
        resource_type_id: &str,
        principal_id: i64,
    ) -> AppResult<BTreeSet<i64>> {
        self.registry.resolve(resource_type_id)?;
        let records = self.find_by_user(ctx, principal_id).await?;
        Ok(records
            .iter()
            .filter(|record| record.resource_type_id == resource_type_id)
            .map(|record| record.resource_id)
            .collect())
    }

    /// Steps shared by `share` and `unshare`: resolve the type, load the
    /// resource, establish shareability, check the actor's permission, and
    /// enforce ownership.
    async fn authorize_mutation(
        &self,
        ctx: &RequestContext,
        resource_type_id: &str,
        resource_id: i64,
    ) -> AppResult<(Principal, ResourceDescriptor)> {
        let handle = self.registry.resolve(resource_type_id)?;

        let descriptor = handle.find(resource_id).await?.ok_or_else(|| {
            AppError::resource_not_found(format!(
                "No {resource_type_id} resource with id {resource_id}"
            ))
            .with_resource(resource_type_id, resource_id)
        })?;

        let owner_id = descriptor.owner_principal_id.ok_or_else(|| {
            AppError::not_shareable(format!(
                "Resource {resource_type_id}/{resource_id} has no owner and cannot be shared"
            ))
            .with_resource(resource_type_id, resource_id)
        })?;

        let actor = self.resolve_actor(ctx).await?;

        if !actor.is_admin {
            let allowed = self
                .permissions
                .check_permission(actor.id, resource_type_id, ShareAction::Share)
                .await?;
            if !allowed {
                return Err(AppError::permission_denied(format!(
                    "Principal {} does not hold SHARE on {resource_type_id}",
                    actor.id
                ))
                .with_resource(resource_type_id, resource_id)
                .with_principal(actor.id));
            }
        }

        if actor.id != owner_id && !(actor.is_admin && self.config.admin_owner_override) {
            return Err(AppError::not_owner(format!(
                "Principal {} does not own {resource_type_id}/{resource_id}",
                actor.id
            ))
            .with_resource(resource_type_id, resource_id)
            .with_principal(actor.id));
        }

        Ok((actor, descriptor))
    }

    /// Resolve the acting principal. An unknown actor is an
    /// `InvalidPrincipal` failure, same as an unknown grantee.
    async fn resolve_actor(&self, ctx: &RequestContext) -> AppResult<Principal> {
        self.resolver
            .resolve(&PrincipalRef::by_id(ctx.principal_id))
            .await
    }

    /// Attempt audit emission once; failures are logged and swallowed.
    async fn emit_audit(&self, event: AuditEvent) {
        if !self.config.audit_enabled {
            return;
        }
        if let Err(err) = self.audit.record(event).await {
            warn!(error = %err, "Audit emission failed");
        }
    }
}

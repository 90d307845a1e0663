//! Stack assembly.
//!
//! [`SharingStackBuilder`] wires the subsystem the way a host embeds it:
//! register a resource service per shareable type, hand over the principal
//! directory, pick local or remote permission evaluation, then build once
//! at startup. The build fails fast when a contract cannot be bound, so a
//! misassembled process never accepts traffic.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use shareguard_authz::{PermissionManager, PolicySet, StaticPermissionManager};
use shareguard_core::config::AppConfig;
use shareguard_core::result::AppResult;
use shareguard_core::traits::audit::AuditSink;
use shareguard_directory::{MemoryPrincipalDirectory, PrincipalDirectory, PrincipalResolver};
use shareguard_integration::{
    HttpPermissionClient, IntegrationResolver, StaticServiceLocation, contracts,
};
use shareguard_registry::{ResourceService, ResourceTypeRegistry};
use shareguard_service::{ConstraintValidator, SharingService, TracingAuditSink, ValidatorChain};
use shareguard_store::SharedStoreManager;

/// Assembled sharing subsystem.
///
/// Holds the service plus the frozen registry and contract bindings for
/// diagnostics. Cheap to clone; every clone shares the same store.
#[derive(Debug, Clone)]
pub struct SharingStack {
    service: SharingService,
    registry: ResourceTypeRegistry,
    integration: IntegrationResolver,
}

impl SharingStack {
    /// Start assembling a stack from loaded configuration.
    pub fn builder(config: AppConfig) -> SharingStackBuilder {
        SharingStackBuilder::new(config)
    }

    /// The sharing service, the subsystem's operational surface.
    pub fn service(&self) -> &SharingService {
        &self.service
    }

    /// The frozen resource type registry.
    pub fn registry(&self) -> &ResourceTypeRegistry {
        &self.registry
    }

    /// The frozen contract bindings, for startup diagnostics.
    pub fn integration(&self) -> &IntegrationResolver {
        &self.integration
    }
}

/// Builder assembling the sharing subsystem.
///
/// Everything not supplied falls back to a hermetic in-process default:
/// an empty principal directory, the tracing audit sink, and the default
/// constraint validators. The permission manager is the exception; without
/// a local manager the build requires a configured endpoint for the
/// permission contract and binds a network client to it.
pub struct SharingStackBuilder {
    config: AppConfig,
    resource_services: Vec<Arc<dyn ResourceService>>,
    directory: Option<Arc<dyn PrincipalDirectory>>,
    permissions: Option<Arc<dyn PermissionManager>>,
    audit: Option<Arc<dyn AuditSink>>,
    validators: ValidatorChain,
}

impl SharingStackBuilder {
    /// Create a builder over loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            resource_services: Vec::new(),
            directory: None,
            permissions: None,
            audit: None,
            validators: ValidatorChain::with_defaults(),
        }
    }

    /// Register a resource service for one shareable type.
    pub fn register_resource_service(mut self, service: Arc<dyn ResourceService>) -> Self {
        self.resource_services.push(service);
        self
    }

    /// Supply the principal directory backing grantee resolution.
    pub fn with_directory(mut self, directory: Arc<dyn PrincipalDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Bind an in-process permission manager.
    ///
    /// A local manager always wins over a configured remote endpoint.
    pub fn with_permission_manager(mut self, permissions: Arc<dyn PermissionManager>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Bind an in-process [`StaticPermissionManager`] over the given policies.
    pub fn with_policies(self, policies: PolicySet) -> Self {
        self.with_permission_manager(Arc::new(StaticPermissionManager::with_policies(policies)))
    }

    /// Replace the default tracing audit sink.
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Append a constraint validator to the chain.
    pub fn with_validator(mut self, validator: Arc<dyn ConstraintValidator>) -> Self {
        self.validators = self.validators.push(validator);
        self
    }

    /// Assemble the stack.
    ///
    /// Fails with a configuration error on registry or store
    /// misconfiguration and with `UnresolvableContract` when the permission
    /// contract has neither a local manager nor a configured endpoint.
    pub async fn build(self) -> AppResult<SharingStack> {
        info!("Assembling ShareGuard v{}", env!("CARGO_PKG_VERSION"));

        // ── Step 1: Resource type registry ───────────────────────────
        let mut registry_builder = ResourceTypeRegistry::builder();
        for service in self.resource_services {
            registry_builder = registry_builder.register(service)?;
        }
        let registry = registry_builder.build();

        // ── Step 2: Principal resolution ─────────────────────────────
        let directory = self
            .directory
            .unwrap_or_else(|| Arc::new(MemoryPrincipalDirectory::new()));
        let resolver = PrincipalResolver::new(directory);

        // ── Step 3: Contract bindings ────────────────────────────────
        let locator = Arc::new(StaticServiceLocation::from_config(&self.config.integration));
        let timeout = Duration::from_secs(self.config.integration.request_timeout_seconds);

        let mut bindings = IntegrationResolver::builder(locator);
        if let Some(permissions) = self.permissions {
            bindings = bindings.provide_local(contracts::PERMISSION_MANAGER, permissions);
        }
        bindings = bindings.provide_remote(contracts::PERMISSION_MANAGER, move |endpoint| {
            let client = HttpPermissionClient::new(endpoint, timeout)?;
            Ok(Arc::new(client) as Arc<dyn PermissionManager>)
        });

        let audit: Arc<dyn AuditSink> = self
            .audit
            .unwrap_or_else(|| Arc::new(TracingAuditSink::new()));
        bindings = bindings.provide_local(contracts::AUDIT_SINK, audit);

        let integration = bindings.build().await?;
        let permissions: Arc<dyn PermissionManager> =
            integration.resolve(contracts::PERMISSION_MANAGER)?;
        let audit: Arc<dyn AuditSink> = integration.resolve(contracts::AUDIT_SINK)?;

        // ── Step 4: Shared-resource store ────────────────────────────
        let store = SharedStoreManager::new(&self.config.store)?.provider_arc();

        // ── Step 5: Sharing service ──────────────────────────────────
        let service = SharingService::new(
            registry.clone(),
            resolver,
            permissions,
            store,
            self.validators,
            audit,
            self.config.sharing.clone(),
        );

        info!(
            resource_types = registry.len(),
            contracts = integration.contract_ids().len(),
            "ShareGuard stack assembled"
        );

        Ok(SharingStack {
            service,
            registry,
            integration,
        })
    }
}

impl std::fmt::Debug for SharingStackBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharingStackBuilder")
            .field("resource_services", &self.resource_services.len())
            .field("has_directory", &self.directory.is_some())
            .field("has_local_permissions", &self.permissions.is_some())
            .finish()
    }
}

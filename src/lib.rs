//! # ShareGuard
//!
//! Resource sharing and permission enforcement subsystem.
//!
//! ShareGuard lets a host application grant, revoke, and query access to
//! its domain resources without the sharing layer knowing what those
//! resources are. Hosts register a [`ResourceService`] per shareable type,
//! supply a [`PrincipalDirectory`] over their account store, and choose a
//! permission evaluation mode: an in-process [`PolicySet`] or a remote
//! policy service reached through a configured endpoint. The sharing flow
//! is identical either way.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use shareguard::stack::SharingStack;
//! use shareguard::{AppConfig, PolicySet, RequestContext, ShareAction, SharingRequest};
//!
//! let config = AppConfig::load("development")?;
//! shareguard::telemetry::init(&config.logging);
//!
//! let stack = SharingStack::builder(config)
//!     .register_resource_service(Arc::new(my_document_service))
//!     .with_directory(Arc::new(my_user_directory))
//!     .with_policies(PolicySet::new().grant(1, "document", ShareAction::Share))
//!     .build()
//!     .await?;
//!
//! let ctx = RequestContext::new(1);
//! let request = SharingRequest::by_email("document", 100, "bob@example.com");
//! let record = stack.service().share(&ctx, "document", 100, request).await?;
//! ```

pub mod stack;
pub mod telemetry;

pub use shareguard_core::config::AppConfig;
pub use shareguard_core::error::{AppError, ErrorContext, ErrorKind};
pub use shareguard_core::events::{AuditAction, AuditEvent};
pub use shareguard_core::result::AppResult;
pub use shareguard_core::traits::audit::AuditSink;
pub use shareguard_core::traits::locator::ServiceLocation;
pub use shareguard_core::types::ShareAction;

pub use shareguard_entity::principal::{Principal, PrincipalRef};
pub use shareguard_entity::resource::ResourceDescriptor;
pub use shareguard_entity::share::{SharingKey, SharingRecord, SharingRequest};

pub use shareguard_authz::{
    ANY_RESOURCE_TYPE, PermissionManager, PolicySet, StaticPermissionManager,
};
pub use shareguard_directory::{MemoryPrincipalDirectory, PrincipalDirectory, PrincipalResolver};
pub use shareguard_integration::{
    BindingKind, HttpPermissionClient, IntegrationResolver, StaticServiceLocation, contracts,
};
pub use shareguard_registry::{MemoryResourceService, ResourceService, ResourceTypeRegistry};
pub use shareguard_service::{
    ConstraintValidator, MemoryAuditSink, RequestContext, SharingService, TracingAuditSink,
    ValidatorChain,
};
pub use shareguard_store::{MemorySharedStore, SharedResourceStore, SharedStoreManager};

pub use stack::{SharingStack, SharingStackBuilder};

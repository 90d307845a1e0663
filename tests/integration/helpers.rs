//! Shared test helpers for integration tests.

use std::sync::Arc;

use shareguard::stack::SharingStack;
use shareguard::{
    AppConfig, AuditSink, MemoryAuditSink, MemoryPrincipalDirectory, MemoryResourceService,
    PolicySet, Principal, PrincipalDirectory, RequestContext, ResourceDescriptor, ResourceService,
    ShareAction, SharingService,
};

/// Owner of document 100.
pub const ALICE: i64 = 1;
/// Owner of folder 7, holds SHARE on documents and folders.
pub const BOB: i64 = 2;
/// Holds no permissions.
pub const CAROL: i64 = 3;
/// Administrator.
pub const ROOT: i64 = 9;

/// Test stack wired entirely from in-memory providers.
pub struct TestStack {
    /// The assembled subsystem under test.
    pub stack: SharingStack,
    /// Captures audit events for assertions.
    pub audit: Arc<MemoryAuditSink>,
    /// The "doc" resource fixtures, mutable mid-test.
    pub docs: Arc<MemoryResourceService>,
    /// The principal fixtures, mutable mid-test.
    pub directory: Arc<MemoryPrincipalDirectory>,
}

impl TestStack {
    /// Stack over default configuration and the standard policies.
    pub async fn new() -> Self {
        Self::assemble(AppConfig::default(), default_policies()).await
    }

    /// Stack over the given configuration and the standard policies.
    pub async fn with_config(config: AppConfig) -> Self {
        Self::assemble(config, default_policies()).await
    }

    /// Stack over default configuration and the given policies.
    pub async fn with_policies(policies: PolicySet) -> Self {
        Self::assemble(AppConfig::default(), policies).await
    }

    /// Assemble a stack with the standard fixtures.
    ///
    /// Resources: "doc" 100 owned by Alice, "doc" 200 ownerless, "folder" 7
    /// owned by Bob. Principals: Alice, Bob, Carol, and Root (admin).
    pub async fn assemble(config: AppConfig, policies: PolicySet) -> Self {
        let docs = Arc::new(MemoryResourceService::new("doc"));
        docs.put(ResourceDescriptor::owned(100, ALICE).with_display_name("Q3 report"));
        docs.put(ResourceDescriptor::ownerless(200));

        let folders = Arc::new(MemoryResourceService::new("folder"));
        folders.put(ResourceDescriptor::owned(7, BOB));

        let directory = Arc::new(MemoryPrincipalDirectory::new());
        directory.put(Principal::new(ALICE, "alice@example.com", "alice"));
        directory.put(Principal::new(BOB, "bob@example.com", "bob"));
        directory.put(Principal::new(CAROL, "carol@example.com", "carol"));
        directory.put(Principal::new(ROOT, "root@example.com", "root").admin());

        let audit = Arc::new(MemoryAuditSink::new());

        let stack = SharingStack::builder(config)
            .register_resource_service(Arc::clone(&docs) as Arc<dyn ResourceService>)
            .register_resource_service(folders)
            .with_directory(Arc::clone(&directory) as Arc<dyn PrincipalDirectory>)
            .with_policies(policies)
            .with_audit_sink(Arc::clone(&audit) as Arc<dyn AuditSink>)
            .build()
            .await
            .expect("Failed to assemble test stack");

        Self {
            stack,
            audit,
            docs,
            directory,
        }
    }

    /// The sharing service under test.
    pub fn service(&self) -> &SharingService {
        self.stack.service()
    }
}

/// Standard permission policies for the fixtures.
///
/// Alice and Bob hold SHARE on documents, Bob also on folders. Carol and
/// Root hold nothing; Root relies on admin status.
pub fn default_policies() -> PolicySet {
    PolicySet::new()
        .grant(ALICE, "doc", ShareAction::Share)
        .grant(BOB, "doc", ShareAction::Share)
        .grant(BOB, "folder", ShareAction::Share)
}

/// Request context acting as the given principal.
pub fn ctx(principal_id: i64) -> RequestContext {
    RequestContext::new(principal_id)
}

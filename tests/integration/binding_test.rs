//! Integration tests for local/remote contract binding at assembly time.

mod helpers;

use helpers::{ALICE, BOB, TestStack, ctx};

use shareguard::stack::SharingStack;
use shareguard::{AppConfig, BindingKind, ErrorKind, SharingRequest, contracts};

fn config_with_permission_endpoint(endpoint: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config
        .integration
        .endpoints
        .insert(contracts::PERMISSION_MANAGER.to_string(), endpoint.to_string());
    config
}

#[tokio::test]
async fn test_local_manager_wins_over_configured_endpoint() {
    // The endpoint points nowhere; with a local manager bound it must
    // never be contacted.
    let config = config_with_permission_endpoint("http://authz.invalid:9");
    let app = TestStack::with_config(config).await;

    assert_eq!(
        app.stack.integration().binding(contracts::PERMISSION_MANAGER),
        Some(&BindingKind::Local)
    );

    app.service()
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .expect("Share must evaluate permissions in process");
}

#[tokio::test]
async fn test_remote_binding_uses_configured_endpoint() {
    let config = config_with_permission_endpoint("http://authz.internal:8080");

    let stack = SharingStack::builder(config)
        .build()
        .await
        .expect("Stack must assemble with a remote permission binding");

    assert_eq!(
        stack.integration().binding(contracts::PERMISSION_MANAGER),
        Some(&BindingKind::Remote {
            endpoint: "http://authz.internal:8080".to_string()
        })
    );
}

#[tokio::test]
async fn test_missing_permission_binding_fails_assembly() {
    let err = SharingStack::builder(AppConfig::default())
        .build()
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnresolvableContract);
    assert!(err.is_startup_fatal());
}

#[tokio::test]
async fn test_binding_choice_is_deterministic() {
    for _ in 0..3 {
        let config = config_with_permission_endpoint("http://authz.internal:8080");
        let app = TestStack::with_config(config).await;
        assert_eq!(
            app.stack.integration().binding(contracts::PERMISSION_MANAGER),
            Some(&BindingKind::Local)
        );
    }
}

#[tokio::test]
async fn test_audit_sink_is_always_bound_locally() {
    let app = TestStack::new().await;

    assert_eq!(
        app.stack.integration().binding(contracts::AUDIT_SINK),
        Some(&BindingKind::Local)
    );
    assert_eq!(
        app.stack.integration().contract_ids(),
        vec![
            contracts::AUDIT_SINK.to_string(),
            contracts::PERMISSION_MANAGER.to_string(),
        ]
    );
}

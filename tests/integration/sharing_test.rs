//! Integration tests for the sharing lifecycle: grant, revoke, query.

mod helpers;

use helpers::{ALICE, BOB, CAROL, TestStack, ctx};

use shareguard::{AuditAction, ErrorKind, SharingRequest};

#[tokio::test]
async fn test_share_then_list_then_unshare() {
    let app = TestStack::new().await;
    let service = app.service();

    let record = service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .expect("Owner with SHARE permission must be able to share");

    assert_eq!(record.resource_type_id, "doc");
    assert_eq!(record.resource_id, 100);
    assert_eq!(record.principal_id, BOB);
    assert_eq!(record.granted_by, ALICE);

    let grants = service.find_by_entity(&ctx(ALICE), "doc", 100).await.unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0].key(), record.key());

    let received = service.find_by_user(&ctx(BOB), BOB).await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].resource_id, 100);

    service.unshare(&ctx(ALICE), "doc", 100, BOB).await.unwrap();

    let grants = service.find_by_entity(&ctx(ALICE), "doc", 100).await.unwrap();
    assert!(grants.is_empty());
}

#[tokio::test]
async fn test_double_share_is_rejected() {
    let app = TestStack::new().await;
    let service = app.service();
    let request = SharingRequest::by_id("doc", 100, BOB);

    service
        .share(&ctx(ALICE), "doc", 100, request.clone())
        .await
        .unwrap();
    let err = service
        .share(&ctx(ALICE), "doc", 100, request)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::AlreadyShared);
    assert_eq!(err.context.resource_id, Some(100));
    assert_eq!(err.context.principal_id, Some(BOB));

    // The losing attempt must not leave a second record or audit event.
    let grants = service.find_by_entity(&ctx(ALICE), "doc", 100).await.unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(app.audit.len(), 1);
}

#[tokio::test]
async fn test_unshare_without_grant_fails() {
    let app = TestStack::new().await;

    let err = app
        .service()
        .unshare(&ctx(ALICE), "doc", 100, BOB)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::SharingNotFound);
    assert_eq!(err.context.resource_type_id.as_deref(), Some("doc"));
    assert_eq!(err.context.principal_id, Some(BOB));
}

#[tokio::test]
async fn test_share_unknown_resource_type_fails() {
    let app = TestStack::new().await;

    let err = app
        .service()
        .share(
            &ctx(ALICE),
            "dashboard",
            1,
            SharingRequest::by_id("dashboard", 1, BOB),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnknownResourceType);
    assert_eq!(err.context.resource_type_id.as_deref(), Some("dashboard"));
}

#[tokio::test]
async fn test_share_missing_resource_fails() {
    let app = TestStack::new().await;

    let err = app
        .service()
        .share(&ctx(ALICE), "doc", 999, SharingRequest::by_id("doc", 999, BOB))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::ResourceNotFound);
    assert_eq!(err.context.resource_id, Some(999));
}

#[tokio::test]
async fn test_share_by_email_stores_resolved_id() {
    let app = TestStack::new().await;

    let record = app
        .service()
        .share(
            &ctx(ALICE),
            "doc",
            100,
            SharingRequest::by_email("doc", 100, "bob@example.com"),
        )
        .await
        .unwrap();

    assert_eq!(record.principal_id, BOB);
}

#[tokio::test]
async fn test_id_takes_precedence_over_email() {
    let app = TestStack::new().await;

    let mut request = SharingRequest::by_id("doc", 100, BOB);
    request.principal_email = Some("carol@example.com".to_string());

    let record = app
        .service()
        .share(&ctx(ALICE), "doc", 100, request)
        .await
        .unwrap();

    assert_eq!(record.principal_id, BOB);
}

#[tokio::test]
async fn test_unknown_email_does_not_fall_back_to_username() {
    let app = TestStack::new().await;

    let mut request = SharingRequest::by_email("doc", 100, "nobody@example.com");
    request.principal_username = Some("carol".to_string());

    let err = app
        .service()
        .share(&ctx(ALICE), "doc", 100, request)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidPrincipal);
}

#[tokio::test]
async fn test_share_without_principal_identifier_fails() {
    let app = TestStack::new().await;

    let mut request = SharingRequest::default();
    request.resource_type_id = "doc".to_string();
    request.resource_id = 100;

    let err = app
        .service()
        .share(&ctx(ALICE), "doc", 100, request)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::MissingPrincipalIdentifier);
}

#[tokio::test]
async fn test_projections_cover_both_directions() {
    let app = TestStack::new().await;
    let service = app.service();

    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap();
    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .unwrap();
    service
        .share(&ctx(BOB), "folder", 7, SharingRequest::by_id("folder", 7, CAROL))
        .await
        .unwrap();

    let users = service
        .sharing_users_of(&ctx(ALICE), "doc", 100)
        .await
        .unwrap();
    assert_eq!(users.into_iter().collect::<Vec<_>>(), vec![BOB, CAROL]);

    let doc_ids = service
        .entity_ids_shared_with(&ctx(CAROL), "doc", CAROL)
        .await
        .unwrap();
    assert_eq!(doc_ids.into_iter().collect::<Vec<_>>(), vec![100]);

    let folder_ids = service
        .entity_ids_shared_with(&ctx(CAROL), "folder", CAROL)
        .await
        .unwrap();
    assert_eq!(folder_ids.into_iter().collect::<Vec<_>>(), vec![7]);

    let err = service
        .entity_ids_shared_with(&ctx(CAROL), "dashboard", CAROL)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownResourceType);
}

#[tokio::test]
async fn test_audit_trail_records_committed_mutations() {
    let app = TestStack::new().await;
    let service = app.service();

    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap();
    service.unshare(&ctx(ALICE), "doc", 100, BOB).await.unwrap();

    let events = app.audit.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, AuditAction::Shared);
    assert_eq!(events[1].action, AuditAction::Unshared);
    assert_eq!(events[0].acting_principal_id, ALICE);
    assert_eq!(events[0].target_principal_id, BOB);
    assert_eq!(events[1].resource_id, 100);
}

#[tokio::test]
async fn test_audit_can_be_disabled() {
    let mut config = shareguard::AppConfig::default();
    config.sharing.audit_enabled = false;
    let app = TestStack::with_config(config).await;

    app.service()
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap();

    assert!(app.audit.is_empty());
}

//! Integration tests for ownership and permission enforcement.

mod helpers;

use helpers::{ALICE, BOB, CAROL, ROOT, TestStack, ctx};

use shareguard::{AppConfig, ErrorKind, PolicySet, ShareAction, SharingRequest};

#[tokio::test]
async fn test_non_owner_cannot_share() {
    let app = TestStack::new().await;

    // Bob holds SHARE on documents but does not own document 100.
    let err = app
        .service()
        .share(&ctx(BOB), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotOwner);
    assert_eq!(err.context.principal_id, Some(BOB));
}

#[tokio::test]
async fn test_owner_without_share_permission_is_denied() {
    let app = TestStack::with_policies(PolicySet::new()).await;

    let err = app
        .service()
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::PermissionDenied);
}

#[tokio::test]
async fn test_permission_check_runs_before_ownership() {
    let app = TestStack::with_policies(PolicySet::new()).await;

    // Bob fails both checks; the permission failure must win.
    let err = app
        .service()
        .share(&ctx(BOB), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::PermissionDenied);
}

#[tokio::test]
async fn test_admin_without_override_must_own() {
    let app = TestStack::new().await;

    let err = app
        .service()
        .share(&ctx(ROOT), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotOwner);
}

#[tokio::test]
async fn test_admin_with_override_shares_foreign_resource() {
    let mut config = AppConfig::default();
    config.sharing.admin_owner_override = true;
    let app = TestStack::with_config(config).await;

    let record = app
        .service()
        .share(&ctx(ROOT), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .expect("Admin with owner override must be able to share any resource");

    assert_eq!(record.granted_by, ROOT);
    assert_eq!(record.principal_id, CAROL);
}

#[tokio::test]
async fn test_override_does_not_help_non_admins() {
    let mut config = AppConfig::default();
    config.sharing.admin_owner_override = true;
    let app = TestStack::with_config(config).await;

    let err = app
        .service()
        .share(&ctx(BOB), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotOwner);
}

#[tokio::test]
async fn test_ownerless_resource_is_not_shareable() {
    let app = TestStack::new().await;

    let err = app
        .service()
        .share(&ctx(ALICE), "doc", 200, SharingRequest::by_id("doc", 200, BOB))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotShareable);
    assert_eq!(err.context.resource_id, Some(200));
}

#[tokio::test]
async fn test_unknown_actor_is_rejected() {
    let app = TestStack::new().await;

    let err = app
        .service()
        .share(&ctx(42), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidPrincipal);
    assert_eq!(err.context.principal_id, Some(42));
}

#[tokio::test]
async fn test_unshare_enforces_same_checks_as_share() {
    let app = TestStack::new().await;
    let service = app.service();

    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap();

    // Bob may not revoke a grant on a resource he does not own, not even
    // the one naming him.
    let err = service.unshare(&ctx(BOB), "doc", 100, BOB).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotOwner);

    service.unshare(&ctx(ALICE), "doc", 100, BOB).await.unwrap();
}

#[tokio::test]
async fn test_listing_grants_requires_standing() {
    let app = TestStack::new().await;
    let service = app.service();

    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap();

    // Owner and admin may list; Carol holds neither ownership nor FIND.
    assert_eq!(
        service.find_by_entity(&ctx(ALICE), "doc", 100).await.unwrap().len(),
        1
    );
    assert_eq!(
        service.find_by_entity(&ctx(ROOT), "doc", 100).await.unwrap().len(),
        1
    );

    let err = service
        .find_by_entity(&ctx(CAROL), "doc", 100)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::PermissionDenied);
}

#[tokio::test]
async fn test_find_action_grants_listing() {
    let policies = helpers::default_policies().grant(CAROL, "doc", ShareAction::Find);
    let app = TestStack::with_policies(policies).await;
    let service = app.service();

    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
        .await
        .unwrap();

    let grants = service.find_by_entity(&ctx(CAROL), "doc", 100).await.unwrap();
    assert_eq!(grants.len(), 1);
}

#[tokio::test]
async fn test_received_grants_are_private_to_the_principal() {
    let app = TestStack::new().await;
    let service = app.service();

    service
        .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
        .await
        .unwrap();

    assert_eq!(service.find_by_user(&ctx(CAROL), CAROL).await.unwrap().len(), 1);
    assert_eq!(service.find_by_user(&ctx(ROOT), CAROL).await.unwrap().len(), 1);

    let err = service.find_by_user(&ctx(BOB), CAROL).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::PermissionDenied);
}

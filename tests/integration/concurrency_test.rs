//! Integration tests for concurrent sharing against one composite key.

mod helpers;

use helpers::{ALICE, BOB, CAROL, TestStack, ctx};

use shareguard::{ErrorKind, SharingRequest};

#[tokio::test]
async fn test_racing_shares_produce_exactly_one_grant() {
    let app = TestStack::new().await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let stack = app.stack.clone();
        handles.push(tokio::spawn(async move {
            stack
                .service()
                .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
                .await
        }));
    }

    let mut wins = 0;
    for handle in handles {
        match handle.await.expect("Share task panicked") {
            Ok(record) => {
                wins += 1;
                assert_eq!(record.principal_id, BOB);
            }
            Err(err) => assert_eq!(err.kind, ErrorKind::AlreadyShared),
        }
    }

    assert_eq!(wins, 1);

    let grants = app
        .service()
        .find_by_entity(&ctx(ALICE), "doc", 100)
        .await
        .unwrap();
    assert_eq!(grants.len(), 1);

    // Only the winning mutation was committed, so only it is audited.
    assert_eq!(app.audit.len(), 1);
}

#[tokio::test]
async fn test_racing_shares_on_distinct_keys_all_win() {
    let app = TestStack::new().await;

    let bob = {
        let stack = app.stack.clone();
        tokio::spawn(async move {
            stack
                .service()
                .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, BOB))
                .await
        })
    };
    let carol = {
        let stack = app.stack.clone();
        tokio::spawn(async move {
            stack
                .service()
                .share(&ctx(ALICE), "doc", 100, SharingRequest::by_id("doc", 100, CAROL))
                .await
        })
    };

    bob.await.expect("Share task panicked").unwrap();
    carol.await.expect("Share task panicked").unwrap();

    let grants = app
        .service()
        .find_by_entity(&ctx(ALICE), "doc", 100)
        .await
        .unwrap();
    assert_eq!(grants.len(), 2);

    // Snapshots come back ordered by composite key.
    assert_eq!(grants[0].principal_id, BOB);
    assert_eq!(grants[1].principal_id, CAROL);
}

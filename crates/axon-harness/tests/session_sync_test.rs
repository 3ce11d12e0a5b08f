//! Session synchronizer tests.
//!
//! Drives the synchronizer with a scripted provider and asserts on the
//! published snapshots. Tests run on a paused single-threaded runtime so
//! "nothing happened" can be asserted without wall-clock waits.

use std::{sync::Arc, time::Duration};

use axon_client::{AuthError, ProviderError, Session, SessionStatus, SessionSynchronizer};
use axon_harness::{FakeProvider, identity};
use tokio::{sync::watch, time::timeout};

const TICK: Duration = Duration::from_secs(1);

async fn next_snapshot(rx: &mut watch::Receiver<Session>) -> Session {
    timeout(TICK, rx.changed()).await.expect("snapshot expected").expect("sender alive");
    rx.borrow_and_update().clone()
}

async fn assert_no_snapshot(rx: &mut watch::Receiver<Session>) {
    assert!(
        timeout(TICK, rx.changed()).await.is_err(),
        "no snapshot expected, got {:?}",
        rx.borrow().clone()
    );
}

fn started(provider: &Arc<FakeProvider>) -> SessionSynchronizer<FakeProvider> {
    let mut sync = SessionSynchronizer::new(Arc::clone(provider));
    sync.start().expect("first start");
    sync
}

#[tokio::test(start_paused = true)]
async fn starts_in_initializing() {
    let provider = Arc::new(FakeProvider::new());
    let sync = started(&provider);

    assert_eq!(sync.current().status(), SessionStatus::Initializing);
}

#[tokio::test(start_paused = true)]
async fn sign_in_notification_publishes_authenticated() {
    let provider = Arc::new(FakeProvider::new());
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    provider.notify(Some(identity("alice")));

    let session = next_snapshot(&mut rx).await;
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.identity().map(|i| i.uid.as_str()), Some("alice"));
    assert_eq!(session.token().map(axon_client::AuthToken::as_str), Some("token-for-alice"));
    assert!(session.is_request_ready());
}

#[tokio::test(start_paused = true)]
async fn sign_out_notification_publishes_unauthenticated() {
    let provider = Arc::new(FakeProvider::new());
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    provider.notify(Some(identity("alice")));
    next_snapshot(&mut rx).await;

    provider.notify(None);
    let session = next_snapshot(&mut rx).await;
    assert_eq!(session, Session::Unauthenticated);
    assert_eq!(session.identity(), None);
    assert_eq!(session.token(), None);
}

#[tokio::test(start_paused = true)]
async fn token_derivation_failure_keeps_identity_without_credential() {
    let provider = Arc::new(FakeProvider::new());
    provider.fail_next_token(ProviderError::Network("token endpoint down".to_owned()));
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    provider.notify(Some(identity("alice")));

    let session = next_snapshot(&mut rx).await;
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.identity().map(|i| i.uid.as_str()), Some("alice"));
    assert_eq!(session.token(), None);
    assert!(!session.is_request_ready());
}

#[tokio::test(start_paused = true)]
async fn notifications_are_processed_in_provider_order() {
    let provider = Arc::new(FakeProvider::new());
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    provider.notify(Some(identity("alice")));
    provider.notify(None);
    provider.notify(Some(identity("bob")));

    // A fresh receiver may observe coalesced intermediates, but the final
    // snapshot must reflect the last notification.
    let mut last = next_snapshot(&mut rx).await;
    while let Ok(Ok(())) = timeout(TICK, rx.changed()).await {
        last = rx.borrow_and_update().clone();
    }
    assert_eq!(last.identity().map(|i| i.uid.as_str()), Some("bob"));
}

#[tokio::test(start_paused = true)]
async fn every_snapshot_pairs_token_with_identity() {
    let provider = Arc::new(FakeProvider::new());
    provider.fail_next_token(ProviderError::Network("down".to_owned()));
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    let changes = [Some(identity("alice")), None, Some(identity("bob")), None];
    for change in changes {
        provider.notify(change);
        let session = next_snapshot(&mut rx).await;
        // A token is never observable without its identity.
        if session.token().is_some() {
            assert!(session.identity().is_some());
        }
        if session.identity().is_none() {
            assert_eq!(session.token(), None);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn login_requests_provider_and_does_not_mutate_session() {
    let provider = Arc::new(FakeProvider::new());
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    sync.login().await.expect("login");

    assert_eq!(provider.sign_in_count(), 1);
    assert_no_snapshot(&mut rx).await;
    assert_eq!(sync.current(), Session::Initializing);
}

#[tokio::test(start_paused = true)]
async fn login_failure_surfaces_error_and_leaves_session_untouched() {
    let provider = Arc::new(FakeProvider::new());
    provider.fail_next_sign_in(ProviderError::Cancelled);
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    let err = sync.login().await.unwrap_err();
    assert_eq!(err, AuthError::Provider(ProviderError::Cancelled));
    assert_eq!(sync.errors().borrow().clone(), Some("sign-in cancelled by user".to_owned()));
    assert_no_snapshot(&mut rx).await;
}

#[tokio::test(start_paused = true)]
async fn successful_login_clears_previous_error() {
    let provider = Arc::new(FakeProvider::new());
    provider.fail_next_sign_in(ProviderError::Cancelled);
    let sync = started(&provider);

    let _ = sync.login().await;
    assert!(sync.errors().borrow().is_some());

    sync.login().await.expect("second login");
    assert_eq!(sync.errors().borrow().clone(), None);
}

#[tokio::test(start_paused = true)]
async fn logout_failure_leaves_session_untouched() {
    let provider = Arc::new(FakeProvider::new());
    provider.fail_next_sign_out(ProviderError::Network("offline".to_owned()));
    let sync = started(&provider);
    let mut rx = sync.subscribe();

    provider.notify(Some(identity("alice")));
    next_snapshot(&mut rx).await;

    let err = sync.logout().await.unwrap_err();
    assert!(matches!(err, AuthError::Provider(ProviderError::Network(_))));
    assert_eq!(provider.sign_out_count(), 1);
    assert_eq!(sync.current().identity().map(|i| i.uid.as_str()), Some("alice"));
}

#[tokio::test(start_paused = true)]
async fn second_start_is_rejected() {
    let provider = Arc::new(FakeProvider::new());
    let mut sync = SessionSynchronizer::new(Arc::clone(&provider));

    sync.start().expect("first start");
    assert_eq!(sync.start().unwrap_err(), AuthError::AlreadyStarted);
}

#[tokio::test(start_paused = true)]
async fn stop_prevents_further_mutation() {
    let provider = Arc::new(FakeProvider::new());
    let mut sync = started(&provider);
    let mut rx = sync.subscribe();

    provider.notify(Some(identity("alice")));
    next_snapshot(&mut rx).await;

    sync.stop().await;

    provider.notify(None);
    assert_no_snapshot(&mut rx).await;
    assert_eq!(sync.current().status(), SessionStatus::Authenticated);

    // Idempotent.
    sync.stop().await;
}

//! End-to-end flow: provider notification -> session -> guard -> room API.

use std::{sync::Arc, time::Duration};

use axon_client::{
    RoomApi, RouteDecision, RouteGuard, SessionStatus, SessionSynchronizer,
};
use axon_harness::{FakeProvider, StubTransport, identity};
use axon_proto::CreateRoomRequest;
use serde_json::json;
use tokio::time::timeout;

#[tokio::test(start_paused = true)]
async fn sign_in_unlocks_navigation_and_room_creation() {
    let provider = Arc::new(FakeProvider::new());
    let mut sync = SessionSynchronizer::new(Arc::clone(&provider));
    sync.start().expect("start");

    let guard = RouteGuard::default();
    let mut rx = sync.subscribe();

    // Before the first notification: hold, never a redirect flash.
    assert_eq!(guard.decide(&rx.borrow().clone(), "/room/abc"), RouteDecision::Hold);

    // The user signs in; the provider notifies on its own schedule.
    sync.login().await.expect("login");
    provider.notify(Some(identity("teacher-1")));

    timeout(Duration::from_secs(1), rx.changed()).await.expect("snapshot").expect("alive");
    let session = rx.borrow_and_update().clone();
    assert_eq!(guard.decide(&session, "/room/abc"), RouteDecision::Allow);

    // Create a room with the derived credential.
    let stub = Arc::new(StubTransport::new());
    stub.respond(
        200,
        &json!({
            "id": "0191d1a0-5c3e-7f4a-9b2d-1e8f3c6a7b01",
            "slug": "mth1",
            "name": "Math 101",
            "owner_id": "0191d1a0-5c3e-7f4a-9b2d-1e8f3c6a7b02",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
        }),
    );
    let api = RoomApi::new(Arc::clone(&stub), "https://axon.test");

    let token = session.token().expect("request-ready session").clone();
    let payload = CreateRoomRequest { name: "Math 101".to_owned(), slug: Some("mth1".to_owned()) };
    let room = api.create_room(&token, &payload).await.expect("room");

    assert_eq!(room.name, "Math 101");
    assert_eq!(stub.requests()[0].bearer, "token-for-teacher-1");

    // Sign out flows back through the same pipeline.
    sync.logout().await.expect("logout");
    provider.notify(None);
    timeout(Duration::from_secs(1), rx.changed()).await.expect("snapshot").expect("alive");
    let session = rx.borrow_and_update().clone();
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(guard.decide(&session, "/room/abc"), RouteDecision::RedirectToLogin);
    assert_eq!(guard.decide(&session, "/login"), RouteDecision::Allow);

    sync.stop().await;
}

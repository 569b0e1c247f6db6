//! # Session Tests
//!
//! Token lifecycle around 401/403 responses and session event delivery.

use super::*;
use crate::core::error::ApiError;
use crate::services::api::events::SessionEvent;
use crate::services::api::request::RequestOptions;
use serde_json::json;

#[tokio::test]
async fn test_unauthorized_clears_token() {
    // Arrange
    let (client, transport) = test_client();
    client.tokens().set_token("expired");
    transport.push_json(401, json!({"detail": "Token has expired"}));

    // Act
    let err = client.execute("/auth/me", RequestOptions::get()).await.unwrap_err();

    // Assert
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(err.to_string(), "Token has expired");
    assert!(!client.tokens().has_token());
    assert_eq!(transport.requests().len(), 1, "no automatic retry after 401");
}

#[tokio::test]
async fn test_unauthorized_clears_token_regardless_of_body() {
    let (client, transport) = test_client();
    transport.push_raw(401, "application/json", "<html>not json</html>");
    transport.push_raw(401, "text/plain", "");

    for _ in 0..2 {
        client.tokens().set_token("tok");
        let err = client.execute("/scholarships", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(!client.tokens().has_token());
    }
}

#[tokio::test]
async fn test_forbidden_keeps_token() {
    let (client, transport) = test_client();
    client.tokens().set_token("student-token");
    transport.push_json(403, json!({"detail": "Admin access required"}));

    let err = client.execute("/admin/dashboard/stats", RequestOptions::get()).await.unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
    assert_eq!(err.to_string(), "Admin access required");
    assert_eq!(client.tokens().get_token().as_deref(), Some("student-token"));
}

#[tokio::test]
async fn test_session_events_are_delivered() {
    let (client, transport) = test_client();
    let mut events = client.session_events().subscribe();
    transport.push_json(403, json!({"detail": "Not allowed"}));
    transport.push_json(401, json!({"detail": "Session expired"}));

    let _ = client.execute("/users", RequestOptions::get()).await;
    let _ = client.execute("/users", RequestOptions::get()).await;

    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::Forbidden { message: "Not allowed".to_string() }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::Expired { message: "Session expired".to_string() }
    );
}

#[tokio::test]
async fn test_other_failures_emit_no_event() {
    let (client, transport) = test_client();
    let mut events = client.session_events().subscribe();
    transport.push_json(500, json!({"detail": "boom"}));

    let _ = client.execute("/users", RequestOptions::get()).await;

    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_in_flight_request_keeps_captured_token() {
    // Arrange: clearing the store while the first request is being sent
    let tokens = Arc::new(TokenStore::in_memory());
    tokens.set_token("captured");
    let hook_tokens = tokens.clone();
    let transport = MockTransport::with_hook(move |_| hook_tokens.clear_token());
    let (client, transport) = test_client_with(transport, tokens);

    // Act
    client.execute("/applications", RequestOptions::get()).await.unwrap();
    client.execute("/applications", RequestOptions::get()).await.unwrap();

    // Assert
    let requests = transport.requests();
    assert_eq!(requests[0].header("Authorization"), Some("Bearer captured"));
    assert_eq!(requests[1].header("Authorization"), None);
}

#[tokio::test]
async fn test_concurrent_calls_share_token_store() {
    let (client, transport) = test_client();
    let client = Arc::new(client);
    client.tokens().set_token("shared");

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.execute(&format!("/applications/{i}"), RequestOptions::get()).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|r| r.header("Authorization") == Some("Bearer shared")));
}

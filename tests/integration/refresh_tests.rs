use crate::common;
use facelog_client::prelude::*;
use facelog_client::session::StoredTokens;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_refresh_then_retry_with_new_token() {
    let mut server = Server::new_async().await;
    let expired = server
        .mock("GET", "/api/attendance/absences/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"refresh": "R1"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access":"A2"}"#)
        .expect(1)
        .create_async()
        .await;
    let retried = server
        .mock("GET", "/api/attendance/absences/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body(r#"{"retried":true}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, store) = common::client(&server, Some("A1"), Some("R1"));
    let response = client
        .http()
        .auth_fetch("attendance/absences/", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), r#"{"retried":true}"#);

    let tokens = store.snapshot().await;
    assert_eq!(tokens.access.as_deref(), Some("A2"));
    assert_eq!(tokens.refresh.as_deref(), Some("R1"));

    expired.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_rotated_refresh_token_is_stored() {
    let mut server = Server::new_async().await;
    let _expired = server
        .mock("GET", "/api/auth/profile/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":"A2","refresh":"R2"}"#)
        .create_async()
        .await;
    let _retried = server
        .mock("GET", "/api/auth/profile/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body(common::profile_json("student").to_string())
        .create_async()
        .await;

    let (client, store) = common::client(&server, Some("A1"), Some("R1"));
    let profile = client.get_profile().await.unwrap();

    assert_eq!(profile.username, "ana");
    let tokens = store.snapshot().await;
    assert_eq!(tokens.access.as_deref(), Some("A2"));
    assert_eq!(tokens.refresh.as_deref(), Some("R2"));
}

#[tokio::test]
async fn test_missing_refresh_token_clears_and_returns_original() {
    let mut server = Server::new_async().await;
    let expired = server
        .mock("GET", "/api/attendance/absences/")
        .with_status(401)
        .with_body("token expired")
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .expect(0)
        .create_async()
        .await;

    let (client, store) = common::client(&server, Some("A1"), None);
    let response = client
        .http()
        .auth_fetch("attendance/absences/", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text().await.unwrap(), "token expired");
    assert_eq!(store.snapshot().await, StoredTokens::default());

    expired.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_rejected_refresh_clears_and_returns_original() {
    let mut server = Server::new_async().await;
    let expired = server
        .mock("GET", "/api/attendance/absences/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .with_body("original")
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(400)
        .with_body(r#"{"detail":"Token is invalid or expired"}"#)
        .expect(1)
        .create_async()
        .await;
    let unauthenticated_retry = server
        .mock("GET", "/api/attendance/absences/")
        .match_header("authorization", Matcher::Missing)
        .expect(0)
        .create_async()
        .await;

    let (client, store) = common::client(&server, Some("A1"), Some("R1"));
    let response = client
        .http()
        .auth_fetch("attendance/absences/", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text().await.unwrap(), "original");
    assert_eq!(store.snapshot().await, StoredTokens::default());
    assert!(!client.auth().is_authenticated().await);

    expired.assert_async().await;
    refresh.assert_async().await;
    unauthenticated_retry.assert_async().await;
}

#[tokio::test]
async fn test_malformed_refresh_body_counts_as_rejection() {
    let mut server = Server::new_async().await;
    let _expired = server
        .mock("GET", "/api/attendance/absences/")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":""}"#)
        .create_async()
        .await;

    let (client, store) = common::client(&server, Some("A1"), Some("R1"));
    let response = client
        .http()
        .auth_fetch("attendance/absences/", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(store.snapshot().await, StoredTokens::default());
}

#[tokio::test]
async fn test_unreachable_refresh_endpoint_counts_as_rejection() {
    let mut server = Server::new_async().await;
    let expired = server
        .mock("GET", "/elsewhere/logs/")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let store = std::sync::Arc::new(MemoryTokenStore::with_tokens(StoredTokens {
        access: Some("A1".into()),
        refresh: Some("R1".into()),
        role: None,
    }));
    // Nothing listens on the discard port, so the refresh call fails in transport.
    let client = Client::with_session(
        Config::with_base_url("http://127.0.0.1:9/api"),
        TokenSession::new(store.clone()),
    )
    .unwrap();

    let url = format!("{}/elsewhere/logs/", server.url());
    let response = client
        .http()
        .auth_fetch(&url, RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(store.snapshot().await, StoredTokens::default());
    expired.assert_async().await;
}

#[tokio::test]
async fn test_at_most_one_retry() {
    let mut server = Server::new_async().await;
    let _expired = server
        .mock("GET", "/api/attendance/my-fichas/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":"A2"}"#)
        .expect(1)
        .create_async()
        .await;
    let still_unauthorized = server
        .mock("GET", "/api/attendance/my-fichas/")
        .match_header("authorization", "Bearer A2")
        .with_status(401)
        .with_body("retried")
        .expect(1)
        .create_async()
        .await;

    let (client, store) = common::client(&server, Some("A1"), Some("R1"));
    let response = client
        .http()
        .auth_fetch("attendance/my-fichas/", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text().await.unwrap(), "retried");
    assert_eq!(store.snapshot().await.access.as_deref(), Some("A2"));

    refresh.assert_async().await;
    still_unauthorized.assert_async().await;
}

#[tokio::test]
async fn test_multipart_body_is_replayed_after_refresh() {
    let mut server = Server::new_async().await;
    let expired = server
        .mock("POST", "/api/excuses/excuses/")
        .match_header("authorization", "Bearer A1")
        .match_body(Matcher::Regex("Medical appointment".to_string()))
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":"A2"}"#)
        .create_async()
        .await;
    let retried = server
        .mock("POST", "/api/excuses/excuses/")
        .match_header("authorization", "Bearer A2")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::Regex("Medical appointment".to_string()))
        .with_status(201)
        .with_body(r#"{"session":3,"reason":"Medical appointment","document":null}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _) = common::client(&server, Some("A1"), Some("R1"));
    let excuse = client
        .submit_excuse(&NewExcuse {
            session: 3,
            reason: "Medical appointment".to_string(),
            document: None,
        })
        .await
        .unwrap();

    assert_eq!(excuse.session, 3);
    assert!(excuse.document.is_none());
    expired.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_single_flight_refreshes_once_for_concurrent_requests() {
    let mut server = Server::new_async().await;
    let expired = server
        .mock("GET", "/api/attendance/sessions/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":"A2"}"#)
        .expect(1)
        .create_async()
        .await;
    let retried = server
        .mock("GET", "/api/attendance/sessions/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let (client, _) = common::client_with_tokens(
        &server,
        Some("A1"),
        Some("R1"),
        RefreshPolicy::SingleFlight,
    );
    let http = client.http();
    let (first, second) = tokio::join!(
        http.auth_fetch("attendance/sessions/", RequestOptions::get()),
        http.auth_fetch("attendance/sessions/", RequestOptions::get()),
    );

    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);
    expired.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_independent_policy_refreshes_per_request() {
    let mut server = Server::new_async().await;
    let _expired = server
        .mock("GET", "/api/attendance/sessions/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":"A2"}"#)
        .expect(2)
        .create_async()
        .await;
    let _retried = server
        .mock("GET", "/api/attendance/sessions/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let (client, _) = common::client(&server, Some("A1"), Some("R1"));
    let http = client.http();
    let (first, second) = tokio::join!(
        http.auth_fetch("attendance/sessions/", RequestOptions::get()),
        http.auth_fetch("attendance/sessions/", RequestOptions::get()),
    );

    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);
    refresh.assert_async().await;
}

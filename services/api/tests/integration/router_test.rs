use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use pokedex_api::router::build_router;
use pokedex_api::state::AppState;
use pokedex_api::token::issue_token;

use crate::helpers::TEST_JWT_SECRET;

/// A server whose database connection would fail on first use — good enough
/// to prove that auth rejection happens before any persistence access.
fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_ttl_secs: 3600,
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_serve_health_checks() {
    let server = test_server();
    server.get("/healthz").await.assert_status(StatusCode::OK);
    server.get("/readyz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_reject_unauthenticated_character_list() {
    let server = test_server();
    let resp = server.get("/characters").await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["type"], "INVALID_TOKEN");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn should_reject_unauthenticated_character_get() {
    let server = test_server();
    let resp = server.get("/characters/1").await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_unauthenticated_character_create() {
    let server = test_server();
    let resp = server
        .post("/characters")
        .json(&serde_json::json!({"name": "Charmander", "strength": 12, "species": 1}))
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_unauthenticated_character_update() {
    let server = test_server();
    let resp = server
        .patch("/characters/1")
        .json(&serde_json::json!({"strength": 20}))
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_unauthenticated_character_delete() {
    let server = test_server();
    let resp = server.delete("/characters/1").await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let server = test_server();
    let (token, _) = issue_token(7, 3600, "some-other-secret").unwrap();

    let resp = server
        .get("/characters")
        .authorization_bearer(&token)
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

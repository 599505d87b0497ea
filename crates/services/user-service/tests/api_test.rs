//! HTTP API tests.
//!
//! These run the real router, service and in-memory repository without
//! requiring a database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

use user_service_lib::http::{create_router, AppState};
use user_service_lib::repository::InMemoryUserStore;
use user_service_lib::service::UserManager;

fn test_app() -> (Router, InMemoryUserStore) {
    let store = InMemoryUserStore::new();
    let service = Arc::new(UserManager::new(Arc::new(store.clone())));
    (create_router(AppState::new(service)), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "email": "alice@example.com",
        "role": "user",
        "password": "p",
        "password_confirm": "p"
    })
}

#[tokio::test]
async fn test_user_lifecycle() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/users", Some(alice())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    let uri = format!("/users/{}", id);

    let (status, user) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["role"], "user");
    assert!(user.get("updated_at").is_none());
    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());

    let (status, _) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({ "email": "alice2@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, user) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["email"], "alice2@example.com");
    assert_eq!(user["role"], "user");
    assert!(user.get("updated_at").is_some());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_password_mismatch_returns_400_and_stores_nothing() {
    let (app, store) = test_app();
    let mut payload = alice();
    payload["password_confirm"] = json!("not-p");

    let (status, body) = send(&app, "POST", "/users", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "passwords are not equal");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let (app, store) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Alice\""))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_missing_field_returns_400() {
    let (app, _) = test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Alice", "email": "alice@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_empty_name_returns_400() {
    let (app, _) = test_app();
    let mut payload = alice();
    payload["name"] = json!("");

    let (status, body) = send(&app, "POST", "/users", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Name cannot be empty");
}

#[tokio::test]
async fn test_get_malformed_id_returns_400() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "GET", "/users/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let (app, _) = test_app();

    let (status, _) = send(&app, "GET", &format!("/users/{}", Uuid::new_v4()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_only_name_keeps_other_fields() {
    let (app, _) = test_app();
    let mut payload = alice();
    payload["role"] = json!("admin");
    let (_, body) = send(&app, "POST", "/users", Some(payload)).await;
    let uri = format!("/users/{}", body["id"].as_str().unwrap());

    let (_, before) = send(&app, "GET", &uri, None).await;
    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "name": "Alicia" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, after) = send(&app, "GET", &uri, None).await;

    assert_eq!(after["name"], "Alicia");
    assert_eq!(after["email"], before["email"]);
    assert_eq!(after["role"], "admin");
    assert_eq!(after["created_at"], before["created_at"]);
    assert!(after.get("updated_at").is_some());
}

#[tokio::test]
async fn test_update_unknown_role_does_not_overwrite() {
    let (app, _) = test_app();
    let (_, body) = send(&app, "POST", "/users", Some(alice())).await;
    let uri = format!("/users/{}", body["id"].as_str().unwrap());

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "role": "unspecified" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, user) = send(&app, "GET", &uri, None).await;
    assert_eq!(user["role"], "user");
}

#[tokio::test]
async fn test_update_unknown_user_returns_404() {
    let (app, _) = test_app();

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/users/{}", Uuid::new_v4()),
        Some(json!({ "name": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (app, _) = test_app();
    let (_, body) = send(&app, "POST", "/users", Some(alice())).await;
    let uri = format!("/users/{}", body["id"].as_str().unwrap());

    let (first, _) = send(&app, "DELETE", &uri, None).await;
    let (second, _) = send(&app, "DELETE", &uri, None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let (app, _) = test_app();

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/users").is_some());
    assert!(doc["paths"].get("/users/{id}").is_some());
}

#[tokio::test]
async fn test_openapi_document_carries_user_response_examples() {
    let (app, _) = test_app();

    let (_, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    let properties = &doc["components"]["schemas"]["UserResponse"]["properties"];

    assert_eq!(properties["name"]["example"], "Alice");
    assert_eq!(properties["email"]["example"], "alice@example.com");
    assert_eq!(properties["role"]["example"], "user");
}

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use serde_json::Value;
use tower::ServiceExt;

use finfusion_server::{api::app_router, build_state, config::Config};

/// Builds a router backed by a fresh database under `tmp`.
pub async fn build_test_router(tmp: &tempfile::TempDir) -> Router {
    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        jwt_secret: BASE64.encode(secret_bytes),
        token_ttl_secs: 3600,
        cors_origin: "*".to_string(),
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

/// Sends a request and returns the status code plus the parsed JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (u16, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str, token: &str) -> (u16, Value) {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> (u16, Value) {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put(app: &Router, uri: &str, token: &str, body: Value) -> (u16, Value) {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: &str) -> (u16, Value) {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Registers a user and returns their bearer token.
pub async fn register_user(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "email": email,
            "name": "Test User",
            "password": "a strong enough password",
        })),
    )
    .await;
    assert_eq!(status, 200, "registration failed: {body}");
    body["accessToken"].as_str().unwrap().to_string()
}

/// Creates an account and returns its id.
pub async fn create_account(app: &Router, token: &str, name: &str, balance: f64) -> String {
    let (status, body) = post(
        app,
        "/api/v1/accounts",
        token,
        serde_json::json!({
            "name": name,
            "accountType": "CHECKING",
            "currency": "USD",
            "balance": balance,
        }),
    )
    .await;
    assert_eq!(status, 200, "account creation failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

/// Creates a category and returns its id.
pub async fn create_category(app: &Router, token: &str, name: &str, category_type: &str) -> String {
    let (status, body) = post(
        app,
        "/api/v1/categories",
        token,
        serde_json::json!({ "name": name, "categoryType": category_type }),
    )
    .await;
    assert_eq!(status, 200, "category creation failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

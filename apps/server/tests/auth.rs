mod common;

use axum::http::Method;
use tempfile::tempdir;

use common::send;

#[tokio::test]
async fn register_login_and_access_protected_route() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;

    // Protected routes reject anonymous requests.
    let (status, _) = send(&app, Method::GET, "/api/v1/accounts", None, None).await;
    assert_eq!(status, 401);

    // Register a user; the response carries a usable token.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "email": "ada@example.com",
            "name": "Ada",
            "password": "correct horse battery",
        })),
    )
    .await;
    assert_eq!(status, 200);
    let token = body["accessToken"].as_str().unwrap().to_string();
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"]["passwordHash"].is_null());

    // Registering the same email again is a client error; email matching
    // is case-insensitive.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "email": "Ada@Example.com",
            "name": "Ada again",
            "password": "another password",
        })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    // A short password never reaches the service.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "email": "short@example.com",
            "name": "Shorty",
            "password": "nope",
        })),
    )
    .await;
    assert_eq!(status, 400);

    // Login with the wrong password fails without leaking which field was bad.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({ "email": "ada@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, 401);
    assert_eq!(body["error"], "Invalid email or password");

    // Login with correct credentials issues a fresh token.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({
            "email": "ADA@example.com",
            "password": "correct horse battery",
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert!(body["accessToken"].as_str().is_some());

    // The registration token grants access to protected routes.
    let (status, body) = common::get(&app, "/api/v1/auth/me", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["email"], "ada@example.com");

    // Profile updates stick.
    let (status, body) = common::put(
        &app,
        "/api/v1/auth/me",
        &token,
        serde_json::json!({ "name": "Ada Lovelace", "baseCurrency": "GBP" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["baseCurrency"], "GBP");

    // Garbage tokens are rejected.
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/accounts",
        Some("not-a-token"),
        None,
    )
    .await;
    assert_eq!(status, 401);
}

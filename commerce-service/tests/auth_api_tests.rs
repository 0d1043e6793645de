mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app.signup("  Alice@Example.com ", "correct horse").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;

    let first = app.signup("alice@example.com", "correct horse").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same address after normalization
    let response = app.signup("ALICE@example.com", "another password").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 409);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.signup("not-an-email", "correct horse").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid email"));
}

#[tokio::test]
async fn test_signup_password_too_short() {
    let app = TestApp::spawn().await;

    let response = app.signup("alice@example.com", "short").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid password"));
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "alice@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.signup("alice@example.com", "correct horse").await;

    let response = app.login("alice@example.com", "correct horse").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["token"].is_string());
    assert!(body["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.signup("alice@example.com", "correct horse").await;

    let wrong_password = app.login("alice@example.com", "wrong horse").await;
    let unknown_email = app.login("bob@example.com", "correct horse").await;
    let malformed_email = app.login("bob", "correct horse").await;

    let mut bodies = Vec::new();
    for response in [wrong_password, unknown_email, malformed_email] {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
    assert_eq!(bodies[0]["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_verify_with_bearer_header() {
    let app = TestApp::spawn().await;
    app.signup("alice@example.com", "correct horse").await;

    let login: serde_json::Value = app
        .login("alice@example.com", "correct horse")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    let token = login["data"]["token"].as_str().unwrap();

    let response = app
        .post("/api/auth/verify")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert_eq!(body["data"]["expires_at"], login["data"]["expires_at"]);
    assert!(body["data"]["issued_at"].is_string());
}

#[tokio::test]
async fn test_verify_with_token_body() {
    let app = TestApp::spawn().await;
    let token = app.token_issued_at("alice@example.com", Utc::now());

    let response = app
        .post("/api/auth/verify")
        .json(&json!({ "token": token }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_verify_expired_token() {
    let app = TestApp::spawn().await;
    // Issuer TTL is one hour
    let token = app.token_issued_at("alice@example.com", Utc::now() - Duration::hours(2));

    let response = app
        .post("/api/auth/verify")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("expired"));
}

#[tokio::test]
async fn test_verify_tampered_token() {
    let app = TestApp::spawn().await;
    let token = app.token_issued_at("alice@example.com", Utc::now());

    let (unsigned, signature) = token.rsplit_once('.').unwrap();
    let first = if signature.starts_with('A') { 'B' } else { 'A' };
    let tampered = format!("{}.{}{}", unsigned, first, &signature[1..]);

    let response = app
        .post("/api/auth/verify")
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_verify_missing_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/verify")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

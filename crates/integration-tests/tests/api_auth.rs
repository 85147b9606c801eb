//! Integration tests for authentication endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p naijamart-server)
//!
//! Run with: cargo test -p naijamart-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use naijamart_integration_tests::{
    TEST_PASSWORD, base_url, client, register_user, unique_username,
};

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_register_login_me_logout_flow() {
    let client = client();
    let username = unique_username();

    // Register: 200, response carries the user without a password field
    let body = register_user(&client, &username).await;
    assert_eq!(body["user"]["username"], username.as_str());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    // Registration logged us in
    let resp = client
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to get current user");
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(me["user"]["username"], username.as_str());

    // Logout flushes the session
    let resp = client
        .post(format!("{}/api/auth/logout", base_url()))
        .send()
        .await
        .expect("Failed to logout");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to get current user");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Login again with the same credentials
    let resp = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({ "username": username, "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to get current user");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_register_responds_200_with_user() {
    let client = client();
    let username = unique_username();

    let resp = client
        .post(format!("{}/api/auth/register", base_url()))
        .json(&json!({
            "username": username,
            "email": format!("{username}@example.test"),
            "password": TEST_PASSWORD,
            "firstName": "Test",
            "lastName": "User",
        }))
        .send()
        .await
        .expect("Failed to send register request");

    // 200, not 201: registration answers like login, with the user payload
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["user"]["username"], username.as_str());
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_duplicate_username_conflict() {
    let first = client();
    let username = unique_username();
    register_user(&first, &username).await;

    // Same username, different email: 409 and no session for the loser
    let second = client();
    let resp = second
        .post(format!("{}/api/auth/register", base_url()))
        .json(&json!({
            "username": username,
            "email": format!("other-{username}@example.test"),
            "password": TEST_PASSWORD,
            "firstName": "Other",
            "lastName": "User",
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = second
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to get current user");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_register_validation_is_itemized() {
    let client = client();

    let resp = client
        .post(format!("{}/api/auth/register", base_url()))
        .json(&json!({
            "username": "x",
            "email": "not-an-email",
            "password": "short",
            "firstName": "",
            "lastName": "",
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "validation failed");
    let details = body["details"].as_array().expect("details should be an array");
    assert_eq!(details.len(), 5);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_login_rejections_are_uniform() {
    let client = client();
    let username = unique_username();
    register_user(&client, &username).await;

    // Wrong password
    let resp = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({ "username": username, "password": "wrong-password-1" }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = resp.json().await.expect("Failed to parse response");

    // Unknown username
    let resp = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({ "username": unique_username(), "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_user: Value = resp.json().await.expect("Failed to parse response");

    // The two rejections are indistinguishable
    assert_eq!(wrong_password["error"], unknown_user["error"]);
}

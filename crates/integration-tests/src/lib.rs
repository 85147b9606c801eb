//! Integration tests for NaijaMart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! naijamart-cli migrate
//!
//! # Start the server
//! cargo run -p naijamart-server
//!
//! # Run integration tests
//! cargo test -p naijamart-integration-tests -- --ignored
//! ```
//!
//! Each test registers its own throwaway account, so tests are independent
//! and re-runnable against the same database.

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Password used for all throwaway test accounts.
pub const TEST_PASSWORD: &str = "integration-pw-1";

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("NAIJAMART_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client that carries the session cookie across requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a username that fits the 3-32 `[A-Za-z0-9_]` rule and won't
/// collide across test runs.
#[must_use]
pub fn unique_username() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("it_{}", &suffix[..12])
}

/// Register a fresh account on the given client and return the response
/// body. The client's cookie jar holds the session afterwards.
///
/// # Panics
///
/// Panics if the request fails or registration is rejected.
pub async fn register_user(client: &Client, username: &str) -> Value {
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

    assert_eq!(resp.status(), reqwest::StatusCode::OK, "registration failed");
    resp.json().await.expect("Failed to parse register response")
}

/// Create a product through the API (requires a logged-in client) and
/// return its JSON representation.
///
/// # Panics
///
/// Panics if the request fails or the product is rejected.
pub async fn create_product(client: &Client, name: &str, category: &str, price: &str) -> Value {
    let resp = client
        .post(format!("{}/api/products", base_url()))
        .json(&json!({
            "name": name,
            "description": "integration test product",
            "price": price,
            "category": category,
            "image": "/api/placeholder/400/300",
            "stock": 10,
        }))
        .send()
        .await
        .expect("Failed to send create product request");

    assert_eq!(resp.status(), reqwest::StatusCode::CREATED, "product create failed");
    resp.json().await.expect("Failed to parse product response")
}

//! Integration tests for favorites endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p naijamart-server)
//!
//! Run with: cargo test -p naijamart-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use naijamart_integration_tests::{base_url, client, create_product, register_user, unique_username};

async fn favorites(client: &reqwest::Client) -> Vec<Value> {
    let resp = client
        .get(format!("{}/api/favorites", base_url()))
        .send()
        .await
        .expect("Failed to get favorites");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse favorites")
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_favorite_add_is_idempotent() {
    let client = client();
    register_user(&client, &unique_username()).await;

    let name = format!("Fav Pepper {}", Uuid::new_v4().simple());
    let product = create_product(&client, &name, "spices", "3500").await;
    let product_id = product["id"].as_str().expect("product should have an id");

    let resp = client
        .post(format!("{}/api/favorites", base_url()))
        .json(&json!({ "productId": product_id }))
        .send()
        .await
        .expect("Failed to add favorite");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Value = resp.json().await.expect("Failed to parse mark");

    // Favoriting again returns the same mark, no duplicate
    let resp = client
        .post(format!("{}/api/favorites", base_url()))
        .json(&json!({ "productId": product_id }))
        .send()
        .await
        .expect("Failed to add favorite");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Value = resp.json().await.expect("Failed to parse mark");
    assert_eq!(first["id"], second["id"]);

    let marks = favorites(&client).await;
    let matching: Vec<&Value> = marks
        .iter()
        .filter(|m| m["productId"] == product_id)
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["product"]["name"], name.as_str());
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_favorite_remove_by_product() {
    let client = client();
    register_user(&client, &unique_username()).await;

    let name = format!("Fav Goat Meat {}", Uuid::new_v4().simple());
    let product = create_product(&client, &name, "protein", "25000").await;
    let product_id = product["id"].as_str().expect("product should have an id");

    let resp = client
        .post(format!("{}/api/favorites", base_url()))
        .json(&json!({ "productId": product_id }))
        .send()
        .await
        .expect("Failed to add favorite");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .delete(format!("{}/api/favorites/{product_id}", base_url()))
        .send()
        .await
        .expect("Failed to remove favorite");
    assert_eq!(resp.status(), StatusCode::OK);

    // Removing an absent mark is a 404
    let resp = client
        .delete(format!("{}/api/favorites/{product_id}", base_url()))
        .send()
        .await
        .expect("Failed to send remove");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let marks = favorites(&client).await;
    assert!(marks.iter().all(|m| m["productId"] != product_id));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_favorites_require_session() {
    let anonymous = client();

    let resp = anonymous
        .get(format!("{}/api/favorites", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = anonymous
        .post(format!("{}/api/favorites", base_url()))
        .json(&json!({ "productId": Uuid::new_v4() }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

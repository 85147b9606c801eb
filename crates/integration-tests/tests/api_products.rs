//! Integration tests for catalog endpoints.
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

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_product_crud_roundtrip() {
    let client = client();
    register_user(&client, &unique_username()).await;

    let name = format!("Test Yam {}", Uuid::new_v4().simple());
    let product = create_product(&client, &name, "tubers", "8500").await;
    let id = product["id"].as_str().expect("product should have an id");
    assert_eq!(product["price"], "8500.00");
    assert_eq!(product["stock"], 10);

    // Read it back (public, fresh client)
    let resp = reqwest::get(format!("{}/api/products/{id}", base_url()))
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(fetched["name"], name.as_str());

    // Partial update: only price and onSale; the rest is untouched
    let resp = client
        .put(format!("{}/api/products/{id}", base_url()))
        .json(&json!({ "price": "9000", "onSale": true }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(updated["price"], "9000.00");
    assert_eq!(updated["onSale"], true);
    assert_eq!(updated["name"], name.as_str());
    assert_eq!(updated["stock"], 10);

    // Delete
    let resp = client
        .delete(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = reqwest::get(format!("{}/api/products/{id}", base_url()))
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_category_filter_is_exact() {
    let client = client();
    register_user(&client, &unique_username()).await;

    let marker = Uuid::new_v4().simple().to_string();
    let category = format!("tubers-{marker}");
    let in_category = format!("In Category {marker}");
    let other = format!("Other {marker}");
    create_product(&client, &in_category, &category, "5000").await;
    create_product(&client, &other, "grains", "3000").await;

    let resp = reqwest::get(format!("{}/api/products?category={category}", base_url()))
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse products");

    assert!(products.iter().all(|p| p["category"] == category.as_str()));
    assert!(products.iter().any(|p| p["name"] == in_category.as_str()));

    // Category match is case-sensitive; the uppercased tag matches nothing
    let resp = reqwest::get(format!(
        "{}/api/products?category={}",
        base_url(),
        category.to_uppercase()
    ))
    .await
    .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse products");
    assert!(products.is_empty());
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_product_writes_require_session() {
    let anonymous = client();

    let resp = anonymous
        .post(format!("{}/api/products", base_url()))
        .json(&json!({
            "name": "No Session",
            "description": "should be rejected",
            "price": "1000",
            "category": "grains",
            "image": "/api/placeholder/400/300",
        }))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_product_create_validation() {
    let client = client();
    register_user(&client, &unique_username()).await;

    let resp = client
        .post(format!("{}/api/products", base_url()))
        .json(&json!({
            "name": "",
            "description": "x",
            "price": "-5",
            "category": "grains",
            "image": "/api/placeholder/400/300",
            "rating": "6",
            "salePercentage": 150,
        }))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse response");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .expect("details should be an array")
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"rating"));
    assert!(fields.contains(&"salePercentage"));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_delete_blocked_while_in_cart() {
    let client = client();
    register_user(&client, &unique_username()).await;

    let name = format!("Referenced {}", Uuid::new_v4().simple());
    let product = create_product(&client, &name, "protein", "12000").await;
    let id = product["id"].as_str().expect("product should have an id");

    let resp = client
        .post(format!("{}/api/cart", base_url()))
        .json(&json!({ "productId": id, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Deletion is blocked while a cart line references the product
    let resp = client
        .delete(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Clearing the cart unblocks it
    let resp = client
        .delete(format!("{}/api/cart", base_url()))
        .send()
        .await
        .expect("Failed to clear cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);
}

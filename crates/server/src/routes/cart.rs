//! Cart route handlers. Every endpoint is scoped to the session user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use naijamart_core::{CartLineId, ProductId, Quantity};

use crate::db::cart::CartRepository;
use crate::db::products::ProductRepository;
use crate::error::{AppError, FieldError};
use crate::middleware::RequireAuth;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(add).delete(clear))
        .route("/{id}", axum::routing::put(update_quantity).delete(remove))
}

// =============================================================================
// Request Types
// =============================================================================

/// Body for adding a product to the cart.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i32>,
}

/// Body for replacing a line's quantity.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

fn parse_quantity(raw: i32) -> Result<Quantity, AppError> {
    Quantity::parse(raw).map_err(|e| {
        AppError::Validation(vec![FieldError::new("quantity", e.to_string())])
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/cart`
async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    let lines = CartRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(lines).into_response())
}

/// `POST /api/cart`
///
/// Adding a product the user already has accumulates into the existing
/// line; the repository does this as one atomic upsert, so two concurrent
/// adds both land on a single line.
async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<AddToCartRequest>,
) -> Result<Response, AppError> {
    let quantity = parse_quantity(body.quantity.unwrap_or(1))?;

    // Existence check up front so an unknown product surfaces as a field
    // error instead of an FK violation.
    if !ProductRepository::new(state.pool())
        .exists(body.product_id)
        .await?
    {
        return Err(AppError::Validation(vec![FieldError::new(
            "productId",
            "product does not exist",
        )]));
    }

    let line = CartRepository::new(state.pool())
        .upsert_line(user.id, body.product_id, quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(line)).into_response())
}

/// `PUT /api/cart/{id}`
///
/// Replaces the quantity outright; concurrent updates are last-write-wins.
async fn update_quantity(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<CartLineId>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<Response, AppError> {
    let quantity = parse_quantity(body.quantity)?;

    let line = CartRepository::new(state.pool())
        .update_quantity(user.id, id, quantity)
        .await?;

    Ok(Json(line).into_response())
}

/// `DELETE /api/cart/{id}`
async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<CartLineId>,
) -> Result<Response, AppError> {
    CartRepository::new(state.pool())
        .remove_line(user.id, id)
        .await?;

    Ok(Json(json!({ "message": "item removed from cart" })).into_response())
}

/// `DELETE /api/cart`
///
/// Idempotent: clearing an empty cart is still a 200.
async fn clear(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    CartRepository::new(state.pool()).clear(user.id).await?;

    Ok(Json(json!({ "message": "cart cleared" })).into_response())
}

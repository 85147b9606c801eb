//! Favorites route handlers. Every endpoint is scoped to the session user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use naijamart_core::ProductId;

use crate::db::favorites::FavoriteRepository;
use crate::db::products::ProductRepository;
use crate::error::{AppError, FieldError};
use crate::middleware::RequireAuth;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(add))
        .route("/{product_id}", axum::routing::delete(remove))
}

/// Body for marking a product as a favorite.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub product_id: ProductId,
}

/// `GET /api/favorites`
async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    let favorites = FavoriteRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(favorites).into_response())
}

/// `POST /api/favorites`
///
/// Idempotent: marking an already-favorited product returns the existing
/// mark rather than erroring or duplicating.
async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<Response, AppError> {
    if !ProductRepository::new(state.pool())
        .exists(body.product_id)
        .await?
    {
        return Err(AppError::Validation(vec![FieldError::new(
            "productId",
            "product does not exist",
        )]));
    }

    let mark = FavoriteRepository::new(state.pool())
        .add(user.id, body.product_id)
        .await?;

    Ok((StatusCode::CREATED, Json(mark)).into_response())
}

/// `DELETE /api/favorites/{product_id}`
async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Response, AppError> {
    FavoriteRepository::new(state.pool())
        .remove(user.id, product_id)
        .await?;

    Ok(Json(json!({ "message": "favorite removed" })).into_response())
}

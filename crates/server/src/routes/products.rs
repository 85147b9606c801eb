//! Catalog route handlers.
//!
//! Reads are public; create/update/delete require a session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use naijamart_core::{Price, ProductId};

use crate::db::products::ProductRepository;
use crate::error::{AppError, FieldError};
use crate::middleware::RequireAuth;
use crate::models::product::{NewProduct, ProductPatch};
use crate::state::AppState;

const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const MAX_SALE_PERCENTAGE: i32 = 100;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}

// =============================================================================
// Request Types
// =============================================================================

/// Query parameters for product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact, case-sensitive category tag.
    pub category: Option<String>,
}

/// Product creation request body.
///
/// Decimal fields arrive as strings, matching how the API serializes them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub stock: i32,
    pub rating: Option<String>,
    #[serde(default)]
    pub review_count: i32,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub sale_percentage: i32,
}

impl CreateProductRequest {
    fn validate(self) -> Result<NewProduct, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "must not be empty"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "must not be empty"));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "must not be empty"));
        }
        if self.image.trim().is_empty() {
            errors.push(FieldError::new("image", "must not be empty"));
        }

        let price = parse_price(&self.price, "price", &mut errors);
        let original_price = self
            .original_price
            .as_deref()
            .and_then(|raw| parse_price(raw, "originalPrice", &mut errors));
        let rating = self.rating.as_deref().map_or(Some(Decimal::ZERO), |raw| {
            parse_rating(raw, &mut errors)
        });

        if self.stock < 0 {
            errors.push(FieldError::new("stock", "must not be negative"));
        }
        if self.review_count < 0 {
            errors.push(FieldError::new("reviewCount", "must not be negative"));
        }
        if !(0..=MAX_SALE_PERCENTAGE).contains(&self.sale_percentage) {
            errors.push(FieldError::new(
                "salePercentage",
                format!("must be between 0 and {MAX_SALE_PERCENTAGE}"),
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(price), Some(rating)) = (price, rating) else {
            return Err(errors);
        };

        Ok(NewProduct {
            name: self.name,
            description: self.description,
            price,
            original_price,
            category: self.category,
            image: self.image,
            stock: self.stock,
            rating,
            review_count: self.review_count,
            on_sale: self.on_sale,
            sale_percentage: self.sale_percentage,
        })
    }
}

/// Product update request body; only supplied fields are merged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub original_price: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
    pub rating: Option<String>,
    pub review_count: Option<i32>,
    pub on_sale: Option<bool>,
    pub sale_percentage: Option<i32>,
}

impl UpdateProductRequest {
    fn validate(self) -> Result<ProductPatch, Vec<FieldError>> {
        let mut errors = Vec::new();

        for (value, field) in [
            (&self.name, "name"),
            (&self.description, "description"),
            (&self.category, "category"),
            (&self.image, "image"),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(FieldError::new(field, "must not be empty"));
            }
        }

        let price = self
            .price
            .as_deref()
            .and_then(|raw| parse_price(raw, "price", &mut errors));
        let original_price = self
            .original_price
            .as_deref()
            .and_then(|raw| parse_price(raw, "originalPrice", &mut errors));
        let rating = self
            .rating
            .as_deref()
            .and_then(|raw| parse_rating(raw, &mut errors));

        if self.stock.is_some_and(|s| s < 0) {
            errors.push(FieldError::new("stock", "must not be negative"));
        }
        if self.review_count.is_some_and(|c| c < 0) {
            errors.push(FieldError::new("reviewCount", "must not be negative"));
        }
        if self
            .sale_percentage
            .is_some_and(|p| !(0..=MAX_SALE_PERCENTAGE).contains(&p))
        {
            errors.push(FieldError::new(
                "salePercentage",
                format!("must be between 0 and {MAX_SALE_PERCENTAGE}"),
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductPatch {
            name: self.name,
            description: self.description,
            price,
            original_price,
            category: self.category,
            image: self.image,
            stock: self.stock,
            rating,
            review_count: self.review_count,
            on_sale: self.on_sale,
            sale_percentage: self.sale_percentage,
        })
    }
}

fn parse_price(raw: &str, field: &'static str, errors: &mut Vec<FieldError>) -> Option<Price> {
    match raw.parse::<Price>() {
        Ok(price) => Some(price),
        Err(e) => {
            errors.push(FieldError::new(field, e.to_string()));
            None
        }
    }
}

fn parse_rating(raw: &str, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    match raw.parse::<Decimal>() {
        Ok(rating) if rating >= Decimal::ZERO && rating <= MAX_RATING => Some(rating),
        Ok(_) => {
            errors.push(FieldError::new("rating", "must be between 0 and 5"));
            None
        }
        Err(_) => {
            errors.push(FieldError::new("rating", "must be a decimal number"));
            None
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/products[?category=]`
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let products = ProductRepository::new(state.pool());
    let products = match query.category {
        Some(category) => products.list_by_category(&category).await?,
        None => products.list().await?,
    };

    Ok(Json(products).into_response())
}

/// `GET /api/products/{id}`
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Response, AppError> {
    let product = ProductRepository::new(state.pool()).get(id).await?;
    Ok(Json(product).into_response())
}

/// `POST /api/products`
async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(body): Json<CreateProductRequest>,
) -> Result<Response, AppError> {
    let new_product = body.validate().map_err(AppError::Validation)?;

    let product = ProductRepository::new(state.pool())
        .create(&new_product)
        .await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)).into_response())
}

/// `PUT /api/products/{id}`
async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<ProductId>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Response, AppError> {
    let patch = body.validate().map_err(AppError::Validation)?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("no fields to update".to_string()));
    }

    let product = ProductRepository::new(state.pool()).update(id, &patch).await?;
    Ok(Json(product).into_response())
}

/// `DELETE /api/products/{id}`
///
/// Blocked with 409 while any cart line or favorite mark references the
/// product.
async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<ProductId>,
) -> Result<Response, AppError> {
    ProductRepository::new(state.pool()).delete(id).await?;
    tracing::info!(product_id = %id, "product deleted");

    Ok(Json(json!({ "message": "product deleted" })).into_response())
}

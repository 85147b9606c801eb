//! Cart ledger domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use naijamart_core::{CartLineId, ProductId, Quantity, UserId};

use super::product::Product;

/// One line of a user's cart: a product and how many of it.
///
/// At most one line exists per (user, product) pair; adding the same
/// product again accumulates into the existing line.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartLineId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
}

/// A cart line joined with its product, as returned by `GET /api/cart`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineWithProduct {
    pub id: CartLineId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
    pub product: Product,
}

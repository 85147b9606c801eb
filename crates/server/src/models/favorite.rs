//! Favorites ledger domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use naijamart_core::{FavoriteId, ProductId, UserId};

use super::product::Product;

/// An existence-only mark: this user favorited this product.
///
/// At most one mark exists per (user, product) pair; favoriting again is a
/// no-op that returns the existing mark.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMark {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

/// A favorite mark joined with its product, as returned by `GET /api/favorites`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteWithProduct {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub product: Product,
}

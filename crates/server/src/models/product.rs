//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use naijamart_core::{Price, ProductId};

/// A catalog entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID, generated server-side.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current price in Naira.
    pub price: Price,
    /// Pre-sale price, shown struck through when the product is on sale.
    pub original_price: Option<Price>,
    /// Free-text category tag; list filtering matches it exactly.
    pub category: String,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Units on hand. Informational only; the cart ledger does not check it.
    pub stock: i32,
    /// Average review rating, 0-5.
    pub rating: Decimal,
    pub review_count: i32,
    pub on_sale: bool,
    /// Discount percentage, 0-100.
    pub sale_percentage: i32,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub original_price: Option<Price>,
    pub category: String,
    pub image: String,
    pub stock: i32,
    pub rating: Decimal,
    pub review_count: i32,
    pub on_sale: bool,
    pub sale_percentage: i32,
}

/// Partial update for a product: only `Some` fields are merged.
///
/// A nullable column (`original_price`) cannot be set back to NULL through
/// a patch; that would need a dedicated clear operation.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub original_price: Option<Price>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
    pub rating: Option<Decimal>,
    pub review_count: Option<i32>,
    pub on_sale: Option<bool>,
    pub sale_percentage: Option<i32>,
}

impl ProductPatch {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.category.is_none()
            && self.image.is_none()
            && self.stock.is_none()
            && self.rating.is_none()
            && self.review_count.is_none()
            && self.on_sale.is_none()
            && self.sale_percentage.is_none()
    }
}

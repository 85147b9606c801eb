//! Cart ledger repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use naijamart_core::{CartLineId, Price, ProductId, Quantity, UserId};

use super::RepositoryError;
use crate::models::cart::{CartLine, CartLineWithProduct};
use crate::models::product::Product;

const LINE_COLUMNS: &str = "id, user_id, product_id, quantity, created_at";

/// Flat join row for a cart line plus its product. Product columns are
/// aliased with a `product_` prefix to avoid clashing with line columns.
#[derive(sqlx::FromRow)]
struct LineProductRow {
    id: CartLineId,
    user_id: UserId,
    product_id: ProductId,
    quantity: Quantity,
    created_at: DateTime<Utc>,
    product_name: String,
    product_description: String,
    product_price: Price,
    product_original_price: Option<Price>,
    product_category: String,
    product_image: String,
    product_stock: i32,
    product_rating: Decimal,
    product_review_count: i32,
    product_on_sale: bool,
    product_sale_percentage: i32,
    product_created_at: DateTime<Utc>,
}

impl From<LineProductRow> for CartLineWithProduct {
    fn from(row: LineProductRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            quantity: row.quantity,
            created_at: row.created_at,
            product: Product {
                id: row.product_id,
                name: row.product_name,
                description: row.product_description,
                price: row.product_price,
                original_price: row.product_original_price,
                category: row.product_category,
                image: row.product_image,
                stock: row.product_stock,
                rating: row.product_rating,
                review_count: row.product_review_count,
                on_sale: row.product_on_sale,
                sale_percentage: row.product_sale_percentage,
                created_at: row.product_created_at,
            },
        }
    }
}

const LINE_PRODUCT_QUERY: &str = "SELECT \
     c.id, c.user_id, c.product_id, c.quantity, c.created_at, \
     p.name AS product_name, p.description AS product_description, \
     p.price AS product_price, p.original_price AS product_original_price, \
     p.category AS product_category, p.image AS product_image, \
     p.stock AS product_stock, p.rating AS product_rating, \
     p.review_count AS product_review_count, p.on_sale AS product_on_sale, \
     p.sale_percentage AS product_sale_percentage, \
     p.created_at AS product_created_at \
     FROM cart_items c \
     JOIN products p ON p.id = c.product_id \
     WHERE c.user_id = $1 \
     ORDER BY c.created_at, c.id";

/// Repository for the cart ledger.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's cart lines with their products, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<CartLineWithProduct>, RepositoryError> {
        let rows = sqlx::query_as::<_, LineProductRow>(LINE_PRODUCT_QUERY)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Add a product to a user's cart, accumulating quantity into an
    /// existing line if one is already there.
    ///
    /// A single upsert so that two racing adds for the same product both
    /// land on one line instead of violating the uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// a foreign key violation when the product does not exist; callers
    /// check product existence first for a proper 404).
    pub async fn upsert_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<CartLine, RepositoryError> {
        let line = sqlx::query_as::<_, CartLine>(&format!(
            "INSERT INTO cart_items (user_id, product_id, quantity) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT cart_items_user_product_key \
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity \
             RETURNING {LINE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(line)
    }

    /// Replace the quantity on one of the user's cart lines.
    ///
    /// The line must belong to `user_id`; another user's line is as
    /// invisible as a missing one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line does not exist or
    /// belongs to someone else.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        line_id: CartLineId,
        quantity: Quantity,
    ) -> Result<CartLine, RepositoryError> {
        let line = sqlx::query_as::<_, CartLine>(&format!(
            "UPDATE cart_items SET quantity = $3 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {LINE_COLUMNS}"
        ))
        .bind(line_id)
        .bind(user_id)
        .bind(quantity)
        .fetch_optional(self.pool)
        .await?;

        line.ok_or(RepositoryError::NotFound)
    }

    /// Remove one of the user's cart lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line does not exist or
    /// belongs to someone else.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove_line(
        &self,
        user_id: UserId,
        line_id: CartLineId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
            .bind(line_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Empty a user's cart. Succeeds even when the cart is already empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}

//! Favorites ledger repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use naijamart_core::{FavoriteId, Price, ProductId, UserId};

use super::RepositoryError;
use crate::models::favorite::{FavoriteMark, FavoriteWithProduct};
use crate::models::product::Product;

/// Flat join row for a favorite mark plus its product.
#[derive(sqlx::FromRow)]
struct MarkProductRow {
    id: FavoriteId,
    user_id: UserId,
    product_id: ProductId,
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

impl From<MarkProductRow> for FavoriteWithProduct {
    fn from(row: MarkProductRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
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

const MARK_PRODUCT_QUERY: &str = "SELECT \
     f.id, f.user_id, f.product_id, f.created_at, \
     p.name AS product_name, p.description AS product_description, \
     p.price AS product_price, p.original_price AS product_original_price, \
     p.category AS product_category, p.image AS product_image, \
     p.stock AS product_stock, p.rating AS product_rating, \
     p.review_count AS product_review_count, p.on_sale AS product_on_sale, \
     p.sale_percentage AS product_sale_percentage, \
     p.created_at AS product_created_at \
     FROM favorites f \
     JOIN products p ON p.id = f.product_id \
     WHERE f.user_id = $1 \
     ORDER BY f.created_at, f.id";

/// Repository for the favorites ledger.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorites repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's favorites with their products, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FavoriteWithProduct>, RepositoryError> {
        let rows = sqlx::query_as::<_, MarkProductRow>(MARK_PRODUCT_QUERY)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Mark a product as a favorite, returning the mark.
    ///
    /// Idempotent: marking an already-favorited product returns the
    /// existing mark. The no-op DO UPDATE makes the RETURNING clause
    /// yield the row on both paths in a single statement, so racing
    /// marks cannot error against the uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<FavoriteMark, RepositoryError> {
        let mark = sqlx::query_as::<_, FavoriteMark>(
            "INSERT INTO favorites (user_id, product_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT favorites_user_product_key \
             DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING id, user_id, product_id, created_at",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(self.pool)
        .await?;

        Ok(mark)
    }

    /// Remove a favorite mark by its product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user has no mark for
    /// this product.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

//! Database access for the storefront API.
//!
//! # Tables
//!
//! - `users` - Account directory (username/email unique, Argon2id hash)
//! - `products` - Catalog
//! - `cart_items` - Cart ledger, UNIQUE (user_id, product_id)
//! - `favorites` - Favorites ledger, UNIQUE (user_id, product_id)
//! - `tower_sessions.session` - Session storage (owned by
//!   tower-sessions-sqlx-store, created by its own migration)
//!
//! Repositories are thin structs borrowing the pool; they are constructed
//! per request and hold no state of their own. Concurrent mutation safety
//! is delegated to the store's row-level constraints: both ledgers rely on
//! their (user_id, product_id) uniqueness constraint so that racing
//! inserts collapse into a single row.
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p naijamart-cli -- migrate
//! ```

pub mod cart;
pub mod favorites;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors produced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username, referenced product).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

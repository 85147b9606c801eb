//! Route handlers for the storefront API.
//!
//! All endpoints live under `/api`. Auth and catalog reads are public;
//! catalog writes and both ledgers require a session.

pub mod auth;
pub mod cart;
pub mod favorites;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the full API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::routes())
        .nest("/api/products", products::routes())
        .nest("/api/cart", cart::routes())
        .nest("/api/favorites", favorites::routes())
}

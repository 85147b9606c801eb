//! Database migration command.
//!
//! Runs the server's SQL migrations and then lets the session store create
//! its own table. The server never migrates on startup; this command is the
//! only migration path.
//!
//! # Usage
//!
//! ```bash
//! naijamart-cli migrate
//! ```

use tower_sessions_sqlx_store::PostgresStore;

use super::{CommandError, connect};

/// Run all database migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    // The session table is owned by tower-sessions-sqlx-store and created
    // by its own migration, kept separate from ours.
    tracing::info!("Running session store migration...");
    PostgresStore::new(pool.clone()).migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use naijamart_core::{Email, UserId, Username};

/// A registered account.
///
/// The password hash is deliberately not part of this type; it only exists
/// inside the user repository and the auth service.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login handle, unique across the account directory.
    pub username: Username,
    /// Email address, unique across the account directory.
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new account row.
///
/// `password_hash` must already be an Argon2id PHC string; the repository
/// never sees a plaintext password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

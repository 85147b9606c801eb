//! Session-stored types.
//!
//! Only a minimal identity is kept in the session; everything else is
//! loaded from the store per request so that a deleted user fails closed.

use serde::{Deserialize, Serialize};

use naijamart_core::{UserId, Username};

/// Session-stored user identity for the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// Login handle, kept for log context.
    pub username: Username,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

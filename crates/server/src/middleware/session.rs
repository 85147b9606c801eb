//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The cookie is
//! signed with a key derived from the session secret and is HttpOnly +
//! SameSite=Lax; Secure is derived from the public base URL.

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use tower_sessions::cookie::Key;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::ServerConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "naijamart_session";

/// Session lifetime in seconds (24 hours).
///
/// This is the layer default; login and registration additionally pin the
/// session to an absolute expiry 24 hours from issuance.
pub const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store and a signed cookie.
///
/// The session table lives in the default `tower_sessions` schema and is
/// created by `naijamart-cli migrate`.
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &ServerConfig,
) -> SessionManagerLayer<PostgresStore, SignedCookie> {
    let store = PostgresStore::new(pool.clone());

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(signing_key(&config.session_secret))
}

/// Derive the cookie signing key from the configured session secret.
///
/// `ServerConfig` validation guarantees the secret is at least 32 bytes,
/// which is the minimum `Key::derive_from` accepts.
fn signing_key(secret: &SecretString) -> Key {
    Key::derive_from(secret.expose_secret().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key_accepts_minimum_length_secret() {
        let secret = SecretString::from("a".repeat(32));
        let key = signing_key(&secret);
        assert!(!key.signing().is_empty());
    }

    #[test]
    fn test_signing_key_is_deterministic() {
        let secret = SecretString::from("k9#mQ2$xT7!wL4&nR0@pZ5^bV8*cF3yH");
        let first = signing_key(&secret);
        let second = signing_key(&secret);
        assert_eq!(first.master(), second.master());

        let other = signing_key(&SecretString::from("H3yF8*cV5^bZ0@pR4&nL7!wT2$xQ9#mk"));
        assert_ne!(first.master(), other.master());
    }
}

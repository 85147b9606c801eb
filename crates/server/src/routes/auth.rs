//! Authentication route handlers.
//!
//! Registration, login, logout, and current-user lookup. Sessions are
//! cookie-backed; registration and login both start a session pinned to an
//! absolute 24-hour expiry.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::{Expiry, Session};
use tower_sessions::cookie::time::{Duration, OffsetDateTime};

use naijamart_core::{Email, Username};

use crate::error::{AppError, FieldError, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::models::user::User;
use crate::services::auth::{AuthError, AuthService, Registration};
use crate::state::AppState;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Session lifetime from issuance.
const SESSION_LIFETIME_HOURS: i64 = 24;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

// =============================================================================
// Request Types
// =============================================================================

/// Registration request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    /// Validate all fields, collecting every violation before giving up.
    fn validate(self) -> Result<Registration, Vec<FieldError>> {
        let mut errors = Vec::new();

        let username = match Username::parse(&self.username) {
            Ok(username) => Some(username),
            Err(e) => {
                errors.push(FieldError::new("username", e.to_string()));
                None
            }
        };

        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(FieldError::new("email", e.to_string()));
                None
            }
        };

        if self.password.len() < MIN_PASSWORD_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }

        let first_name = self.first_name.trim().to_string();
        if first_name.is_empty() {
            errors.push(FieldError::new("firstName", "must not be empty"));
        }

        let last_name = self.last_name.trim().to_string();
        if last_name.is_empty() {
            errors.push(FieldError::new("lastName", "must not be empty"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Both are Some when no errors were recorded
        let (Some(username), Some(email)) = (username, email) else {
            return Err(errors);
        };

        Ok(Registration {
            username,
            email,
            password: self.password,
            first_name,
            last_name,
        })
    }
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/auth/register`
///
/// Creates an account and logs the new user in.
async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let registration = body.validate().map_err(AppError::Validation)?;

    let auth = AuthService::new(state.pool());
    let user = auth.register(registration).await?;

    start_session(&session, &user).await?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(json!({ "message": "registration successful", "user": user })).into_response())
}

/// `POST /api/auth/login`
///
/// A malformed username cannot belong to any account, so it gets the same
/// uniform rejection as a wrong password.
async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let username =
        Username::parse(&body.username).map_err(|_| AuthError::InvalidCredentials)?;

    let auth = AuthService::new(state.pool());
    let user = auth.login(&username, &body.password).await?;

    start_session(&session, &user).await?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(json!({ "message": "login successful", "user": user })).into_response())
}

/// `POST /api/auth/logout`
async fn logout(session: Session) -> Result<Response, AppError> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("failed to flush session: {e}")))?;
    clear_sentry_user();

    Ok(Json(json!({ "message": "logout successful" })).into_response())
}

/// `GET /api/auth/me`
///
/// Resolves the session against the store. A session whose user row is
/// gone is invalid; it is flushed and the request fails closed with 401.
async fn me(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(current): RequireAuth,
) -> Result<Response, AppError> {
    let auth = AuthService::new(state.pool());
    let user = match auth.get_user(current.id).await {
        Ok(user) => user,
        Err(AuthError::UserNotFound) => {
            session
                .flush()
                .await
                .map_err(|e| AppError::Internal(format!("failed to flush session: {e}")))?;
            return Err(AppError::Unauthorized("session no longer valid".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(json!({ "user": user })).into_response())
}

// =============================================================================
// Helpers
// =============================================================================

/// Write the user identity into the session and pin its expiry to 24 hours
/// from now. The session ID is cycled so a pre-login cookie cannot be fixed
/// onto the authenticated session.
async fn start_session(session: &Session, user: &User) -> Result<(), AppError> {
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("failed to cycle session: {e}")))?;

    let current = CurrentUser {
        id: user.id,
        username: user.username.clone(),
    };
    set_current_user(session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to set session: {e}")))?;

    session.set_expiry(Some(Expiry::AtDateTime(
        OffsetDateTime::now_utc() + Duration::hours(SESSION_LIFETIME_HOURS),
    )));

    set_sentry_user(user.id, user.username.as_str());

    Ok(())
}

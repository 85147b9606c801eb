//! HTTP middleware: sessions, authentication, request IDs.

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{RequireAuth, clear_current_user, set_current_user};
pub use request_id::propagate_request_id;
pub use session::create_session_layer;

//! Request correlation.
//!
//! Every request gets an `x-request-id`: inherited from an upstream proxy
//! when present, minted as a UUID v4 otherwise. The ID is recorded on the
//! request span, tagged on the Sentry scope, stored in request extensions,
//! and echoed back on the response.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Span;
use uuid::Uuid;

pub static REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation ID for a single request.
///
/// Handlers that need the ID (e.g., to include it in an outbound call) can
/// take it from request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    /// Inherit the upstream `x-request-id` when it is usable, mint a fresh
    /// UUID v4 otherwise.
    fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(&REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map_or_else(
                || Self(Uuid::new_v4().to_string()),
                |inherited| Self(inherited.to_owned()),
            )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware that attaches a [`RequestId`] to the request and its traces.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId::from_headers(request.headers());

    Span::current().record("request_id", id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", id.as_str()));

    // An inherited ID may not be a valid header value; in that case the
    // response carries no echo but the span/Sentry records still do.
    let echo = HeaderValue::from_str(id.as_str()).ok();
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;
    if let Some(value) = echo {
        response.headers_mut().insert(&REQUEST_ID, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherits_upstream_header() {
        let mut headers = HeaderMap::new();
        headers.insert(&REQUEST_ID, HeaderValue::from_static("lb-7f3a"));

        let id = RequestId::from_headers(&headers);
        assert_eq!(id.as_str(), "lb-7f3a");
    }

    #[test]
    fn test_mints_uuid_when_absent() {
        let id = RequestId::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_empty_header_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(&REQUEST_ID, HeaderValue::from_static(""));

        let id = RequestId::from_headers(&headers);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }
}

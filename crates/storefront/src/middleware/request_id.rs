//! Request correlation IDs.
//!
//! Reuses an upstream `x-request-id` when present, otherwise generates a v4
//! UUID. The ID is tagged on the Sentry scope and echoed in the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_UPSTREAM_ID_LEN: usize = 128;

fn request_id(request: &Request) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= MAX_UPSTREAM_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that ensures every request has a request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let id = request_id(&request);

    tracing::debug!(request_id = %id, method = %request.method(), path = request.uri().path());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &id);
    });

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn test_upstream_id_is_kept() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "cf-1234")
            .body(Body::empty())
            .expect("request");
        assert_eq!(request_id(&request), "cf-1234");
    }

    #[test]
    fn test_missing_or_oversized_id_is_replaced() {
        let request = Request::builder().body(Body::empty()).expect("request");
        assert!(Uuid::parse_str(&request_id(&request)).is_ok());

        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "x".repeat(MAX_UPSTREAM_ID_LEN + 1))
            .body(Body::empty())
            .expect("request");
        assert!(Uuid::parse_str(&request_id(&request)).is_ok());
    }
}

//! Request parameters and per-request tracing.
//!
//! # Responsibilities
//! - Deserialize pagination and filter query strings
//! - Build the tracing span each request runs in, tagged with its request ID

use axum::{
    body::Body,
    http::{HeaderName, Request},
};
use serde::Deserialize;
use tracing::Span;

use crate::products::Window;

/// Header carrying the request ID, set on the way in and echoed on the way out.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// `?offset=&limit=` for paged endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_offset")]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// `?field=&value=&offset=&limit=` for the filter endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterQuery {
    pub field: String,
    pub value: String,
    #[serde(default = "default_offset")]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_offset() -> i64 {
    Window::DEFAULT_OFFSET
}

fn default_limit() -> i64 {
    Window::DEFAULT_LIMIT
}

impl From<PageQuery> for Window {
    fn from(query: PageQuery) -> Self {
        Window::new(query.offset, query.limit)
    }
}

impl FilterQuery {
    pub fn window(&self) -> Window {
        Window::new(self.offset, self.limit)
    }
}

/// Span for one inbound request.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(Window::from(query), Window::new(0, 10));
    }

    #[test]
    fn test_filter_query_window() {
        let query: FilterQuery =
            serde_json::from_str(r#"{"field": "price", "value": "10-20", "limit": 2}"#).unwrap();
        assert_eq!(query.window(), Window::new(0, 2));
        assert_eq!(query.value, "10-20");
    }
}
